use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::centro_treinamento::{CentroTreinamentoCreate, CentroTreinamentoOut},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/centros-treinamento",
    request_body = CentroTreinamentoCreate,
    responses(
        (status = 201, description = "Training center created successfully", body = CentroTreinamentoOut),
        (status = 303, description = "A training center with this name already exists"),
        (status = 422, description = "Validation error")
    ),
    tag = "centros-treinamento"
)]
pub async fn create_centro_treinamento(
    State(db): State<Database>,
    payload: Result<Json<CentroTreinamentoCreate>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload?;
    req.validate()?;

    let centro = services::create_centro_treinamento(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(CentroTreinamentoOut::from(centro))).into_response())
}

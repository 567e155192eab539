use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::categoria::{CategoriaCreate, CategoriaOut},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/categorias",
    request_body = CategoriaCreate,
    responses(
        (status = 201, description = "Category created successfully", body = CategoriaOut),
        (status = 303, description = "A category with this name already exists"),
        (status = 422, description = "Validation error")
    ),
    tag = "categorias"
)]
pub async fn create_categoria(
    State(db): State<Database>,
    payload: Result<Json<CategoriaCreate>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload?;
    req.validate()?;

    let categoria = services::create_categoria(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(CategoriaOut::from(categoria))).into_response())
}

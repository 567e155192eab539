use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        atleta::{AtletaCreate, AtletaCreated, AtletaDetail, AtletaFilter, AtletaOut},
        common::{LimitOffsetPage, LimitOffsetParams},
    },
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/atletas",
    request_body = AtletaCreate,
    responses(
        (status = 201, description = "Athlete created successfully", body = AtletaCreated),
        (status = 303, description = "An athlete with this cpf already exists"),
        (status = 400, description = "Unknown category or training center"),
        (status = 422, description = "Validation error")
    ),
    tag = "atletas"
)]
pub async fn create_atleta(
    State(db): State<Database>,
    payload: Result<Json<AtletaCreate>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload?;
    req.validate()?;

    let atleta = services::create_atleta(db.pool(), &req).await?;
    tracing::info!(id = atleta.id, "Athlete registered");

    Ok((StatusCode::CREATED, Json(AtletaCreated::from(atleta))).into_response())
}

#[utoipa::path(
    get,
    path = "/atletas",
    params(AtletaFilter, LimitOffsetParams),
    responses(
        (status = 200, description = "Page of athletes", body = LimitOffsetPage<AtletaOut>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "atletas"
)]
pub async fn list_atletas(
    State(db): State<Database>,
    filter: Result<Query<AtletaFilter>, QueryRejection>,
    page: Result<Query<LimitOffsetParams>, QueryRejection>,
) -> Result<Response, WebError> {
    let Query(filter) = filter?;
    let Query(page) = page?;
    page.validate().map_err(WebError::BadRequest)?;

    let response = services::list_atletas(db.pool(), &filter, page).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/atletas/{id}",
    params(
        ("id" = i32, Path, description = "Athlete id")
    ),
    responses(
        (status = 200, description = "Athlete found", body = AtletaDetail),
        (status = 404, description = "Athlete not found")
    ),
    tag = "atletas"
)]
pub async fn get_atleta(
    State(db): State<Database>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Response, WebError> {
    let Path(id) = id?;
    let atleta = services::get_atleta(db.pool(), id).await?;

    Ok(Json(atleta).into_response())
}

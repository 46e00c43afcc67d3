use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::athlete::{AthleteResponse, AthleteSummary, CreateAthleteRequest, UpdateAthleteRequest},
    dto::common::ListParams,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/atleta/",
    params(ListParams),
    responses(
        (status = 200, description = "Page of athletes in reduced form", body = Vec<AthleteSummary>)
    ),
    tag = "athletes"
)]
pub async fn list_athletes(
    State(db): State<Database>,
    Query(params): Query<ListParams>,
) -> Result<Response, WebError> {
    let athletes = services::list_athletes(db.pool(), &params).await?;

    Ok(Json(athletes).into_response())
}

#[utoipa::path(
    get,
    path = "/atleta/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    responses(
        (status = 200, description = "Athlete found", body = AthleteResponse),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn get_athlete(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let athlete = services::get_athlete_by_id(db.pool(), id).await?;

    Ok(Json(athlete).into_response())
}

#[utoipa::path(
    get,
    path = "/atleta/cpf/{cpf}",
    params(
        ("cpf" = String, Path, description = "Athlete cpf")
    ),
    responses(
        (status = 200, description = "Athlete found", body = AthleteResponse),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn get_athlete_by_cpf(
    State(db): State<Database>,
    Path(cpf): Path<String>,
) -> Result<Response, WebError> {
    let athlete = services::get_athlete_by_cpf(db.pool(), &cpf).await?;

    Ok(Json(athlete).into_response())
}

#[utoipa::path(
    get,
    path = "/atleta/nome/{nome}",
    params(
        ("nome" = String, Path, description = "Athlete name")
    ),
    responses(
        (status = 200, description = "Athlete found", body = AthleteResponse),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn get_athlete_by_name(
    State(db): State<Database>,
    Path(nome): Path<String>,
) -> Result<Response, WebError> {
    let athlete = services::get_athlete_by_name(db.pool(), &nome).await?;

    Ok(Json(athlete).into_response())
}

#[utoipa::path(
    post,
    path = "/atleta/",
    request_body = CreateAthleteRequest,
    responses(
        (status = 201, description = "Athlete created", body = AthleteResponse),
        (status = 400, description = "Validation error or unknown category/training center"),
        (status = 409, description = "An athlete with this cpf already exists")
    ),
    tag = "athletes"
)]
pub async fn create_athlete(
    State(db): State<Database>,
    Json(req): Json<CreateAthleteRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let athlete = services::create_athlete(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(athlete)).into_response())
}

#[utoipa::path(
    patch,
    path = "/atleta/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    request_body = UpdateAthleteRequest,
    responses(
        (status = 200, description = "Athlete updated", body = AthleteResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn update_athlete(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateAthleteRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let athlete = services::update_athlete(db.pool(), id, &req).await?;

    Ok(Json(athlete).into_response())
}

#[utoipa::path(
    delete,
    path = "/atleta/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    responses(
        (status = 204, description = "Athlete deleted"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn delete_athlete(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_athlete(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

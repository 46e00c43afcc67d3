use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::training_center::{CreateTrainingCenterRequest, TrainingCenterResponse},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/centros-treinamento/",
    responses(
        (status = 200, description = "List all training centers", body = Vec<TrainingCenterResponse>)
    ),
    tag = "training-centers"
)]
pub async fn list_training_centers(State(db): State<Database>) -> Result<Response, WebError> {
    let centers = services::list_training_centers(db.pool()).await?;

    Ok(Json(centers).into_response())
}

#[utoipa::path(
    get,
    path = "/centros-treinamento/{id}",
    params(
        ("id" = Uuid, Path, description = "Training center id")
    ),
    responses(
        (status = 200, description = "Training center found", body = TrainingCenterResponse),
        (status = 404, description = "Training center not found")
    ),
    tag = "training-centers"
)]
pub async fn get_training_center(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let center = services::get_training_center_by_id(db.pool(), id).await?;

    Ok(Json(center).into_response())
}

#[utoipa::path(
    post,
    path = "/centros-treinamento/",
    request_body = CreateTrainingCenterRequest,
    responses(
        (status = 201, description = "Training center created", body = TrainingCenterResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "A training center with this name already exists")
    ),
    tag = "training-centers"
)]
pub async fn create_training_center(
    State(db): State<Database>,
    Json(req): Json<CreateTrainingCenterRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let center = services::create_training_center(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(center)).into_response())
}

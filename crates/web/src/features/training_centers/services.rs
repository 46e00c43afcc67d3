use sqlx::PgPool;
use storage::{
    dto::training_center::{CreateTrainingCenterRequest, TrainingCenterResponse},
    repository::training_center::TrainingCenterRepository,
};
use uuid::Uuid;

use crate::error::WebResult;

pub async fn list_training_centers(pool: &PgPool) -> WebResult<Vec<TrainingCenterResponse>> {
    let centers = TrainingCenterRepository::new(pool).list().await?;
    Ok(centers
        .into_iter()
        .map(TrainingCenterResponse::from)
        .collect())
}

pub async fn get_training_center_by_id(
    pool: &PgPool,
    id: Uuid,
) -> WebResult<TrainingCenterResponse> {
    let center = TrainingCenterRepository::new(pool).find_by_id(id).await?;
    Ok(center.into())
}

pub async fn create_training_center(
    pool: &PgPool,
    req: &CreateTrainingCenterRequest,
) -> WebResult<TrainingCenterResponse> {
    let center = TrainingCenterRepository::new(pool).create(req).await?;
    Ok(center.into())
}

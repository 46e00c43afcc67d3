use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::TrainingCenter;

/// Name-only reference to a training center, as embedded in athlete payloads.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TrainingCenterRef {
    #[validate(length(min = 1, max = 50, message = "Training center name is required"))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTrainingCenterRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "Name must be between 1 and 50 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 60,
        message = "Address must be between 1 and 60 characters"
    ))]
    pub address: String,

    #[validate(length(
        min = 1,
        max = 30,
        message = "Owner must be between 1 and 30 characters"
    ))]
    pub owner: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrainingCenterResponse {
    pub training_center_id: Uuid,
    pub name: String,
    pub address: String,
    pub owner: String,
}

impl From<TrainingCenter> for TrainingCenterResponse {
    fn from(center: TrainingCenter) -> Self {
        Self {
            training_center_id: center.training_center_id,
            name: center.name,
            address: center.address,
            owner: center.owner,
        }
    }
}

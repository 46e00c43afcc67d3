use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::dto::category::CategoryRef;
use crate::dto::training_center::TrainingCenterRef;
use crate::models::AthleteWithRefs;

/// Request payload for registering a new athlete. The category and training
/// center are referenced by name, never by id; both must already exist.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAthleteRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,

    #[validate(length(equal = 11, message = "CPF must be exactly 11 characters"))]
    pub cpf: String,

    pub age: i32,

    #[validate(range(exclusive_min = 0.0, message = "Height must be positive"))]
    pub height: f64,

    #[validate(range(exclusive_min = 0.0, message = "Weight must be positive"))]
    pub weight: f64,

    #[validate(length(equal = 1, message = "Sex must be a single character"))]
    pub sex: String,

    #[validate(nested)]
    pub category: CategoryRef,

    #[validate(nested)]
    pub training_center: TrainingCenterRef,
}

/// Partial update. Only name, age and weight are mutable; fields left unset
/// keep their stored value.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAthleteRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    pub age: Option<i32>,

    #[validate(range(exclusive_min = 0.0))]
    pub weight: Option<f64>,
}

/// Full athlete representation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
    pub athlete_id: Uuid,
    pub name: String,
    pub cpf: String,
    pub age: i32,
    pub height: f64,
    pub weight: f64,
    pub sex: String,
    pub created_at: NaiveDateTime,
    pub category: CategoryRef,
    pub training_center: TrainingCenterRef,
}

/// Reduced representation used by the listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteSummary {
    pub name: String,
    pub category: CategoryRef,
    pub training_center: TrainingCenterRef,
}

impl From<AthleteWithRefs> for AthleteResponse {
    fn from(athlete: AthleteWithRefs) -> Self {
        Self {
            athlete_id: athlete.athlete_id,
            name: athlete.name,
            cpf: athlete.cpf,
            age: athlete.age,
            height: athlete.height,
            weight: athlete.weight,
            sex: athlete.sex,
            created_at: athlete.created_at,
            category: CategoryRef {
                name: athlete.category_name,
            },
            training_center: TrainingCenterRef {
                name: athlete.training_center_name,
            },
        }
    }
}

impl From<AthleteWithRefs> for AthleteSummary {
    fn from(athlete: AthleteWithRefs) -> Self {
        Self {
            name: athlete.name,
            category: CategoryRef {
                name: athlete.category_name,
            },
            training_center: TrainingCenterRef {
                name: athlete.training_center_name,
            },
        }
    }
}

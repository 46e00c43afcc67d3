use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Athlete {
    pub athlete_id: Uuid,
    pub name: String,
    pub cpf: String,
    pub age: i32,
    pub height: f64,
    pub weight: f64,
    pub sex: String,
    pub created_at: chrono::NaiveDateTime,
    pub category_id: Uuid,
    pub training_center_id: Uuid,
}

/// Athlete row joined with the names of its category and training center.
/// Read queries return this shape so responses never have to chase the
/// foreign keys separately.
#[derive(Debug, Clone, FromRow)]
pub struct AthleteWithRefs {
    pub athlete_id: Uuid,
    pub name: String,
    pub cpf: String,
    pub age: i32,
    pub height: f64,
    pub weight: f64,
    pub sex: String,
    pub created_at: chrono::NaiveDateTime,
    pub category_name: String,
    pub training_center_name: String,
}

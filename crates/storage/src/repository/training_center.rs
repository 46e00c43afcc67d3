use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::training_center::CreateTrainingCenterRequest;
use crate::error::{Result, StorageError};
use crate::models::TrainingCenter;

pub struct TrainingCenterRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TrainingCenterRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<TrainingCenter>> {
        let centers = sqlx::query_as::<_, TrainingCenter>(
            r#"
            SELECT training_center_id, name, address, owner
            FROM training_centers
            ORDER BY name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(centers)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<TrainingCenter> {
        let center = sqlx::query_as::<_, TrainingCenter>(
            r#"
            SELECT training_center_id, name, address, owner
            FROM training_centers
            WHERE training_center_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(center)
    }

    /// Lookup by the natural key. Athlete creation resolves its training
    /// center reference through this.
    pub async fn find_by_name(&self, name: &str) -> Result<TrainingCenter> {
        let center = sqlx::query_as::<_, TrainingCenter>(
            r#"
            SELECT training_center_id, name, address, owner
            FROM training_centers
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(center)
    }

    pub async fn create(&self, req: &CreateTrainingCenterRequest) -> Result<TrainingCenter> {
        let center = sqlx::query_as::<_, TrainingCenter>(
            r#"
            INSERT INTO training_centers (name, address, owner)
            VALUES ($1, $2, $3)
            RETURNING training_center_id, name, address, owner
            "#,
        )
        .bind(&req.name)
        .bind(&req.address)
        .bind(&req.owner)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).into_constraint_violation(format!(
                "A training center named {} already exists",
                req.name
            ))
        })?;

        Ok(center)
    }
}

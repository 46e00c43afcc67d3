use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::athlete::{CreateAthleteRequest, UpdateAthleteRequest};
use crate::dto::common::ListParams;
use crate::error::{Result, StorageError};
use crate::models::{Athlete, AthleteWithRefs};

pub struct AthleteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a page of athletes in creation order.
    pub async fn list(&self, params: &ListParams) -> Result<Vec<AthleteWithRefs>> {
        let athletes = sqlx::query_as::<_, AthleteWithRefs>(
            r#"
            SELECT a.athlete_id, a.name, a.cpf, a.age, a.height, a.weight, a.sex,
                   a.created_at, c.name AS category_name, t.name AS training_center_name
            FROM athletes a
            JOIN categories c ON a.category_id = c.category_id
            JOIN training_centers t ON a.training_center_id = t.training_center_id
            ORDER BY a.created_at, a.athlete_id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(params.limit)
        .bind(params.offset)
        .fetch_all(self.pool)
        .await?;

        Ok(athletes)
    }

    /// Find athlete by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<AthleteWithRefs> {
        let athlete = sqlx::query_as::<_, AthleteWithRefs>(
            r#"
            SELECT a.athlete_id, a.name, a.cpf, a.age, a.height, a.weight, a.sex,
                   a.created_at, c.name AS category_name, t.name AS training_center_name
            FROM athletes a
            JOIN categories c ON a.category_id = c.category_id
            JOIN training_centers t ON a.training_center_id = t.training_center_id
            WHERE a.athlete_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Find athlete by cpf
    pub async fn find_by_cpf(&self, cpf: &str) -> Result<AthleteWithRefs> {
        let athlete = sqlx::query_as::<_, AthleteWithRefs>(
            r#"
            SELECT a.athlete_id, a.name, a.cpf, a.age, a.height, a.weight, a.sex,
                   a.created_at, c.name AS category_name, t.name AS training_center_name
            FROM athletes a
            JOIN categories c ON a.category_id = c.category_id
            JOIN training_centers t ON a.training_center_id = t.training_center_id
            WHERE a.cpf = $1
            "#,
        )
        .bind(cpf)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Find athlete by name. Names are not unique; the earliest-created match
    /// wins so repeated reads stay deterministic.
    pub async fn find_by_name(&self, name: &str) -> Result<AthleteWithRefs> {
        let athlete = sqlx::query_as::<_, AthleteWithRefs>(
            r#"
            SELECT a.athlete_id, a.name, a.cpf, a.age, a.height, a.weight, a.sex,
                   a.created_at, c.name AS category_name, t.name AS training_center_name
            FROM athletes a
            JOIN categories c ON a.category_id = c.category_id
            JOIN training_centers t ON a.training_center_id = t.training_center_id
            WHERE a.name = $1
            ORDER BY a.created_at, a.athlete_id
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Whether any athlete is already registered under this cpf.
    pub async fn cpf_exists(&self, cpf: &str) -> Result<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM athletes WHERE cpf = $1)")
                .bind(cpf)
                .fetch_one(self.pool)
                .await?;

        Ok(exists)
    }

    /// Insert a new athlete. The UNIQUE index on cpf backs the caller's
    /// pre-check; a violation here surfaces as a `ConstraintViolation`.
    pub async fn create(
        &self,
        req: &CreateAthleteRequest,
        category_id: Uuid,
        training_center_id: Uuid,
    ) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            INSERT INTO athletes (name, cpf, age, height, weight, sex, category_id, training_center_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING athlete_id, name, cpf, age, height, weight, sex, created_at,
                      category_id, training_center_id
            "#,
        )
        .bind(&req.name)
        .bind(&req.cpf)
        .bind(req.age)
        .bind(req.height)
        .bind(req.weight)
        .bind(&req.sex)
        .bind(category_id)
        .bind(training_center_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).into_constraint_violation(format!(
                "An athlete is already registered with cpf {}",
                req.cpf
            ))
        })?;

        Ok(athlete)
    }

    /// Apply a partial update. Unset fields keep the stored value.
    pub async fn update(
        &self,
        id: Uuid,
        existing: &AthleteWithRefs,
        req: &UpdateAthleteRequest,
    ) -> Result<AthleteWithRefs> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let age = req.age.unwrap_or(existing.age);
        let weight = req.weight.unwrap_or(existing.weight);

        let updated = sqlx::query_as::<_, Athlete>(
            r#"
            UPDATE athletes
            SET name = $2, age = $3, weight = $4
            WHERE athlete_id = $1
            RETURNING athlete_id, name, cpf, age, height, weight, sex, created_at,
                      category_id, training_center_id
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(age)
        .bind(weight)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(AthleteWithRefs {
            athlete_id: updated.athlete_id,
            name: updated.name,
            cpf: updated.cpf,
            age: updated.age,
            height: updated.height,
            weight: updated.weight,
            sex: updated.sex,
            created_at: updated.created_at,
            category_name: existing.category_name.clone(),
            training_center_name: existing.training_center_name.clone(),
        })
    }

    /// Delete an athlete by ID
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM athletes WHERE athlete_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

use sqlx::PgPool;
use storage::{
    dto::athlete::{AthleteResponse, AthleteSummary, CreateAthleteRequest, UpdateAthleteRequest},
    dto::common::ListParams,
    error::StorageError,
    models::AthleteWithRefs,
    repository::{
        athlete::AthleteRepository, category::CategoryRepository,
        training_center::TrainingCenterRepository,
    },
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};

/// List a page of athletes in the reduced representation.
pub async fn list_athletes(pool: &PgPool, params: &ListParams) -> WebResult<Vec<AthleteSummary>> {
    let athletes = AthleteRepository::new(pool).list(params).await?;
    Ok(athletes.into_iter().map(AthleteSummary::from).collect())
}

pub async fn get_athlete_by_id(pool: &PgPool, id: Uuid) -> WebResult<AthleteResponse> {
    let athlete = AthleteRepository::new(pool).find_by_id(id).await?;
    Ok(athlete.into())
}

pub async fn get_athlete_by_cpf(pool: &PgPool, cpf: &str) -> WebResult<AthleteResponse> {
    let athlete = AthleteRepository::new(pool).find_by_cpf(cpf).await?;
    Ok(athlete.into())
}

pub async fn get_athlete_by_name(pool: &PgPool, name: &str) -> WebResult<AthleteResponse> {
    let athlete = AthleteRepository::new(pool).find_by_name(name).await?;
    Ok(athlete.into())
}

/// Register a new athlete. The referenced category and training center are
/// resolved by name and must exist; the cpf must not be registered yet.
pub async fn create_athlete(pool: &PgPool, req: &CreateAthleteRequest) -> WebResult<AthleteResponse> {
    let category = CategoryRepository::new(pool)
        .find_by_name(&req.category.name)
        .await
        .map_err(|e| match e {
            StorageError::NotFound => {
                WebError::BadRequest(format!("Category {} was not found", req.category.name))
            }
            other => WebError::Storage(other),
        })?;

    let center = TrainingCenterRepository::new(pool)
        .find_by_name(&req.training_center.name)
        .await
        .map_err(|e| match e {
            StorageError::NotFound => WebError::BadRequest(format!(
                "Training center {} was not found",
                req.training_center.name
            )),
            other => WebError::Storage(other),
        })?;

    let repo = AthleteRepository::new(pool);

    // Checked here for a clean 409; the UNIQUE index still catches the
    // check-then-insert race inside `create`.
    if repo.cpf_exists(&req.cpf).await? {
        return Err(StorageError::ConstraintViolation(format!(
            "An athlete is already registered with cpf {}",
            req.cpf
        ))
        .into());
    }

    let created = repo
        .create(req, category.category_id, center.training_center_id)
        .await?;

    Ok(AthleteWithRefs {
        athlete_id: created.athlete_id,
        name: created.name,
        cpf: created.cpf,
        age: created.age,
        height: created.height,
        weight: created.weight,
        sex: created.sex,
        created_at: created.created_at,
        category_name: category.name,
        training_center_name: center.name,
    }
    .into())
}

pub async fn update_athlete(
    pool: &PgPool,
    id: Uuid,
    req: &UpdateAthleteRequest,
) -> WebResult<AthleteResponse> {
    let repo = AthleteRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    let updated = repo.update(id, &existing, req).await?;

    Ok(updated.into())
}

pub async fn delete_athlete(pool: &PgPool, id: Uuid) -> WebResult<()> {
    AthleteRepository::new(pool).delete(id).await?;
    Ok(())
}

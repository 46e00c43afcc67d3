use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::category::CreateCategoryRequest;
use crate::error::{Result, StorageError};
use crate::models::Category;

pub struct CategoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Category>> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT category_id, name FROM categories ORDER BY name")
                .fetch_all(self.pool)
                .await?;

        Ok(categories)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT category_id, name FROM categories WHERE category_id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(category)
    }

    /// Lookup by the natural key. Athlete creation resolves its category
    /// reference through this.
    pub async fn find_by_name(&self, name: &str) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT category_id, name FROM categories WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(category)
    }

    pub async fn create(&self, req: &CreateCategoryRequest) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name) VALUES ($1) RETURNING category_id, name",
        )
        .bind(&req.name)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).into_constraint_violation(format!(
                "A category named {} already exists",
                req.name
            ))
        })?;

        Ok(category)
    }
}

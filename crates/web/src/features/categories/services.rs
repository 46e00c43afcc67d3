use sqlx::PgPool;
use storage::{
    dto::category::{CategoryResponse, CreateCategoryRequest},
    repository::category::CategoryRepository,
};
use uuid::Uuid;

use crate::error::WebResult;

pub async fn list_categories(pool: &PgPool) -> WebResult<Vec<CategoryResponse>> {
    let categories = CategoryRepository::new(pool).list().await?;
    Ok(categories.into_iter().map(CategoryResponse::from).collect())
}

pub async fn get_category_by_id(pool: &PgPool, id: Uuid) -> WebResult<CategoryResponse> {
    let category = CategoryRepository::new(pool).find_by_id(id).await?;
    Ok(category.into())
}

pub async fn create_category(
    pool: &PgPool,
    req: &CreateCategoryRequest,
) -> WebResult<CategoryResponse> {
    let category = CategoryRepository::new(pool).create(req).await?;
    Ok(category.into())
}

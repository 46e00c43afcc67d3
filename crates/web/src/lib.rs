pub mod config;
pub mod error;
pub mod features;

use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::athletes::handlers::list_athletes,
        features::athletes::handlers::get_athlete,
        features::athletes::handlers::get_athlete_by_cpf,
        features::athletes::handlers::get_athlete_by_name,
        features::athletes::handlers::create_athlete,
        features::athletes::handlers::update_athlete,
        features::athletes::handlers::delete_athlete,
        features::categories::handlers::list_categories,
        features::categories::handlers::get_category,
        features::categories::handlers::create_category,
        features::training_centers::handlers::list_training_centers,
        features::training_centers::handlers::get_training_center,
        features::training_centers::handlers::create_training_center,
    ),
    components(
        schemas(
            storage::dto::athlete::CreateAthleteRequest,
            storage::dto::athlete::UpdateAthleteRequest,
            storage::dto::athlete::AthleteResponse,
            storage::dto::athlete::AthleteSummary,
            storage::dto::category::CategoryRef,
            storage::dto::category::CreateCategoryRequest,
            storage::dto::category::CategoryResponse,
            storage::dto::training_center::TrainingCenterRef,
            storage::dto::training_center::CreateTrainingCenterRequest,
            storage::dto::training_center::TrainingCenterResponse,
        )
    ),
    tags(
        (name = "athletes", description = "Athlete registration and lookup"),
        (name = "categories", description = "Category endpoints"),
        (name = "training-centers", description = "Training center endpoints"),
    )
)]
pub struct ApiDoc;

/// Build the full application router around a database handle.
pub fn app(db: Database) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/atleta", features::athletes::routes())
        .nest("/categorias", features::categories::routes())
        .nest("/centros-treinamento", features::training_centers::routes())
        .layer(cors)
        .with_state(db)
}

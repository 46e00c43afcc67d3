use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{
    create_athlete, delete_athlete, get_athlete, get_athlete_by_cpf, get_athlete_by_name,
    list_athletes, update_athlete,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_athletes))
        .route("/", post(create_athlete))
        .route(
            "/:id",
            get(get_athlete).patch(update_athlete).delete(delete_athlete),
        )
        .route("/cpf/:cpf", get(get_athlete_by_cpf))
        .route("/nome/:nome", get(get_athlete_by_name))
}

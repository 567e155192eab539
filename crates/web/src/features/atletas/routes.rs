use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{create_atleta, get_atleta, list_atletas};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_atletas).post(create_atleta))
        .route("/:id", get(get_atleta))
}

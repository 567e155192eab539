use axum::{Router, routing::post};
use storage::Database;

use super::handlers::create_centro_treinamento;

pub fn routes() -> Router<Database> {
    Router::new().route("/", post(create_centro_treinamento))
}

use axum::Router;
use storage::Database;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::ApiDoc;
use crate::features::{atletas, categorias, centros_treinamento, health};

/// The complete application: feature routes, API docs and middleware.
pub fn app(db: Database) -> Router {
    Router::new()
        .nest("/categorias", categorias::routes::routes())
        .nest("/centros-treinamento", centros_treinamento::routes::routes())
        .nest("/atletas", atletas::routes::routes())
        .nest("/health", health::routes::routes())
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(db)
}

use anyhow::Context;
use storage::Database;
use utoipa::OpenApi;

mod config;
mod error;
mod features;
mod routes;
#[cfg(test)]
mod test_utils;

use config::Config;
use features::{atletas, categorias, centros_treinamento, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Workout API",
        description = "Categories, training centers and athletes, with filtered and paginated athlete listing."
    ),
    paths(
        categorias::handlers::create_categoria,
        centros_treinamento::handlers::create_centro_treinamento,
        atletas::handlers::create_atleta,
        atletas::handlers::list_atletas,
        atletas::handlers::get_atleta,
        health::handlers::health,
    ),
    components(
        schemas(
            storage::dto::categoria::CategoriaCreate,
            storage::dto::categoria::CategoriaOut,
            storage::dto::centro_treinamento::CentroTreinamentoCreate,
            storage::dto::centro_treinamento::CentroTreinamentoOut,
            storage::dto::atleta::AtletaCreate,
            storage::dto::atleta::AtletaCreated,
            storage::dto::atleta::AtletaOut,
            storage::dto::atleta::AtletaDetail,
            health::handlers::HealthStatus,
        )
    ),
    tags(
        (name = "categorias", description = "Athlete categories"),
        (name = "centros-treinamento", description = "Training centers"),
        (name = "atletas", description = "Athletes"),
        (name = "health", description = "Liveness"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Workout API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config.redacted_database_url()
    );
    let db = Database::new(&config.database_url, config.database_max_connections)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    db.ensure_schema()
        .await
        .context("Failed to create database schema")?;
    tracing::info!("Database schema ready");

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/docs/", bind_address);

    axum::serve(listener, routes::app(db))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

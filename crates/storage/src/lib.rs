use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

pub mod dto;
pub mod error;
pub mod models;
pub mod repository;

use error::Result;

const SCHEMA: &str = include_str!("../schema.sql");

/// Shared handle to the relational store.
///
/// Cloning is cheap: every clone refers to the same connection pool, and each
/// repository call checks a connection (or a transaction) out of it for the
/// duration of one operation only.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Creates the tables, constraints and indexes when they are missing.
    ///
    /// Every statement is `IF NOT EXISTS`, so running this against an already
    /// initialised database leaves it untouched.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;
        tracing::debug!("Schema is in place");
        Ok(())
    }
}

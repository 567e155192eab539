use std::collections::HashMap;

use sqlx::PgPool;

use crate::dto::centro_treinamento::CentroTreinamentoCreate;
use crate::error::Result;
use crate::models::CentroTreinamento;
use crate::repository::NameLookup;

pub struct CentroTreinamentoRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CentroTreinamentoRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new training center. A duplicate name surfaces as a unique violation
    /// and the transaction is rolled back.
    pub async fn create(&self, req: &CentroTreinamentoCreate) -> Result<CentroTreinamento> {
        let mut tx = self.pool.begin().await?;

        let centro = sqlx::query_as::<_, CentroTreinamento>(
            r#"
            INSERT INTO centros_treinamento (nome)
            VALUES ($1)
            RETURNING id, nome
            "#,
        )
        .bind(&req.nome)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(centro)
    }
}

#[async_trait::async_trait]
impl NameLookup for CentroTreinamentoRepository<'_> {
    async fn names_by_ids(&self, ids: &[i32]) -> Result<HashMap<i32, String>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, String)> =
            sqlx::query_as("SELECT id, nome FROM centros_treinamento WHERE id = ANY($1)")
                .bind(ids)
                .fetch_all(self.pool)
                .await?;

        Ok(rows.into_iter().collect())
    }
}

use std::collections::HashMap;

use sqlx::PgPool;

use crate::dto::categoria::CategoriaCreate;
use crate::error::Result;
use crate::models::Categoria;
use crate::repository::NameLookup;

pub struct CategoriaRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoriaRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new category. A duplicate name surfaces as a unique violation
    /// and the transaction is rolled back.
    pub async fn create(&self, req: &CategoriaCreate) -> Result<Categoria> {
        let mut tx = self.pool.begin().await?;

        let categoria = sqlx::query_as::<_, Categoria>(
            r#"
            INSERT INTO categorias (nome)
            VALUES ($1)
            RETURNING id, nome
            "#,
        )
        .bind(&req.nome)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(categoria)
    }
}

#[async_trait::async_trait]
impl NameLookup for CategoriaRepository<'_> {
    async fn names_by_ids(&self, ids: &[i32]) -> Result<HashMap<i32, String>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, String)> =
            sqlx::query_as("SELECT id, nome FROM categorias WHERE id = ANY($1)")
                .bind(ids)
                .fetch_all(self.pool)
                .await?;

        Ok(rows.into_iter().collect())
    }
}

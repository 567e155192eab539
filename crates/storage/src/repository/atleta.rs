use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::dto::atleta::{AtletaCreate, AtletaFilter};
use crate::dto::common::LimitOffsetParams;
use crate::error::{Result, StorageError};
use crate::models::Atleta;

pub struct AtletaRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AtletaRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new athlete.
    ///
    /// The referenced category and training center are not looked up first: a
    /// duplicate cpf or a dangling reference is rejected by the database
    /// constraints, and the transaction is rolled back when it is dropped.
    pub async fn create(&self, req: &AtletaCreate) -> Result<Atleta> {
        let mut tx = self.pool.begin().await?;

        let atleta = sqlx::query_as::<_, Atleta>(
            r#"
            INSERT INTO atletas (nome, cpf, categoria_id, centro_treinamento_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, nome, cpf, categoria_id, centro_treinamento_id
            "#,
        )
        .bind(&req.nome)
        .bind(&req.cpf)
        .bind(req.categoria_id)
        .bind(req.centro_treinamento_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(atleta)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Atleta> {
        sqlx::query_as::<_, Atleta>(
            r#"
            SELECT id, nome, cpf, categoria_id, centro_treinamento_id
            FROM atletas
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// One page of athletes matching `filter`, ordered by id, together with the
    /// number of athletes matching it overall.
    pub async fn list(
        &self,
        filter: &AtletaFilter,
        page: &LimitOffsetParams,
    ) -> Result<(Vec<Atleta>, i64)> {
        let total = self.count(filter).await?;

        let mut query = QueryBuilder::new(
            r#"
            SELECT id, nome, cpf, categoria_id, centro_treinamento_id
            FROM atletas
            WHERE 1=1
            "#,
        );
        push_filters(&mut query, filter);

        query.push(" ORDER BY id ASC LIMIT ");
        query.push_bind(page.limit());
        query.push(" OFFSET ");
        query.push_bind(page.offset());

        let atletas = query
            .build_query_as::<Atleta>()
            .fetch_all(self.pool)
            .await?;

        Ok((atletas, total))
    }

    async fn count(&self, filter: &AtletaFilter) -> Result<i64> {
        let mut query = QueryBuilder::new("SELECT COUNT(*) FROM atletas WHERE 1=1");
        push_filters(&mut query, filter);

        let count = query
            .build_query_scalar::<i64>()
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}

fn push_filters<'q>(query: &mut QueryBuilder<'q, Postgres>, filter: &'q AtletaFilter) {
    if let Some(nome) = filter.nome() {
        query.push(" AND nome ILIKE ");
        query.push_bind(format!("%{}%", escape_like(nome)));
        query.push(r" ESCAPE '\'");
    }

    if let Some(cpf) = filter.cpf() {
        query.push(" AND cpf = ");
        query.push_bind(cpf);
    }
}

// `%` and `_` typed by the client are matched literally
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

use sqlx::PgPool;
use storage::{
    dto::centro_treinamento::CentroTreinamentoCreate, models::CentroTreinamento,
    repository::centro_treinamento::CentroTreinamentoRepository,
};

use crate::error::{WebError, WebResult};

/// Create a training center; a name that is already taken is a conflict
pub async fn create_centro_treinamento(
    pool: &PgPool,
    request: &CentroTreinamentoCreate,
) -> WebResult<CentroTreinamento> {
    let repo = CentroTreinamentoRepository::new(pool);

    repo.create(request).await.map_err(|e| {
        if e.is_unique_violation() {
            tracing::warn!(nome = %request.nome, "Duplicate training center name");
            WebError::Conflict(format!(
                "Já existe um centro de treinamento cadastrado com o nome: {}",
                request.nome
            ))
        } else {
            e.into()
        }
    })
}

use sqlx::PgPool;
use storage::{
    dto::categoria::CategoriaCreate, models::Categoria,
    repository::categoria::CategoriaRepository,
};

use crate::error::{WebError, WebResult};

/// Create a category; a name that is already taken is a conflict
pub async fn create_categoria(pool: &PgPool, request: &CategoriaCreate) -> WebResult<Categoria> {
    let repo = CategoriaRepository::new(pool);

    repo.create(request).await.map_err(|e| {
        if e.is_unique_violation() {
            tracing::warn!(nome = %request.nome, "Duplicate category name");
            WebError::Conflict(format!(
                "Já existe uma categoria cadastrada com o nome: {}",
                request.nome
            ))
        } else {
            e.into()
        }
    })
}

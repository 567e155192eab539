use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// An athlete row. The category and training center are referenced by id only;
/// their names are looked up when a response needs them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Atleta {
    pub id: i32,
    pub nome: String,
    pub cpf: String,
    pub categoria_id: Option<i32>,
    pub centro_treinamento_id: Option<i32>,
}

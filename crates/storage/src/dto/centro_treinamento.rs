use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating a training center
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CentroTreinamentoCreate {
    #[validate(length(
        min = 1,
        max = 120,
        message = "nome must be between 1 and 120 characters"
    ))]
    pub nome: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CentroTreinamentoOut {
    pub id: i32,
    pub nome: String,
}

impl From<crate::models::CentroTreinamento> for CentroTreinamentoOut {
    fn from(centro: crate::models::CentroTreinamento) -> Self {
        Self {
            id: centro.id,
            nome: centro.nome,
        }
    }
}

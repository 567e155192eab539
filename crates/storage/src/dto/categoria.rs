use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CategoriaCreate {
    #[validate(length(
        min = 1,
        max = 120,
        message = "nome must be between 1 and 120 characters"
    ))]
    pub nome: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoriaOut {
    pub id: i32,
    pub nome: String,
}

impl From<crate::models::Categoria> for CategoriaOut {
    fn from(categoria: crate::models::Categoria) -> Self {
        Self {
            id: categoria.id,
            nome: categoria.nome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_nome() {
        let req = CategoriaCreate {
            nome: "Scale".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_empty_nome_rejected() {
        let req = CategoriaCreate {
            nome: String::new(),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("nome"));
    }

    #[test]
    fn test_nome_longer_than_column_rejected() {
        let req = CategoriaCreate {
            nome: "x".repeat(121),
        };
        assert!(req.validate().is_err());
    }
}

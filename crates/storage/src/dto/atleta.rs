use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Request payload for registering an athlete
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AtletaCreate {
    #[validate(length(
        min = 1,
        max = 120,
        message = "nome must be between 1 and 120 characters"
    ))]
    pub nome: String,

    #[validate(custom(
        function = "validate_cpf",
        message = "cpf must have 11 digits, as 00000000000 or 000.000.000-00"
    ))]
    #[schema(example = "123.456.789-00")]
    pub cpf: String,

    pub categoria_id: Option<i32>,

    pub centro_treinamento_id: Option<i32>,
}

/// Response returned once an athlete is registered
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AtletaCreated {
    pub id: i32,
    pub nome: String,
    pub cpf: String,
}

/// List entry: related entities are shown by name rather than by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AtletaOut {
    pub nome: String,
    pub centro_treinamento: Option<String>,
    pub categoria: Option<String>,
}

/// Full athlete record with resolved relations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AtletaDetail {
    pub id: i32,
    pub nome: String,
    pub cpf: String,
    pub categoria: Option<String>,
    pub centro_treinamento: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AtletaFilter {
    /// Case-insensitive substring of the athlete name
    pub nome: Option<String>,
    /// Exact CPF
    pub cpf: Option<String>,
}

impl AtletaFilter {
    pub fn nome(&self) -> Option<&str> {
        non_blank(self.nome.as_deref())
    }

    pub fn cpf(&self) -> Option<&str> {
        non_blank(self.cpf.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

// Accepts "12345678900" and "123.456.789-00"
fn validate_cpf(cpf: &str) -> Result<(), validator::ValidationError> {
    let bytes = cpf.as_bytes();

    let valid = match bytes.len() {
        11 => bytes.iter().all(u8::is_ascii_digit),
        14 => bytes.iter().enumerate().all(|(i, b)| match i {
            3 | 7 => *b == b'.',
            11 => *b == b'-',
            _ => b.is_ascii_digit(),
        }),
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_cpf"))
    }
}

impl From<crate::models::Atleta> for AtletaCreated {
    fn from(atleta: crate::models::Atleta) -> Self {
        Self {
            id: atleta.id,
            nome: atleta.nome,
            cpf: atleta.cpf,
        }
    }
}

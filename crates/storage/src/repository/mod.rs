pub mod atleta;
pub mod categoria;
pub mod centro_treinamento;
pub mod lookup;

pub use lookup::NameLookup;

use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID tipado da categoria
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoriaId(pub Uuid);

impl CategoriaId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for CategoriaId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CategoriaId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Categoria (agregado a002): tabela de referência
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Categoria {
    pub id: CategoriaId,
    pub nome: String,
}

impl Categoria {
    pub fn new(id: Uuid, nome: String) -> Self {
        Self {
            id: CategoriaId::new(id),
            nome,
        }
    }
}

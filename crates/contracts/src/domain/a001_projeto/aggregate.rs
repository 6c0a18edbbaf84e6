use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID tipado do projeto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjetoId(pub Uuid);

impl ProjetoId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ProjetoId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProjetoId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Projeto (agregado a001): tabela de referência, somente leitura neste painel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projeto {
    pub id: ProjetoId,
    pub nome: String,
}

impl Projeto {
    pub fn new(id: Uuid, nome: String) -> Self {
        Self {
            id: ProjetoId::new(id),
            nome,
        }
    }
}

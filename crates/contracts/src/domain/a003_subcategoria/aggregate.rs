use serde::{Deserialize, Serialize};

/// Subcategoria (agregado a003): tabela de referência com chave inteira
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subcategoria {
    pub id: i32,
    pub nome: String,
}

use serde::{Deserialize, Serialize};

/// Tipo de unidade do indicador (agregado a004): porcentagem, decimal, inteiro...
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipoUnidade {
    pub id: i32,
    pub tipo: String,
}

use serde::{Deserialize, Serialize};

/// Tipo de apresentação do indicador (agregado a005): define como o valor é
/// exibido nos painéis gerados. A planilha de importação referencia esta tabela
/// pela coluna `tipo_indicador`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipoApresentacao {
    pub id: i32,
    pub tipo: String,
}

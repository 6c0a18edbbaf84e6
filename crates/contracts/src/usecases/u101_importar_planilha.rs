//! Contrato de transporte do caso de uso u101 (importação de indicadores
//! por planilha)

use crate::domain::a010_controle_indicador::planilha::PlanilhaControle;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Requisição de importação: a planilha já extraída no navegador mais o
/// usuário dono da sessão (escopa os projetos permitidos)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportacaoRequest {
    pub usuario_id: Uuid,
    pub planilha: PlanilhaControle,
}

/// Resposta da importação.
///
/// `inseridos` vem da contagem devolvida pelo banco, não do total tentado.
/// Com qualquer erro de validação o lote inteiro é rejeitado: `inseridos` é
/// zero e `erros` traz todas as mensagens, cada uma com a linha da planilha.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportacaoResponse {
    pub inseridos: usize,
    pub erros: Vec<String>,
}

impl ImportacaoResponse {
    pub fn sucesso(inseridos: usize) -> Self {
        Self {
            inseridos,
            erros: Vec::new(),
        }
    }

    pub fn rejeitada(erros: Vec<String>) -> Self {
        Self {
            inseridos: 0,
            erros,
        }
    }
}

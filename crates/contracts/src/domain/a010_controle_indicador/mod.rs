pub mod aggregate;
pub mod import;
pub mod planilha;

pub use aggregate::{
    linhas_previstas, AtualizacaoControleIndicador, ControleIndicador, ControleIndicadorId,
    EdicaoLinhaControle, NovoControleIndicador, Recorrencia,
};
pub use import::{normalizar_texto, validar_linhas, ReferenciasImportacao};
pub use planilha::{PlanilhaControle, CABECALHOS_OBRIGATORIOS, COLUNAS_MODELO};

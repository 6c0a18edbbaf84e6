use sea_orm::DbErr;
use thiserror::Error;

/// Erros de serviço do painel de controle
#[derive(Debug, Error)]
pub enum ControleError {
    #[error("Registro não encontrado: {0}")]
    NaoEncontrado(i64),

    #[error("{0}")]
    Validacao(String),

    #[error("Erro de banco de dados: {0}")]
    Banco(#[from] DbErr),
}

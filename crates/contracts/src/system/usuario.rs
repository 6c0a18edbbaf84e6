use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Usuário autenticado, consumido pela interface a partir da sessão já
/// estabelecida. Autenticação e gestão de sessão acontecem fora deste
/// repositório; aqui o objeto só identifica o usuário e escopa os projetos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usuario {
    pub id: Uuid,
    pub nome: String,
    pub email: String,
}

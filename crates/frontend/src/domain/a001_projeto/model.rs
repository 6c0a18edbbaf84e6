use crate::shared::api::get_json;
use contracts::domain::a001_projeto::Projeto;
use uuid::Uuid;

/// Somente os projetos vinculados ao usuário da sessão
pub async fn fetch_vinculados(usuario_id: &Uuid) -> Result<Vec<Projeto>, String> {
    get_json(&format!("/api/projeto/vinculados?usuario_id={}", usuario_id)).await
}

use super::repository;
use contracts::domain::a001_projeto::Projeto;
use uuid::Uuid;

/// Todos os projetos (uso administrativo)
pub async fn list_all() -> anyhow::Result<Vec<Projeto>> {
    let db = crate::shared::data::db::get_connection();
    Ok(repository::list_all(&db).await?)
}

/// Projetos vinculados ao usuário pela tabela de relação.
/// Usuário sem vínculo recebe lista vazia; a interface mostra o estado vazio
/// e não dispara consultas de controle.
pub async fn list_vinculados(usuario_id: &Uuid) -> anyhow::Result<Vec<Projeto>> {
    let db = crate::shared::data::db::get_connection();
    let ids = repository::list_vinculo_ids(&db, usuario_id).await?;
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    Ok(repository::list_by_ids(&db, &ids).await?)
}

/// Dados de exemplo para ambiente de desenvolvimento: três projetos, os dois
/// primeiros vinculados ao usuário informado
pub async fn insert_test_data(usuario_id: &Uuid) -> anyhow::Result<usize> {
    let db = crate::shared::data::db::get_connection();
    let nomes = ["Projeto Alpha", "Projeto Beta", "Projeto Gama"];

    let mut inseridos = 0;
    for (idx, nome) in nomes.iter().enumerate() {
        let projeto = Projeto::new(Uuid::new_v4(), nome.to_string());
        repository::insert(&db, &projeto).await?;
        if idx < 2 {
            repository::insert_vinculo(&db, usuario_id, &projeto.id.value()).await?;
        }
        inseridos += 1;
    }
    Ok(inseridos)
}

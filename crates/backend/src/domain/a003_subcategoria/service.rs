use super::repository;
use contracts::domain::a003_subcategoria::Subcategoria;

pub async fn list_all() -> anyhow::Result<Vec<Subcategoria>> {
    let db = crate::shared::data::db::get_connection();
    Ok(repository::list_all(&db).await?)
}

pub async fn insert_test_data() -> anyhow::Result<usize> {
    let db = crate::shared::data::db::get_connection();
    let nomes = ["Gestão", "Processos", "Pessoas"];
    for nome in nomes {
        repository::insert(&db, nome).await?;
    }
    Ok(nomes.len())
}

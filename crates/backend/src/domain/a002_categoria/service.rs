use super::repository;
use contracts::domain::a002_categoria::Categoria;
use uuid::Uuid;

pub async fn list_all() -> anyhow::Result<Vec<Categoria>> {
    let db = crate::shared::data::db::get_connection();
    Ok(repository::list_all(&db).await?)
}

pub async fn insert_test_data() -> anyhow::Result<usize> {
    let db = crate::shared::data::db::get_connection();
    let nomes = ["Qualidade", "Financeiro", "Operacional"];
    for nome in nomes {
        let categoria = Categoria::new(Uuid::new_v4(), nome.to_string());
        repository::insert(&db, &categoria).await?;
    }
    Ok(nomes.len())
}

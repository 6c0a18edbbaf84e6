use super::repository;
use contracts::domain::a004_tipo_unidade::TipoUnidade;

pub async fn list_all() -> anyhow::Result<Vec<TipoUnidade>> {
    let db = crate::shared::data::db::get_connection();
    Ok(repository::list_all(&db).await?)
}

pub async fn insert_test_data() -> anyhow::Result<usize> {
    let db = crate::shared::data::db::get_connection();
    let tipos = ["Porcentagem", "Decimal", "Inteiro"];
    for tipo in tipos {
        repository::insert(&db, tipo).await?;
    }
    Ok(tipos.len())
}

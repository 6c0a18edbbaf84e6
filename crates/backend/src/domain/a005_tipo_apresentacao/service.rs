use super::repository;
use contracts::domain::a005_tipo_apresentacao::TipoApresentacao;

pub async fn list_all() -> anyhow::Result<Vec<TipoApresentacao>> {
    let db = crate::shared::data::db::get_connection();
    Ok(repository::list_all(&db).await?)
}

pub async fn insert_test_data() -> anyhow::Result<usize> {
    let db = crate::shared::data::db::get_connection();
    let tipos = ["Percentual", "Valor absoluto", "Acumulado"];
    for tipo in tipos {
        repository::insert(&db, tipo).await?;
    }
    Ok(tipos.len())
}

use crate::shared::api::get_json;
use contracts::domain::a002_categoria::Categoria;

pub async fn fetch_all() -> Result<Vec<Categoria>, String> {
    get_json("/api/categoria").await
}

use crate::shared::api::get_json;
use contracts::domain::a003_subcategoria::Subcategoria;

pub async fn fetch_all() -> Result<Vec<Subcategoria>, String> {
    get_json("/api/subcategoria").await
}

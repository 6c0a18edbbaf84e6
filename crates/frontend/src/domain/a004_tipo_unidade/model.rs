use crate::shared::api::get_json;
use contracts::domain::a004_tipo_unidade::TipoUnidade;

pub async fn fetch_all() -> Result<Vec<TipoUnidade>, String> {
    get_json("/api/tipo_unidade").await
}

use crate::shared::api::get_json;
use contracts::domain::a005_tipo_apresentacao::TipoApresentacao;

pub async fn fetch_all() -> Result<Vec<TipoApresentacao>, String> {
    get_json("/api/tipo_apresentacao").await
}

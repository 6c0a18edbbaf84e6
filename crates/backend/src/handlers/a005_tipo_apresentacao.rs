use axum::Json;
use serde_json::json;

use crate::domain::a005_tipo_apresentacao;

/// GET /api/tipo_apresentacao
pub async fn list_all() -> Result<
    Json<Vec<contracts::domain::a005_tipo_apresentacao::TipoApresentacao>>,
    axum::http::StatusCode,
> {
    match a005_tipo_apresentacao::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/tipo_apresentacao/testdata
pub async fn insert_test_data() -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    match a005_tipo_apresentacao::service::insert_test_data().await {
        Ok(n) => Ok(Json(json!({"inseridos": n}))),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

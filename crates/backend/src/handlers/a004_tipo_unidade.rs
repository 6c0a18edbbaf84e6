use axum::Json;
use serde_json::json;

use crate::domain::a004_tipo_unidade;

/// GET /api/tipo_unidade
pub async fn list_all() -> Result<
    Json<Vec<contracts::domain::a004_tipo_unidade::TipoUnidade>>,
    axum::http::StatusCode,
> {
    match a004_tipo_unidade::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/tipo_unidade/testdata
pub async fn insert_test_data() -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    match a004_tipo_unidade::service::insert_test_data().await {
        Ok(n) => Ok(Json(json!({"inseridos": n}))),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

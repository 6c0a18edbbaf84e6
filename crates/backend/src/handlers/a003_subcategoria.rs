use axum::Json;
use serde_json::json;

use crate::domain::a003_subcategoria;

/// GET /api/subcategoria
pub async fn list_all() -> Result<
    Json<Vec<contracts::domain::a003_subcategoria::Subcategoria>>,
    axum::http::StatusCode,
> {
    match a003_subcategoria::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/subcategoria/testdata
pub async fn insert_test_data() -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    match a003_subcategoria::service::insert_test_data().await {
        Ok(n) => Ok(Json(json!({"inseridos": n}))),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

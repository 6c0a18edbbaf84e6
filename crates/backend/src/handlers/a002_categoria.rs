use axum::Json;
use serde_json::json;

use crate::domain::a002_categoria;

/// GET /api/categoria
pub async fn list_all() -> Result<
    Json<Vec<contracts::domain::a002_categoria::Categoria>>,
    axum::http::StatusCode,
> {
    match a002_categoria::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/categoria/testdata
pub async fn insert_test_data() -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    match a002_categoria::service::insert_test_data().await {
        Ok(n) => Ok(Json(json!({"inseridos": n}))),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

use axum::{extract::Query, Json};
use serde::Deserialize;
use serde_json::json;

use crate::domain::a001_projeto;

#[derive(Deserialize)]
pub struct UsuarioQuery {
    pub usuario_id: uuid::Uuid,
}

/// GET /api/projeto
pub async fn list_all() -> Result<
    Json<Vec<contracts::domain::a001_projeto::Projeto>>,
    axum::http::StatusCode,
> {
    match a001_projeto::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/projeto/vinculados?usuario_id=...
pub async fn list_vinculados(
    Query(query): Query<UsuarioQuery>,
) -> Result<Json<Vec<contracts::domain::a001_projeto::Projeto>>, axum::http::StatusCode> {
    match a001_projeto::service::list_vinculados(&query.usuario_id).await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/projeto/testdata?usuario_id=...
pub async fn insert_test_data(
    Query(query): Query<UsuarioQuery>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    match a001_projeto::service::insert_test_data(&query.usuario_id).await {
        Ok(n) => Ok(Json(json!({"inseridos": n}))),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

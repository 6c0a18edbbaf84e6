use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::domain::a010_controle_indicador::{repository::FiltroControles, service};
use crate::shared::error::ControleError;
use contracts::domain::a010_controle_indicador::{
    AtualizacaoControleIndicador, ControleIndicador, EdicaoLinhaControle, NovoControleIndicador,
};
use contracts::usecases::u101_importar_planilha::{ImportacaoRequest, ImportacaoResponse};

fn status_de(erro: &ControleError) -> StatusCode {
    match erro {
        ControleError::NaoEncontrado(_) => StatusCode::NOT_FOUND,
        ControleError::Validacao(_) => StatusCode::BAD_REQUEST,
        ControleError::Banco(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn erro_json(erro: ControleError) -> (StatusCode, Json<serde_json::Value>) {
    let status = status_de(&erro);
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!("controle_indicador: {erro}");
    }
    (status, Json(json!({"erro": erro.to_string()})))
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub usuario_id: Uuid,
    pub projeto_id: Option<Uuid>,
    pub categoria_id: Option<Uuid>,
    pub busca: Option<String>,
}

/// GET /api/controle_indicador?usuario_id=...&projeto_id=&categoria_id=&busca=
pub async fn list(
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ControleIndicador>>, (StatusCode, Json<serde_json::Value>)> {
    let filtro = FiltroControles {
        projeto_id: query.projeto_id,
        categoria_id: query.categoria_id,
        busca: query.busca,
    };
    service::list(&query.usuario_id, filtro)
        .await
        .map(Json)
        .map_err(erro_json)
}

/// GET /api/controle_indicador/:id
pub async fn get_by_id(
    Path(id): Path<i64>,
) -> Result<Json<ControleIndicador>, (StatusCode, Json<serde_json::Value>)> {
    service::get_by_id(id).await.map(Json).map_err(erro_json)
}

/// POST /api/controle_indicador
pub async fn create(
    Json(dto): Json<NovoControleIndicador>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    use contracts::domain::common::AggregateId;
    service::create(dto)
        .await
        .map(|(id, linhas_previstas)| {
            Json(json!({
                "id": id.as_string(),
                "linhas_previstas": linhas_previstas,
            }))
        })
        .map_err(erro_json)
}

/// PUT /api/controle_indicador/:id (edição individual, subconjunto editável)
pub async fn update(
    Path(id): Path<i64>,
    Json(dto): Json<AtualizacaoControleIndicador>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    service::update(id, dto)
        .await
        .map(|_| Json(json!({"ok": true})))
        .map_err(erro_json)
}

/// PUT /api/controle_indicador/:id/linha (linha completa da edição em massa)
pub async fn update_linha(
    Path(id): Path<i64>,
    Json(linha): Json<EdicaoLinhaControle>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    service::update_linha(id, linha)
        .await
        .map(|_| Json(json!({"ok": true})))
        .map_err(erro_json)
}

/// DELETE /api/controle_indicador/:id
pub async fn delete(
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    service::delete(id)
        .await
        .map(|_| Json(json!({"ok": true})))
        .map_err(erro_json)
}

/// POST /api/controle_indicador/importar
pub async fn importar(
    Json(request): Json<ImportacaoRequest>,
) -> Result<Json<ImportacaoResponse>, (StatusCode, Json<serde_json::Value>)> {
    service::importar(request).await.map(Json).map_err(erro_json)
}

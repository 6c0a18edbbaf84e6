use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::handlers;

/// Configuração de todas as rotas da aplicação
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // A001 Projetos (referência + vínculo por usuário)
        // ========================================
        .route("/api/projeto", get(handlers::a001_projeto::list_all))
        .route(
            "/api/projeto/vinculados",
            get(handlers::a001_projeto::list_vinculados),
        )
        .route(
            "/api/projeto/testdata",
            post(handlers::a001_projeto::insert_test_data),
        )
        // ========================================
        // A002-A005 Tabelas de referência
        // ========================================
        .route("/api/categoria", get(handlers::a002_categoria::list_all))
        .route(
            "/api/categoria/testdata",
            post(handlers::a002_categoria::insert_test_data),
        )
        .route(
            "/api/subcategoria",
            get(handlers::a003_subcategoria::list_all),
        )
        .route(
            "/api/subcategoria/testdata",
            post(handlers::a003_subcategoria::insert_test_data),
        )
        .route(
            "/api/tipo_unidade",
            get(handlers::a004_tipo_unidade::list_all),
        )
        .route(
            "/api/tipo_unidade/testdata",
            post(handlers::a004_tipo_unidade::insert_test_data),
        )
        .route(
            "/api/tipo_apresentacao",
            get(handlers::a005_tipo_apresentacao::list_all),
        )
        .route(
            "/api/tipo_apresentacao/testdata",
            post(handlers::a005_tipo_apresentacao::insert_test_data),
        )
        // ========================================
        // A010 Controle de indicadores
        // ========================================
        .route(
            "/api/controle_indicador",
            get(handlers::a010_controle_indicador::list).post(handlers::a010_controle_indicador::create),
        )
        .route(
            "/api/controle_indicador/:id",
            get(handlers::a010_controle_indicador::get_by_id)
                .put(handlers::a010_controle_indicador::update)
                .delete(handlers::a010_controle_indicador::delete),
        )
        .route(
            "/api/controle_indicador/:id/linha",
            axum::routing::put(handlers::a010_controle_indicador::update_linha),
        )
        .route(
            "/api/controle_indicador/importar",
            post(handlers::a010_controle_indicador::importar),
        )
        // Bundle wasm do frontend
        .fallback_service(ServeDir::new("dist"))
}

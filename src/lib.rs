// src/lib.rs

pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use axum::{
    middleware as axum_middleware,
    routing::{get, put},
    Router,
};

use crate::config::AppState;
use crate::middleware::auth::auth_guard;

/// Monta o router completo da aplicação.
pub fn app(app_state: AppState) -> Router {
    // Rotas protegidas pelo guard de autenticação.
    let api_routes = Router::new()
        .route(
            "/empresas",
            get(handlers::empresas::listar).post(handlers::empresas::criar),
        )
        .route(
            "/empresas/{id}",
            get(handlers::empresas::buscar)
                .put(handlers::empresas::atualizar)
                .delete(handlers::empresas::excluir),
        )
        .route("/empresas/{id}/historico", get(handlers::empresas::historico))
        .route(
            "/empresas/{id}/atividades",
            get(handlers::atividades::listar_por_empresa).post(handlers::atividades::criar),
        )
        .route(
            "/atividades/{id}",
            put(handlers::atividades::atualizar).delete(handlers::atividades::excluir),
        )
        .route(
            "/processos",
            get(handlers::processos::listar).post(handlers::processos::criar),
        )
        .route(
            "/processos/{id}",
            get(handlers::processos::buscar)
                .put(handlers::processos::atualizar)
                .delete(handlers::processos::excluir),
        )
        .route("/processos/{id}/historico", get(handlers::processos::historico))
        .route(
            "/processos/{id}/observacoes",
            get(handlers::observacoes::listar_por_processo).post(handlers::observacoes::criar),
        )
        .route(
            "/observacoes/{id}",
            put(handlers::observacoes::atualizar).delete(handlers::observacoes::excluir),
        )
        .route("/responsaveis", get(handlers::catalogos::listar_responsaveis))
        .route("/status-processo", get(handlers::catalogos::listar_status))
        .route("/tipos-processo", get(handlers::catalogos::listar_tipos_processo))
        .route("/tipos-alteracao", get(handlers::catalogos::listar_tipos_alteracao))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/consulta-cnpj", get(handlers::consulta::consultar))
        .route("/api/docs/openapi.json", get(docs::openapi_json))
        .nest("/api", api_routes)
        .with_state(app_state)
}

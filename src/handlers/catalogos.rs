// src/handlers/catalogos.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::AppError,
    config::AppState,
    models::catalogo::{Responsavel, StatusProcesso, TipoAlteracao, TipoProcesso},
};

// GET /api/responsaveis
#[utoipa::path(
    get,
    path = "/api/responsaveis",
    tag = "Catálogos",
    responses((status = 200, body = Vec<Responsavel>)),
    security(("api_jwt" = []))
)]
pub async fn listar_responsaveis(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let responsaveis = app_state.catalogo_repo.listar_responsaveis().await?;
    Ok((StatusCode::OK, Json(responsaveis)))
}

// GET /api/status-processo
#[utoipa::path(
    get,
    path = "/api/status-processo",
    tag = "Catálogos",
    responses((status = 200, body = Vec<StatusProcesso>)),
    security(("api_jwt" = []))
)]
pub async fn listar_status(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let status = app_state.catalogo_repo.listar_status().await?;
    Ok((StatusCode::OK, Json(status)))
}

// GET /api/tipos-processo
#[utoipa::path(
    get,
    path = "/api/tipos-processo",
    tag = "Catálogos",
    responses((status = 200, body = Vec<TipoProcesso>)),
    security(("api_jwt" = []))
)]
pub async fn listar_tipos_processo(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let tipos = app_state.catalogo_repo.listar_tipos_processo().await?;
    Ok((StatusCode::OK, Json(tipos)))
}

// GET /api/tipos-alteracao
#[utoipa::path(
    get,
    path = "/api/tipos-alteracao",
    tag = "Catálogos",
    responses((status = 200, body = Vec<TipoAlteracao>)),
    security(("api_jwt" = []))
)]
pub async fn listar_tipos_alteracao(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let tipos = app_state.catalogo_repo.listar_tipos_alteracao().await?;
    Ok((StatusCode::OK, Json(tipos)))
}

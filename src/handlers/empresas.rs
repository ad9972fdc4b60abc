// src/handlers/empresas.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::{
        empresa::{Empresa, SalvarEmpresaPayload},
        historico::Historico,
    },
};

// GET /api/empresas
#[utoipa::path(
    get,
    path = "/api/empresas",
    tag = "Empresas",
    responses(
        (status = 200, description = "Empresas ativas, ordenadas por nome", body = Vec<Empresa>)
    ),
    security(("api_jwt" = []))
)]
pub async fn listar(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let empresas = app_state.empresa_service.listar().await?;
    Ok((StatusCode::OK, Json(empresas)))
}

// GET /api/empresas/{id}
#[utoipa::path(
    get,
    path = "/api/empresas/{id}",
    tag = "Empresas",
    responses(
        (status = 200, description = "Empresa com atividades", body = Empresa),
        (status = 404, description = "Empresa não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn buscar(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let empresa = app_state.empresa_service.buscar(id).await?;
    Ok((StatusCode::OK, Json(empresa)))
}

// POST /api/empresas
#[utoipa::path(
    post,
    path = "/api/empresas",
    tag = "Empresas",
    request_body = SalvarEmpresaPayload,
    responses(
        (status = 201, description = "Empresa criada", body = Empresa),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn criar(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario): AuthenticatedUser,
    Json(payload): Json<SalvarEmpresaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let empresa = app_state
        .empresa_service
        .criar(&payload, &usuario.email)
        .await?;

    Ok((StatusCode::CREATED, Json(empresa)))
}

// PUT /api/empresas/{id}
#[utoipa::path(
    put,
    path = "/api/empresas/{id}",
    tag = "Empresas",
    request_body = SalvarEmpresaPayload,
    responses(
        (status = 200, description = "Empresa atualizada", body = Empresa),
        (status = 404, description = "Empresa não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn atualizar(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario): AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<SalvarEmpresaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let empresa = app_state
        .empresa_service
        .atualizar(id, &payload, &usuario.email)
        .await?;

    Ok((StatusCode::OK, Json(empresa)))
}

// DELETE /api/empresas/{id} (soft delete)
#[utoipa::path(
    delete,
    path = "/api/empresas/{id}",
    tag = "Empresas",
    responses(
        (status = 204, description = "Empresa excluída (soft delete)"),
        (status = 404, description = "Empresa não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn excluir(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario): AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .empresa_service
        .excluir(id, &usuario.email)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// GET /api/empresas/{id}/historico
#[utoipa::path(
    get,
    path = "/api/empresas/{id}/historico",
    tag = "Empresas",
    responses(
        (status = 200, description = "Histórico da empresa, mais recente primeiro", body = Vec<Historico>)
    ),
    security(("api_jwt" = []))
)]
pub async fn historico(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let entradas = app_state.historico_service.listar_por_empresa(id).await?;
    Ok((StatusCode::OK, Json(entradas)))
}

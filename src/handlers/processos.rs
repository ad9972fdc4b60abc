// src/handlers/processos.rs

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
        historico::Historico,
        processo::{Processo, SalvarProcessoPayload},
    },
};

// GET /api/processos
#[utoipa::path(
    get,
    path = "/api/processos",
    tag = "Processos",
    responses(
        (status = 200, description = "Processos ativos, mais recentes primeiro", body = Vec<Processo>)
    ),
    security(("api_jwt" = []))
)]
pub async fn listar(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let processos = app_state.processo_service.listar().await?;
    Ok((StatusCode::OK, Json(processos)))
}

// GET /api/processos/{id}
#[utoipa::path(
    get,
    path = "/api/processos/{id}",
    tag = "Processos",
    responses(
        (status = 200, description = "Processo com empresa, atividades e observações", body = Processo),
        (status = 404, description = "Processo não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn buscar(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let processo = app_state.processo_service.buscar_detalhado(id).await?;
    Ok((StatusCode::OK, Json(processo)))
}

// POST /api/processos
#[utoipa::path(
    post,
    path = "/api/processos",
    tag = "Processos",
    request_body = SalvarProcessoPayload,
    responses(
        (status = 201, description = "Processo criado (e a empresa, se o payload não trouxe empresa_id)", body = Processo),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn criar(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario): AuthenticatedUser,
    Json(payload): Json<SalvarProcessoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let processo = app_state
        .processo_service
        .criar(&payload, &usuario.email)
        .await?;

    Ok((StatusCode::CREATED, Json(processo)))
}

// PUT /api/processos/{id}
#[utoipa::path(
    put,
    path = "/api/processos/{id}",
    tag = "Processos",
    request_body = SalvarProcessoPayload,
    responses(
        (status = 200, description = "Processo atualizado e vínculos reconciliados", body = Processo),
        (status = 404, description = "Processo não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn atualizar(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario): AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<SalvarProcessoPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let processo = app_state
        .processo_service
        .atualizar(id, &payload, &usuario.email)
        .await?;

    Ok((StatusCode::OK, Json(processo)))
}

// DELETE /api/processos/{id} (soft delete)
#[utoipa::path(
    delete,
    path = "/api/processos/{id}",
    tag = "Processos",
    responses(
        (status = 204, description = "Processo excluído (soft delete)"),
        (status = 404, description = "Processo não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn excluir(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario): AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .processo_service
        .excluir(id, &usuario.email)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// GET /api/processos/{id}/historico
#[utoipa::path(
    get,
    path = "/api/processos/{id}/historico",
    tag = "Processos",
    responses(
        (status = 200, description = "Histórico do processo, mais recente primeiro", body = Vec<Historico>)
    ),
    security(("api_jwt" = []))
)]
pub async fn historico(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let entradas = app_state.historico_service.listar_por_processo(id).await?;
    Ok((StatusCode::OK, Json(entradas)))
}

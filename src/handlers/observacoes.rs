// src/handlers/observacoes.rs

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
    models::{observacao::Observacao, processo::NovaObservacao},
};

// GET /api/processos/{id}/observacoes
#[utoipa::path(
    get,
    path = "/api/processos/{id}/observacoes",
    tag = "Observações",
    responses(
        (status = 200, description = "Observações do processo, mais recentes primeiro", body = Vec<Observacao>)
    ),
    security(("api_jwt" = []))
)]
pub async fn listar_por_processo(
    State(app_state): State<AppState>,
    Path(processo_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let observacoes = app_state
        .processo_service
        .listar_observacoes(processo_id)
        .await?;

    Ok((StatusCode::OK, Json(observacoes)))
}

// POST /api/processos/{id}/observacoes
#[utoipa::path(
    post,
    path = "/api/processos/{id}/observacoes",
    tag = "Observações",
    request_body = NovaObservacao,
    responses(
        (status = 201, description = "Observação criada", body = Observacao),
        (status = 404, description = "Processo não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn criar(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario): AuthenticatedUser,
    Path(processo_id): Path<i64>,
    Json(payload): Json<NovaObservacao>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let observacao = app_state
        .processo_service
        .criar_observacao(processo_id, &payload.texto, &usuario.email)
        .await?;

    Ok((StatusCode::CREATED, Json(observacao)))
}

// PUT /api/observacoes/{id} — edição só troca o texto
#[utoipa::path(
    put,
    path = "/api/observacoes/{id}",
    tag = "Observações",
    request_body = NovaObservacao,
    responses(
        (status = 204, description = "Texto da observação atualizado"),
        (status = 404, description = "Observação não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn atualizar(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<NovaObservacao>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    app_state
        .processo_service
        .atualizar_observacao(id, &payload.texto)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// DELETE /api/observacoes/{id}
#[utoipa::path(
    delete,
    path = "/api/observacoes/{id}",
    tag = "Observações",
    responses(
        (status = 204, description = "Observação excluída"),
        (status = 404, description = "Observação não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn excluir(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.processo_service.excluir_observacao(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

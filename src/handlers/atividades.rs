// src/handlers/atividades.rs

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
    models::empresa::{Atividade, NovaAtividade},
};

// GET /api/empresas/{id}/atividades
#[utoipa::path(
    get,
    path = "/api/empresas/{id}/atividades",
    tag = "Atividades",
    responses(
        (status = 200, description = "Atividades da empresa, principal primeiro", body = Vec<Atividade>)
    ),
    security(("api_jwt" = []))
)]
pub async fn listar_por_empresa(
    State(app_state): State<AppState>,
    Path(empresa_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let atividades = app_state
        .empresa_service
        .listar_atividades(empresa_id)
        .await?;

    Ok((StatusCode::OK, Json(atividades)))
}

// POST /api/empresas/{id}/atividades
#[utoipa::path(
    post,
    path = "/api/empresas/{id}/atividades",
    tag = "Atividades",
    request_body = NovaAtividade,
    responses(
        (status = 201, description = "Atividade criada", body = Atividade)
    ),
    security(("api_jwt" = []))
)]
pub async fn criar(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario): AuthenticatedUser,
    Path(empresa_id): Path<i64>,
    Json(payload): Json<NovaAtividade>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let atividade = app_state
        .empresa_service
        .criar_atividade(empresa_id, &payload, &usuario.email)
        .await?;

    Ok((StatusCode::CREATED, Json(atividade)))
}

// PUT /api/atividades/{id}
#[utoipa::path(
    put,
    path = "/api/atividades/{id}",
    tag = "Atividades",
    request_body = NovaAtividade,
    responses(
        (status = 200, description = "Atividade atualizada", body = Atividade),
        (status = 404, description = "Atividade não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn atualizar(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<NovaAtividade>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let atividade = app_state
        .empresa_service
        .atualizar_atividade(id, &payload)
        .await?;

    Ok((StatusCode::OK, Json(atividade)))
}

// DELETE /api/atividades/{id} (hard delete)
#[utoipa::path(
    delete,
    path = "/api/atividades/{id}",
    tag = "Atividades",
    responses(
        (status = 204, description = "Atividade excluída"),
        (status = 404, description = "Atividade não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn excluir(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.empresa_service.excluir_atividade(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

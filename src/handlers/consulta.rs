// src/handlers/consulta.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

use crate::{common::error::AppError, config::AppState, models::consulta::ConsultaReceitaWS};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ConsultaCnpjParams {
    pub cnpj: Option<String>,
    /// Idade máxima, em dias, aceita para uma resposta em cache.
    pub days: Option<u64>,
}

// GET /api/consulta-cnpj?cnpj=...&days=...
#[utoipa::path(
    get,
    path = "/api/consulta-cnpj",
    tag = "Consulta CNPJ",
    params(ConsultaCnpjParams),
    responses(
        (status = 200, description = "Cadastro do CNPJ na ReceitaWS", body = ConsultaReceitaWS),
        (status = 400, description = "CNPJ não informado"),
        (status = 500, description = "Erro ao consultar a ReceitaWS")
    )
)]
pub async fn consultar(
    State(app_state): State<AppState>,
    Query(params): Query<ConsultaCnpjParams>,
) -> Result<impl IntoResponse, AppError> {
    let Some(cnpj) = params.cnpj.filter(|c| !c.is_empty()) else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "CNPJ não informado" })),
        )
            .into_response());
    };

    let consulta = app_state
        .consulta_cnpj
        .consultar(&cnpj, params.days.unwrap_or(0))
        .await?;

    Ok((StatusCode::OK, Json(consulta)).into_response())
}

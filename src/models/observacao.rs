// src/models/observacao.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Observação anexada a um processo. Só é acrescentada ou tem o texto
/// editado; nunca é removida pelo fluxo normal do formulário.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Observacao {
    pub id: i64,
    pub processo_id: i64,
    pub status_id: Option<i64>,
    pub texto: String,
    pub criado_por: Option<String>,
    pub criado_em: DateTime<Utc>,
}

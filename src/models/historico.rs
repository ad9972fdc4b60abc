// src/models/historico.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Entrada da trilha de auditoria. Gravada uma única vez, nunca alterada.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Historico {
    pub id: i64,
    pub processo_id: Option<i64>,
    pub empresa_id: Option<i64>,
    pub campo_alterado: String,
    pub valor_anterior: Option<String>,
    pub valor_novo: Option<String>,
    pub alterado_por: Option<String>,
    pub data_alteracao: DateTime<Utc>,
}

/// Dados de uma entrada a registrar. Os snapshots `valor_anterior` e
/// `valor_novo` chegam já serializados pelo chamador (JSON da entidade);
/// o registrador não os interpreta.
#[derive(Debug, Clone)]
pub struct NovoHistorico {
    pub processo_id: Option<i64>,
    pub empresa_id: Option<i64>,
    pub campo_alterado: String,
    pub valor_anterior: Option<String>,
    pub valor_novo: Option<String>,
}

impl NovoHistorico {
    pub fn de_processo(processo_id: i64, campo: &str) -> Self {
        Self {
            processo_id: Some(processo_id),
            empresa_id: None,
            campo_alterado: campo.to_string(),
            valor_anterior: None,
            valor_novo: None,
        }
    }

    pub fn de_empresa(empresa_id: i64, campo: &str) -> Self {
        Self {
            processo_id: None,
            empresa_id: Some(empresa_id),
            campo_alterado: campo.to_string(),
            valor_anterior: None,
            valor_novo: None,
        }
    }

    pub fn com_valores(mut self, anterior: Option<String>, novo: Option<String>) -> Self {
        self.valor_anterior = anterior;
        self.valor_novo = novo;
        self
    }
}

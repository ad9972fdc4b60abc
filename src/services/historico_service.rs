// src/services/historico_service.rs

use crate::{
    common::error::AppError,
    db::HistoricoRepo,
    models::historico::{Historico, NovoHistorico},
};

#[derive(Clone)]
pub struct HistoricoService {
    repo: HistoricoRepo,
}

impl HistoricoService {
    pub fn new(repo: HistoricoRepo) -> Self {
        Self { repo }
    }

    /// Registra uma entrada na trilha de auditoria.
    ///
    /// O histórico é melhor-esforço: uma falha aqui é logada e engolida,
    /// nunca bloqueia nem desfaz a operação principal que está sendo
    /// documentada.
    pub async fn registrar(&self, entrada: NovoHistorico, alterado_por: &str) {
        if let Err(err) = self.repo.inserir(&entrada, alterado_por).await {
            tracing::error!(
                campo = %entrada.campo_alterado,
                processo_id = ?entrada.processo_id,
                empresa_id = ?entrada.empresa_id,
                "Erro ao registrar histórico: {err}"
            );
        }
    }

    pub async fn listar_por_processo(&self, processo_id: i64) -> Result<Vec<Historico>, AppError> {
        self.repo.listar_por_processo(processo_id).await
    }

    pub async fn listar_por_empresa(&self, empresa_id: i64) -> Result<Vec<Historico>, AppError> {
        self.repo.listar_por_empresa(empresa_id).await
    }
}

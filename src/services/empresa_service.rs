// src/services/empresa_service.rs

use crate::{
    common::{error::AppError, formatters},
    db::{AtividadeRepo, EmpresaRepo},
    models::{
        empresa::{Atividade, Empresa, NovaAtividade, SalvarEmpresaPayload},
        historico::NovoHistorico,
    },
    services::historico_service::HistoricoService,
};

#[derive(Clone)]
pub struct EmpresaService {
    empresa_repo: EmpresaRepo,
    atividade_repo: AtividadeRepo,
    historico: HistoricoService,
}

impl EmpresaService {
    pub fn new(
        empresa_repo: EmpresaRepo,
        atividade_repo: AtividadeRepo,
        historico: HistoricoService,
    ) -> Self {
        Self {
            empresa_repo,
            atividade_repo,
            historico,
        }
    }

    /// Empresas ativas, ordenadas por nome, com o CNPJ pontuado para exibição.
    pub async fn listar(&self) -> Result<Vec<Empresa>, AppError> {
        let mut empresas = self.empresa_repo.listar().await?;
        for empresa in &mut empresas {
            empresa.cnpj = formatters::format_cnpj(&empresa.cnpj);
        }
        Ok(empresas)
    }

    /// Empresa com as atividades, CNPJ pontuado.
    pub async fn buscar(&self, id: i64) -> Result<Empresa, AppError> {
        let mut empresa = self
            .empresa_repo
            .buscar(id)
            .await?
            .ok_or(AppError::NaoEncontrado)?;

        empresa.cnpj = formatters::format_cnpj(&empresa.cnpj);
        empresa.atividades = Some(self.atividade_repo.listar_por_empresa(id).await?);
        Ok(empresa)
    }

    /// Cria a empresa com as atividades do payload e registra "Criação"
    /// no histórico.
    pub async fn criar(
        &self,
        dados: &SalvarEmpresaPayload,
        alterado_por: &str,
    ) -> Result<Empresa, AppError> {
        let cnpj_limpo = formatters::limpar_cnpj(&dados.cnpj);
        let mut empresa = self.empresa_repo.criar(dados, &cnpj_limpo).await?;

        let mut atividades = Vec::with_capacity(dados.atividades.len());
        for atividade in &dados.atividades {
            atividades.push(self.atividade_repo.criar(empresa.id, atividade).await?);
        }
        empresa.atividades = Some(atividades);

        self.historico
            .registrar(
                NovoHistorico::de_empresa(empresa.id, "Criação")
                    .com_valores(None, serde_json::to_string(&empresa).ok()),
                alterado_por,
            )
            .await;

        Ok(empresa)
    }

    /// Sobrescreve o registro da empresa e registra "Atualização" com os
    /// snapshots antes/depois.
    pub async fn atualizar(
        &self,
        id: i64,
        dados: &SalvarEmpresaPayload,
        alterado_por: &str,
    ) -> Result<Empresa, AppError> {
        let anterior = self
            .empresa_repo
            .buscar(id)
            .await?
            .ok_or(AppError::NaoEncontrado)?;

        let empresa = self.empresa_repo.atualizar(id, dados).await?;

        self.historico
            .registrar(
                NovoHistorico::de_empresa(id, "Atualização").com_valores(
                    serde_json::to_string(&anterior).ok(),
                    serde_json::to_string(&empresa).ok(),
                ),
                alterado_por,
            )
            .await;

        Ok(empresa)
    }

    /// Soft delete com registro de "Exclusão". O histórico da empresa
    /// continua consultável depois.
    pub async fn excluir(&self, id: i64, alterado_por: &str) -> Result<(), AppError> {
        let anterior = self
            .empresa_repo
            .buscar(id)
            .await?
            .ok_or(AppError::NaoEncontrado)?;

        self.empresa_repo.soft_delete(id).await?;

        self.historico
            .registrar(
                NovoHistorico::de_empresa(id, "Exclusão")
                    .com_valores(serde_json::to_string(&anterior).ok(), None),
                alterado_por,
            )
            .await;

        Ok(())
    }

    // --- Atividades ---

    pub async fn listar_atividades(&self, empresa_id: i64) -> Result<Vec<Atividade>, AppError> {
        self.atividade_repo.listar_por_empresa(empresa_id).await
    }

    pub async fn criar_atividade(
        &self,
        empresa_id: i64,
        dados: &NovaAtividade,
        alterado_por: &str,
    ) -> Result<Atividade, AppError> {
        let atividade = self.atividade_repo.criar(empresa_id, dados).await?;

        self.historico
            .registrar(
                NovoHistorico::de_empresa(empresa_id, "Nova Atividade")
                    .com_valores(None, serde_json::to_string(&atividade).ok()),
                alterado_por,
            )
            .await;

        Ok(atividade)
    }

    pub async fn atualizar_atividade(
        &self,
        id: i64,
        dados: &NovaAtividade,
    ) -> Result<Atividade, AppError> {
        self.atividade_repo.atualizar(id, dados).await
    }

    pub async fn excluir_atividade(&self, id: i64) -> Result<(), AppError> {
        self.atividade_repo.excluir(id).await
    }
}

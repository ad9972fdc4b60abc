// src/services/processo_service.rs

use crate::{
    common::error::AppError,
    db::{CatalogoRepo, ObservacaoRepo, ProcessoRepo},
    models::{
        historico::NovoHistorico,
        observacao::Observacao,
        processo::{Processo, ProcessoRegistro, SalvarProcessoPayload, TipoAlteracaoSelecionado},
    },
    services::{empresa_service::EmpresaService, historico_service::HistoricoService, sincronizacao},
};

/// Nome do tipo de processo cujos vínculos de tipos de alteração fazem
/// sentido. Para qualquer outro tipo o conjunto é mantido vazio.
const TIPO_PROCESSO_ALTERACAO: &str = "Alteração";

#[derive(Clone)]
pub struct ProcessoService {
    processo_repo: ProcessoRepo,
    observacao_repo: ObservacaoRepo,
    catalogo_repo: CatalogoRepo,
    empresa_service: EmpresaService,
    historico: HistoricoService,
}

impl ProcessoService {
    pub fn new(
        processo_repo: ProcessoRepo,
        observacao_repo: ObservacaoRepo,
        catalogo_repo: CatalogoRepo,
        empresa_service: EmpresaService,
        historico: HistoricoService,
    ) -> Self {
        Self {
            processo_repo,
            observacao_repo,
            catalogo_repo,
            empresa_service,
            historico,
        }
    }

    /// Listagem do painel: processos mais recentes primeiro, com os
    /// catálogos aninhados e os tipos de alteração achatados. A empresa
    /// completa e as observações ficam para o detalhe.
    pub async fn listar(&self) -> Result<Vec<Processo>, AppError> {
        let linhas = self.processo_repo.listar().await?;

        let mut processos = Vec::with_capacity(linhas.len());
        for linha in linhas {
            let tipos = self
                .processo_repo
                .tipos_alteracao_vinculados(linha.id)
                .await?;
            processos.push(Processo::from_row(linha, tipos));
        }

        Ok(processos)
    }

    /// Detalhe completo: listagem + empresa (com atividades) + observações.
    pub async fn buscar_detalhado(&self, id: i64) -> Result<Processo, AppError> {
        let linha = self
            .processo_repo
            .buscar(id)
            .await?
            .ok_or(AppError::NaoEncontrado)?;

        let tipos = self.processo_repo.tipos_alteracao_vinculados(id).await?;
        let mut processo = Processo::from_row(linha, tipos);

        processo.empresa = Some(self.empresa_service.buscar(processo.empresa_id).await?);
        processo.observacoes = self.observacao_repo.listar_por_processo(id).await?;

        Ok(processo)
    }

    /// Cria o processo. Quando o payload não traz `empresa_id`, a empresa
    /// é criada antes (fluxo de constituição) — cada criação gera a sua
    /// própria entrada de histórico.
    pub async fn criar(
        &self,
        dados: &SalvarProcessoPayload,
        alterado_por: &str,
    ) -> Result<Processo, AppError> {
        let empresa_id = match dados.empresa_id {
            Some(id) => id,
            None => {
                let empresa_dados = dados.empresa.as_ref().ok_or(AppError::IdObrigatorio)?;
                self.empresa_service
                    .criar(empresa_dados, alterado_por)
                    .await?
                    .id
            }
        };

        let registro = self
            .processo_repo
            .criar(
                empresa_id,
                dados.responsavel_id,
                dados.tipo_processo_id,
                dados.status_id,
                dados.data_envio_junta,
                dados.data_conclusao,
            )
            .await?;

        let desejados = self
            .tipos_desejados(dados.tipo_processo_id, &dados.tipos_alteracao)
            .await?;
        self.sincronizar_tipos_alteracao(registro.id, &desejados)
            .await?;

        self.inserir_observacoes(&registro, &dados.observacoes, alterado_por)
            .await?;

        self.historico
            .registrar(
                NovoHistorico::de_processo(registro.id, "Criação")
                    .com_valores(None, serde_json::to_string(&registro).ok()),
                alterado_por,
            )
            .await;

        self.buscar_detalhado(registro.id).await
    }

    /// Sobrescreve o processo, reconcilia os tipos de alteração, insere
    /// as observações novas e registra "Atualização".
    pub async fn atualizar(
        &self,
        id: i64,
        dados: &SalvarProcessoPayload,
        alterado_por: &str,
    ) -> Result<Processo, AppError> {
        let anterior = self
            .processo_repo
            .buscar_registro(id)
            .await?
            .ok_or(AppError::NaoEncontrado)?;

        let empresa_id = dados.empresa_id.unwrap_or(anterior.empresa_id);
        let registro = self
            .processo_repo
            .atualizar(
                id,
                empresa_id,
                dados.responsavel_id,
                dados.tipo_processo_id,
                dados.status_id,
                dados.data_envio_junta,
                dados.data_conclusao,
            )
            .await?;

        let desejados = self
            .tipos_desejados(dados.tipo_processo_id, &dados.tipos_alteracao)
            .await?;
        self.sincronizar_tipos_alteracao(id, &desejados).await?;

        self.inserir_observacoes(&registro, &dados.observacoes, alterado_por)
            .await?;

        self.historico
            .registrar(
                NovoHistorico::de_processo(id, "Atualização").com_valores(
                    serde_json::to_string(&anterior).ok(),
                    serde_json::to_string(&registro).ok(),
                ),
                alterado_por,
            )
            .await;

        self.buscar_detalhado(id).await
    }

    /// Soft delete com registro de "Exclusão".
    pub async fn excluir(&self, id: i64, alterado_por: &str) -> Result<(), AppError> {
        let anterior = self
            .processo_repo
            .buscar_registro(id)
            .await?
            .ok_or(AppError::NaoEncontrado)?;

        self.processo_repo.soft_delete(id).await?;

        self.historico
            .registrar(
                NovoHistorico::de_processo(id, "Exclusão")
                    .com_valores(serde_json::to_string(&anterior).ok(), None),
                alterado_por,
            )
            .await;

        Ok(())
    }

    /// Reconcilia os vínculos de tipos de alteração do processo com a
    /// lista desejada.
    ///
    /// O snapshot atual é relido do banco aqui, nunca aceito do chamador:
    /// o estado do formulário pode estar defasado. As exclusões e as
    /// inserções são dois passos sequenciais sem transação — uma falha
    /// entre eles deixa o processo com menos vínculos do que o desejado
    /// e o erro sobe para o chamador.
    pub async fn sincronizar_tipos_alteracao(
        &self,
        processo_id: i64,
        desejados: &[TipoAlteracaoSelecionado],
    ) -> Result<(), AppError> {
        let atuais = self.processo_repo.vinculos(processo_id).await?;
        let plano = sincronizacao::planejar(&atuais, desejados);

        if plano.vazio() {
            tracing::debug!(processo_id, "Nenhum vínculo de tipo de alteração para ajustar");
            return Ok(());
        }

        if !plano.remover.is_empty() {
            let excluidos = self.processo_repo.remover_vinculos(&plano.remover).await?;
            tracing::debug!(processo_id, excluidos, "Vínculos de tipos de alteração removidos");
        }

        if !plano.inserir.is_empty() {
            let inseridos = self
                .processo_repo
                .inserir_vinculos(processo_id, &plano.inserir)
                .await?;
            tracing::debug!(processo_id, inseridos, "Vínculos de tipos de alteração inseridos");
        }

        Ok(())
    }

    // --- Observações ---

    pub async fn listar_observacoes(&self, processo_id: i64) -> Result<Vec<Observacao>, AppError> {
        self.observacao_repo.listar_por_processo(processo_id).await
    }

    pub async fn criar_observacao(
        &self,
        processo_id: i64,
        texto: &str,
        alterado_por: &str,
    ) -> Result<Observacao, AppError> {
        let registro = self
            .processo_repo
            .buscar_registro(processo_id)
            .await?
            .ok_or(AppError::NaoEncontrado)?;

        self.observacao_repo
            .criar(processo_id, texto, Some(registro.status_id), alterado_por)
            .await
    }

    pub async fn atualizar_observacao(&self, id: i64, texto: &str) -> Result<(), AppError> {
        self.observacao_repo.atualizar_texto(id, texto).await
    }

    pub async fn excluir_observacao(&self, id: i64) -> Result<(), AppError> {
        self.observacao_repo.excluir(id).await
    }

    // --- Internos ---

    /// Vínculos só valem para processos de alteração contratual; para os
    /// demais tipos a lista desejada é forçada a vazio (o que remove
    /// qualquer vínculo que tenha sobrado de um tipo anterior).
    async fn tipos_desejados(
        &self,
        tipo_processo_id: i64,
        informados: &[TipoAlteracaoSelecionado],
    ) -> Result<Vec<TipoAlteracaoSelecionado>, AppError> {
        let tipo = self
            .catalogo_repo
            .buscar_tipo_processo(tipo_processo_id)
            .await?
            .ok_or(AppError::NaoEncontrado)?;

        if tipo.nome == TIPO_PROCESSO_ALTERACAO {
            Ok(informados.to_vec())
        } else {
            Ok(Vec::new())
        }
    }

    /// Insere as observações novas em paralelo, mas observa cada uma:
    /// as tasks são coletadas e aguardadas antes de o salvamento
    /// reportar sucesso — nenhuma escrita fica solta sem dono.
    async fn inserir_observacoes(
        &self,
        registro: &ProcessoRegistro,
        novas: &[crate::models::processo::NovaObservacao],
        alterado_por: &str,
    ) -> Result<(), AppError> {
        if novas.is_empty() {
            return Ok(());
        }

        let mut tasks = Vec::with_capacity(novas.len());
        for nova in novas {
            let repo = self.observacao_repo.clone();
            let processo_id = registro.id;
            let status_id = registro.status_id;
            let texto = nova.texto.clone();
            let autor = alterado_por.to_string();
            tasks.push(tokio::spawn(async move {
                repo.criar(processo_id, &texto, Some(status_id), &autor).await
            }));
        }

        for task in tasks {
            task.await
                .map_err(|e| anyhow::anyhow!("Task de observação abortada: {e}"))??;
        }

        Ok(())
    }
}

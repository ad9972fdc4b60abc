// src/models/processo.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{
    catalogo::{Responsavel, StatusProcesso, TipoAlteracaoVinculado, TipoProcesso},
    empresa::{Empresa, SalvarEmpresaPayload},
    observacao::Observacao,
};

/// Linha crua do SELECT de processos com os joins de responsável,
/// tipo e status. É achatada em [`Processo`] antes de sair da API.
#[derive(Debug, Clone, FromRow)]
pub struct ProcessoRow {
    pub id: i64,
    pub empresa_id: i64,
    pub responsavel_id: Option<i64>,
    pub responsavel_nome: Option<String>,
    pub tipo_processo_id: i64,
    pub tipo_processo_nome: String,
    pub status_id: i64,
    pub status_nome: String,
    pub data_inicio: NaiveDate,
    pub data_envio_junta: Option<NaiveDate>,
    pub data_conclusao: Option<NaiveDate>,
}

/// Processo como a API devolve: catálogos aninhados e tipos de alteração
/// já achatados (catálogo + id da linha pivot).
///
/// Na listagem `empresa` vem vazia e `observacoes` também — o detalhe
/// completo é composto num segundo passo, por processo.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Processo {
    pub id: i64,
    pub empresa_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empresa: Option<Empresa>,
    pub responsavel: Option<Responsavel>,
    pub tipo_processo: TipoProcesso,
    pub status: StatusProcesso,
    pub tipos_alteracao: Vec<TipoAlteracaoVinculado>,
    pub observacoes: Vec<Observacao>,
    pub data_inicio: NaiveDate,
    pub data_envio_junta: Option<NaiveDate>,
    pub data_conclusao: Option<NaiveDate>,
}

impl Processo {
    pub fn from_row(row: ProcessoRow, tipos_alteracao: Vec<TipoAlteracaoVinculado>) -> Self {
        Self {
            id: row.id,
            empresa_id: row.empresa_id,
            empresa: None,
            responsavel: row.responsavel_id.map(|id| Responsavel {
                id,
                nome: row.responsavel_nome.unwrap_or_default(),
                email: None,
            }),
            tipo_processo: TipoProcesso {
                id: row.tipo_processo_id,
                nome: row.tipo_processo_nome,
            },
            status: StatusProcesso {
                id: row.status_id,
                nome: row.status_nome,
            },
            tipos_alteracao,
            observacoes: Vec::new(),
            data_inicio: row.data_inicio,
            data_envio_junta: row.data_envio_junta,
            data_conclusao: row.data_conclusao,
        }
    }
}

/// Registro cru da tabela `processos`, sem joins. É o formato usado nos
/// snapshots da trilha de auditoria.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ProcessoRegistro {
    pub id: i64,
    pub empresa_id: i64,
    pub responsavel_id: Option<i64>,
    pub tipo_processo_id: i64,
    pub status_id: i64,
    pub data_inicio: NaiveDate,
    pub data_envio_junta: Option<NaiveDate>,
    pub data_conclusao: Option<NaiveDate>,
}

/// Linha da pivot `processos_tipos_alteracao` como o sincronizador a vê:
/// o id da própria linha e o id de catálogo que ela referencia.
#[derive(Debug, Clone, FromRow)]
pub struct VinculoTipoAlteracao {
    pub id_tabela: i64,
    pub tipo_alteracao_id: i64,
}

// --- Payloads ---

/// Tipo de alteração como o formulário envia: o `id` é sempre o id de
/// catálogo; `id_tabela` só vem preenchido quando o item já estava
/// vinculado ao processo (linha pivot existente).
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TipoAlteracaoSelecionado {
    pub id: i64,
    pub id_tabela: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NovaObservacao {
    #[validate(length(min = 1, message = "O texto da observação é obrigatório."))]
    pub texto: String,
}

/// Payload de criação/atualização de processo.
///
/// Quando `empresa.id` está ausente na criação, a empresa é criada antes
/// do processo (fluxo de constituição: o formulário pré-preenchido pela
/// consulta de CNPJ chega inteiro de uma vez).
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SalvarProcessoPayload {
    pub empresa_id: Option<i64>,
    /// Dados da empresa a criar quando `empresa_id` está ausente.
    #[validate(nested)]
    pub empresa: Option<SalvarEmpresaPayload>,
    pub responsavel_id: Option<i64>,
    pub tipo_processo_id: i64,
    pub status_id: i64,
    #[serde(default)]
    pub tipos_alteracao: Vec<TipoAlteracaoSelecionado>,
    /// Observações novas (sem id) digitadas no formulário.
    #[serde(default)]
    pub observacoes: Vec<NovaObservacao>,
    pub data_envio_junta: Option<NaiveDate>,
    pub data_conclusao: Option<NaiveDate>,
}

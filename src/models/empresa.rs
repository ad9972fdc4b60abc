// src/models/empresa.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

// Mapeia o CREATE TYPE tipo_atividade do banco
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "tipo_atividade", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TipoAtividade {
    Principal,
    Secundaria,
}

/// Atividade econômica (CNAE) de uma empresa.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Atividade {
    pub id: i64,
    pub empresa_id: i64,
    pub tipo: TipoAtividade,
    pub cnae_codigo: String,
    pub descricao: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Empresa {
    pub id: i64,
    pub nome: String,
    pub cnpj: String,
    pub situacao: Option<String>,
    pub porte: Option<String>,
    pub natureza_juridica: Option<String>,
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub complemento: Option<String>,
    pub municipio: Option<String>,
    pub bairro: Option<String>,
    pub uf: Option<String>,
    pub cep: Option<String>,
    pub simples_optante: bool,
    // As datas do Simples/SIMEI chegam da ReceitaWS em formato livre.
    pub simples_data_opcao: Option<String>,
    pub simples_data_exclusao: Option<String>,
    pub simei_optante: bool,
    pub simei_data_opcao: Option<String>,
    pub simei_data_exclusao: Option<String>,
    // Preenchido num segundo passo, fora do SELECT da empresa.
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atividades: Option<Vec<Atividade>>,
}

// --- Payloads dos formulários ---

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NovaAtividade {
    pub tipo: TipoAtividade,
    #[validate(length(min = 1, message = "O código CNAE é obrigatório."))]
    pub cnae_codigo: String,
    pub descricao: String,
}

/// Payload de criação/atualização de empresa. O formulário manda sempre o
/// registro completo (não é um PATCH).
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct SalvarEmpresaPayload {
    #[validate(length(min = 1, message = "O nome da empresa é obrigatório."))]
    pub nome: String,
    #[validate(length(min = 1, message = "O CNPJ é obrigatório."))]
    pub cnpj: String,
    pub situacao: Option<String>,
    pub porte: Option<String>,
    pub natureza_juridica: Option<String>,
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub complemento: Option<String>,
    pub municipio: Option<String>,
    pub bairro: Option<String>,
    pub uf: Option<String>,
    pub cep: Option<String>,
    #[serde(default)]
    pub simples_optante: bool,
    pub simples_data_opcao: Option<String>,
    pub simples_data_exclusao: Option<String>,
    #[serde(default)]
    pub simei_optante: bool,
    pub simei_data_opcao: Option<String>,
    pub simei_data_exclusao: Option<String>,
    /// Atividades criadas junto com a empresa (só na criação).
    #[serde(default)]
    pub atividades: Vec<NovaAtividade>,
}

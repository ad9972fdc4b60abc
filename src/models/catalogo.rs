// src/models/catalogo.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// Entidades de catálogo: alimentam os selects dos formulários e são
// referenciadas pelos processos. Somente leitura pela API.

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Responsavel {
    pub id: i64,
    pub nome: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct StatusProcesso {
    pub id: i64,
    pub nome: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TipoProcesso {
    pub id: i64,
    pub nome: String,
}

/// Entrada do catálogo de tipos de alteração contratual.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TipoAlteracao {
    pub id: i64,
    pub categoria: String,
    pub descricao: String,
}

/// Tipo de alteração já vinculado a um processo.
///
/// Além dos campos do catálogo carrega o `id_tabela` — o id da própria
/// linha na pivot `processos_tipos_alteracao`. O sincronizador usa o
/// `id_tabela` para apontar exclusões; todo o resto da aplicação só olha
/// para os campos de catálogo.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TipoAlteracaoVinculado {
    pub id: i64,
    pub id_tabela: i64,
    pub categoria: String,
    pub descricao: String,
}

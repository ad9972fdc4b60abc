// src/db/processo_repo.rs

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::{
        catalogo::TipoAlteracaoVinculado,
        processo::{ProcessoRegistro, ProcessoRow, VinculoTipoAlteracao},
    },
};

const COLUNAS_REGISTRO: &str = r#"
    id, empresa_id, responsavel_id, tipo_processo_id, status_id,
    data_inicio, data_envio_junta, data_conclusao
"#;

const SELECT_COM_JOINS: &str = r#"
    SELECT
        p.id, p.empresa_id,
        p.responsavel_id, r.nome AS responsavel_nome,
        p.tipo_processo_id, t.nome AS tipo_processo_nome,
        p.status_id, s.nome AS status_nome,
        p.data_inicio, p.data_envio_junta, p.data_conclusao
    FROM processos p
    LEFT JOIN responsaveis r ON r.id = p.responsavel_id
    JOIN tipos_processo t ON t.id = p.tipo_processo_id
    JOIN status_processo s ON s.id = p.status_id
"#;

#[derive(Clone)]
pub struct ProcessoRepo {
    pool: PgPool,
}

impl ProcessoRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Processos não excluídos, mais recentes primeiro.
    pub async fn listar(&self) -> Result<Vec<ProcessoRow>, AppError> {
        let linhas = sqlx::query_as::<_, ProcessoRow>(&format!(
            "{SELECT_COM_JOINS} WHERE p.deleted_at IS NULL ORDER BY p.id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(linhas)
    }

    pub async fn buscar(&self, id: i64) -> Result<Option<ProcessoRow>, AppError> {
        let linha = sqlx::query_as::<_, ProcessoRow>(&format!(
            "{SELECT_COM_JOINS} WHERE p.id = $1 AND p.deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(linha)
    }

    /// Registro cru, para montar o snapshot do histórico antes de alterar.
    pub async fn buscar_registro(&self, id: i64) -> Result<Option<ProcessoRegistro>, AppError> {
        let registro = sqlx::query_as::<_, ProcessoRegistro>(&format!(
            "SELECT {COLUNAS_REGISTRO} FROM processos WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(registro)
    }

    /// Insere o processo. A `data_inicio` é carimbada pelo banco na
    /// criação (CURRENT_DATE) e não muda mais.
    pub async fn criar(
        &self,
        empresa_id: i64,
        responsavel_id: Option<i64>,
        tipo_processo_id: i64,
        status_id: i64,
        data_envio_junta: Option<NaiveDate>,
        data_conclusao: Option<NaiveDate>,
    ) -> Result<ProcessoRegistro, AppError> {
        let registro = sqlx::query_as::<_, ProcessoRegistro>(&format!(
            r#"
            INSERT INTO processos (
                empresa_id, responsavel_id, tipo_processo_id, status_id,
                data_envio_junta, data_conclusao
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COLUNAS_REGISTRO}
            "#
        ))
        .bind(empresa_id)
        .bind(responsavel_id)
        .bind(tipo_processo_id)
        .bind(status_id)
        .bind(data_envio_junta)
        .bind(data_conclusao)
        .fetch_one(&self.pool)
        .await?;

        Ok(registro)
    }

    /// Sobrescrita completa dos campos do processo (menos `data_inicio`).
    pub async fn atualizar(
        &self,
        id: i64,
        empresa_id: i64,
        responsavel_id: Option<i64>,
        tipo_processo_id: i64,
        status_id: i64,
        data_envio_junta: Option<NaiveDate>,
        data_conclusao: Option<NaiveDate>,
    ) -> Result<ProcessoRegistro, AppError> {
        let registro = sqlx::query_as::<_, ProcessoRegistro>(&format!(
            r#"
            UPDATE processos SET
                empresa_id = $2, responsavel_id = $3, tipo_processo_id = $4,
                status_id = $5, data_envio_junta = $6, data_conclusao = $7,
                updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING {COLUNAS_REGISTRO}
            "#
        ))
        .bind(id)
        .bind(empresa_id)
        .bind(responsavel_id)
        .bind(tipo_processo_id)
        .bind(status_id)
        .bind(data_envio_junta)
        .bind(data_conclusao)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NaoEncontrado)?;

        Ok(registro)
    }

    /// Excluir um processo já excluído dá `NaoEncontrado`: a segunda
    /// exclusão não pode gerar outra entrada de "Exclusão" no histórico.
    pub async fn soft_delete(&self, id: i64) -> Result<(), AppError> {
        let resultado = sqlx::query(
            "UPDATE processos SET deleted_at = NOW(), updated_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        if resultado.rows_affected() == 0 {
            return Err(AppError::NaoEncontrado);
        }
        Ok(())
    }

    // --- Pivot processos_tipos_alteracao ---

    /// Snapshot atual dos vínculos do processo, direto do banco. O
    /// sincronizador sempre parte daqui, nunca do estado do formulário.
    pub async fn vinculos(&self, processo_id: i64) -> Result<Vec<VinculoTipoAlteracao>, AppError> {
        let vinculos = sqlx::query_as::<_, VinculoTipoAlteracao>(
            r#"
            SELECT id AS id_tabela, tipo_alteracao_id
            FROM processos_tipos_alteracao
            WHERE processo_id = $1
            "#,
        )
        .bind(processo_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(vinculos)
    }

    /// Vínculos achatados com os campos de catálogo, para exibição.
    pub async fn tipos_alteracao_vinculados(
        &self,
        processo_id: i64,
    ) -> Result<Vec<TipoAlteracaoVinculado>, AppError> {
        let tipos = sqlx::query_as::<_, TipoAlteracaoVinculado>(
            r#"
            SELECT ta.id, pta.id AS id_tabela, ta.categoria, ta.descricao
            FROM processos_tipos_alteracao pta
            JOIN tipos_alteracao ta ON ta.id = pta.tipo_alteracao_id
            WHERE pta.processo_id = $1
            ORDER BY ta.categoria ASC, ta.descricao ASC
            "#,
        )
        .bind(processo_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tipos)
    }

    /// Exclusão em lote por id da linha pivot.
    pub async fn remover_vinculos(&self, ids_tabela: &[i64]) -> Result<u64, AppError> {
        let resultado = sqlx::query("DELETE FROM processos_tipos_alteracao WHERE id = ANY($1)")
            .bind(ids_tabela)
            .execute(&self.pool)
            .await?;

        Ok(resultado.rows_affected())
    }

    /// Inserção em lote de pares (processo, tipo de alteração).
    pub async fn inserir_vinculos(
        &self,
        processo_id: i64,
        tipo_alteracao_ids: &[i64],
    ) -> Result<u64, AppError> {
        let resultado = sqlx::query(
            r#"
            INSERT INTO processos_tipos_alteracao (processo_id, tipo_alteracao_id)
            SELECT $1, UNNEST($2::BIGINT[])
            "#,
        )
        .bind(processo_id)
        .bind(tipo_alteracao_ids)
        .execute(&self.pool)
        .await?;

        Ok(resultado.rows_affected())
    }
}

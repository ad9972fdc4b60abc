// src/db/observacao_repo.rs

use sqlx::PgPool;

use crate::{common::error::AppError, models::observacao::Observacao};

#[derive(Clone)]
pub struct ObservacaoRepo {
    pool: PgPool,
}

impl ObservacaoRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Observações de um processo, mais recentes primeiro.
    pub async fn listar_por_processo(&self, processo_id: i64) -> Result<Vec<Observacao>, AppError> {
        let observacoes = sqlx::query_as::<_, Observacao>(
            r#"
            SELECT id, processo_id, status_id, texto, criado_por, criado_em
            FROM observacoes_processos
            WHERE processo_id = $1
            ORDER BY criado_em DESC
            "#,
        )
        .bind(processo_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(observacoes)
    }

    pub async fn criar(
        &self,
        processo_id: i64,
        texto: &str,
        status_id: Option<i64>,
        criado_por: &str,
    ) -> Result<Observacao, AppError> {
        let observacao = sqlx::query_as::<_, Observacao>(
            r#"
            INSERT INTO observacoes_processos (processo_id, texto, status_id, criado_por)
            VALUES ($1, $2, $3, $4)
            RETURNING id, processo_id, status_id, texto, criado_por, criado_em
            "#,
        )
        .bind(processo_id)
        .bind(texto)
        .bind(status_id)
        .bind(criado_por)
        .fetch_one(&self.pool)
        .await?;

        Ok(observacao)
    }

    /// Edição só troca o texto; autor e data de criação ficam como estão.
    pub async fn atualizar_texto(&self, id: i64, texto: &str) -> Result<(), AppError> {
        let resultado = sqlx::query("UPDATE observacoes_processos SET texto = $2 WHERE id = $1")
            .bind(id)
            .bind(texto)
            .execute(&self.pool)
            .await?;

        if resultado.rows_affected() == 0 {
            return Err(AppError::NaoEncontrado);
        }
        Ok(())
    }

    pub async fn excluir(&self, id: i64) -> Result<(), AppError> {
        let resultado = sqlx::query("DELETE FROM observacoes_processos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if resultado.rows_affected() == 0 {
            return Err(AppError::NaoEncontrado);
        }
        Ok(())
    }
}

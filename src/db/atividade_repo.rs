// src/db/atividade_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::empresa::{Atividade, NovaAtividade},
};

#[derive(Clone)]
pub struct AtividadeRepo {
    pool: PgPool,
}

impl AtividadeRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Atividades de uma empresa, principal primeiro.
    pub async fn listar_por_empresa(&self, empresa_id: i64) -> Result<Vec<Atividade>, AppError> {
        let atividades = sqlx::query_as::<_, Atividade>(
            r#"
            SELECT id, empresa_id, tipo, cnae_codigo, descricao
            FROM atividades
            WHERE empresa_id = $1
            ORDER BY tipo ASC
            "#,
        )
        .bind(empresa_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(atividades)
    }

    pub async fn criar(&self, empresa_id: i64, dados: &NovaAtividade) -> Result<Atividade, AppError> {
        let atividade = sqlx::query_as::<_, Atividade>(
            r#"
            INSERT INTO atividades (empresa_id, tipo, cnae_codigo, descricao)
            VALUES ($1, $2, $3, $4)
            RETURNING id, empresa_id, tipo, cnae_codigo, descricao
            "#,
        )
        .bind(empresa_id)
        .bind(dados.tipo)
        .bind(&dados.cnae_codigo)
        .bind(&dados.descricao)
        .fetch_one(&self.pool)
        .await?;

        Ok(atividade)
    }

    pub async fn atualizar(&self, id: i64, dados: &NovaAtividade) -> Result<Atividade, AppError> {
        let atividade = sqlx::query_as::<_, Atividade>(
            r#"
            UPDATE atividades
            SET tipo = $2, cnae_codigo = $3, descricao = $4
            WHERE id = $1
            RETURNING id, empresa_id, tipo, cnae_codigo, descricao
            "#,
        )
        .bind(id)
        .bind(dados.tipo)
        .bind(&dados.cnae_codigo)
        .bind(&dados.descricao)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NaoEncontrado)?;

        Ok(atividade)
    }

    /// Hard delete: atividade não participa da trilha de auditoria de exclusão.
    pub async fn excluir(&self, id: i64) -> Result<(), AppError> {
        let resultado = sqlx::query("DELETE FROM atividades WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if resultado.rows_affected() == 0 {
            return Err(AppError::NaoEncontrado);
        }
        Ok(())
    }
}

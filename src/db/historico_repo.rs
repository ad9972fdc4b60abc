// src/db/historico_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::historico::{Historico, NovoHistorico},
};

const COLUNAS: &str = r#"
    id, processo_id, empresa_id, campo_alterado,
    valor_anterior, valor_novo, alterado_por, data_alteracao
"#;

#[derive(Clone)]
pub struct HistoricoRepo {
    pool: PgPool,
}

impl HistoricoRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// A tabela de histórico só recebe INSERT; não existe update nem
    /// delete neste repositório, de propósito.
    pub async fn inserir(&self, entrada: &NovoHistorico, alterado_por: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO historico_processos (
                processo_id, empresa_id, campo_alterado,
                valor_anterior, valor_novo, alterado_por
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(entrada.processo_id)
        .bind(entrada.empresa_id)
        .bind(&entrada.campo_alterado)
        .bind(&entrada.valor_anterior)
        .bind(&entrada.valor_novo)
        .bind(alterado_por)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn listar_por_processo(&self, processo_id: i64) -> Result<Vec<Historico>, AppError> {
        let entradas = sqlx::query_as::<_, Historico>(&format!(
            r#"
            SELECT {COLUNAS}
            FROM historico_processos
            WHERE processo_id = $1
            ORDER BY data_alteracao DESC, id DESC
            "#
        ))
        .bind(processo_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entradas)
    }

    pub async fn listar_por_empresa(&self, empresa_id: i64) -> Result<Vec<Historico>, AppError> {
        let entradas = sqlx::query_as::<_, Historico>(&format!(
            r#"
            SELECT {COLUNAS}
            FROM historico_processos
            WHERE empresa_id = $1
            ORDER BY data_alteracao DESC, id DESC
            "#
        ))
        .bind(empresa_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entradas)
    }
}

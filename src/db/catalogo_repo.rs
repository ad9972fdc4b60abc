// src/db/catalogo_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::catalogo::{Responsavel, StatusProcesso, TipoAlteracao, TipoProcesso},
};

// Catálogos dos formulários: leitura pura, sem escrita pela API.
#[derive(Clone)]
pub struct CatalogoRepo {
    pool: PgPool,
}

impl CatalogoRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn listar_responsaveis(&self) -> Result<Vec<Responsavel>, AppError> {
        let responsaveis = sqlx::query_as::<_, Responsavel>(
            "SELECT id, nome, email FROM responsaveis ORDER BY nome ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(responsaveis)
    }

    pub async fn listar_status(&self) -> Result<Vec<StatusProcesso>, AppError> {
        let status = sqlx::query_as::<_, StatusProcesso>(
            "SELECT id, nome FROM status_processo ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(status)
    }

    pub async fn listar_tipos_processo(&self) -> Result<Vec<TipoProcesso>, AppError> {
        let tipos = sqlx::query_as::<_, TipoProcesso>(
            "SELECT id, nome FROM tipos_processo ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tipos)
    }

    pub async fn buscar_tipo_processo(&self, id: i64) -> Result<Option<TipoProcesso>, AppError> {
        let tipo = sqlx::query_as::<_, TipoProcesso>(
            "SELECT id, nome FROM tipos_processo WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(tipo)
    }

    pub async fn listar_tipos_alteracao(&self) -> Result<Vec<TipoAlteracao>, AppError> {
        let tipos = sqlx::query_as::<_, TipoAlteracao>(
            "SELECT id, categoria, descricao FROM tipos_alteracao ORDER BY categoria ASC, descricao ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tipos)
    }
}

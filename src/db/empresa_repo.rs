// src/db/empresa_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::empresa::{Empresa, SalvarEmpresaPayload},
};

const COLUNAS: &str = r#"
    id, nome, cnpj, situacao, porte, natureza_juridica,
    logradouro, numero, complemento, municipio, bairro, uf, cep,
    simples_optante, simples_data_opcao, simples_data_exclusao,
    simei_optante, simei_data_opcao, simei_data_exclusao
"#;

#[derive(Clone)]
pub struct EmpresaRepo {
    pool: PgPool,
}

impl EmpresaRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lista as empresas não excluídas, ordenadas por nome.
    pub async fn listar(&self) -> Result<Vec<Empresa>, AppError> {
        let empresas = sqlx::query_as::<_, Empresa>(&format!(
            "SELECT {COLUNAS} FROM empresas WHERE deleted_at IS NULL ORDER BY nome ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(empresas)
    }

    pub async fn buscar(&self, id: i64) -> Result<Option<Empresa>, AppError> {
        let empresa = sqlx::query_as::<_, Empresa>(&format!(
            "SELECT {COLUNAS} FROM empresas WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(empresa)
    }

    pub async fn criar(&self, dados: &SalvarEmpresaPayload, cnpj_limpo: &str) -> Result<Empresa, AppError> {
        let empresa = sqlx::query_as::<_, Empresa>(&format!(
            r#"
            INSERT INTO empresas (
                nome, cnpj, situacao, porte, natureza_juridica,
                logradouro, numero, complemento, municipio, bairro, uf, cep,
                simples_optante, simples_data_opcao, simples_data_exclusao,
                simei_optante, simei_data_opcao, simei_data_exclusao
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                    $13, $14, $15, $16, $17, $18)
            RETURNING {COLUNAS}
            "#
        ))
        .bind(&dados.nome)
        .bind(cnpj_limpo)
        .bind(&dados.situacao)
        .bind(&dados.porte)
        .bind(&dados.natureza_juridica)
        .bind(&dados.logradouro)
        .bind(&dados.numero)
        .bind(&dados.complemento)
        .bind(&dados.municipio)
        .bind(&dados.bairro)
        .bind(&dados.uf)
        .bind(&dados.cep)
        .bind(dados.simples_optante)
        .bind(&dados.simples_data_opcao)
        .bind(&dados.simples_data_exclusao)
        .bind(dados.simei_optante)
        .bind(&dados.simei_data_opcao)
        .bind(&dados.simei_data_exclusao)
        .fetch_one(&self.pool)
        .await?;

        Ok(empresa)
    }

    /// Sobrescreve o registro inteiro (o formulário manda todos os campos).
    /// O CNPJ não é alterado depois da criação.
    pub async fn atualizar(&self, id: i64, dados: &SalvarEmpresaPayload) -> Result<Empresa, AppError> {
        let empresa = sqlx::query_as::<_, Empresa>(&format!(
            r#"
            UPDATE empresas SET
                nome = $2, situacao = $3, porte = $4, natureza_juridica = $5,
                logradouro = $6, numero = $7, complemento = $8, municipio = $9,
                bairro = $10, uf = $11, cep = $12,
                simples_optante = $13, simples_data_opcao = $14, simples_data_exclusao = $15,
                simei_optante = $16, simei_data_opcao = $17, simei_data_exclusao = $18,
                updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING {COLUNAS}
            "#
        ))
        .bind(id)
        .bind(&dados.nome)
        .bind(&dados.situacao)
        .bind(&dados.porte)
        .bind(&dados.natureza_juridica)
        .bind(&dados.logradouro)
        .bind(&dados.numero)
        .bind(&dados.complemento)
        .bind(&dados.municipio)
        .bind(&dados.bairro)
        .bind(&dados.uf)
        .bind(&dados.cep)
        .bind(dados.simples_optante)
        .bind(&dados.simples_data_opcao)
        .bind(&dados.simples_data_exclusao)
        .bind(dados.simei_optante)
        .bind(&dados.simei_data_opcao)
        .bind(&dados.simei_data_exclusao)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NaoEncontrado)?;

        Ok(empresa)
    }

    /// Soft delete: marca `deleted_at` e some das listagens, mas o
    /// histórico da empresa continua consultável. Excluir de novo dá
    /// `NaoEncontrado`.
    pub async fn soft_delete(&self, id: i64) -> Result<(), AppError> {
        let resultado = sqlx::query(
            "UPDATE empresas SET deleted_at = NOW(), updated_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        if resultado.rows_affected() == 0 {
            return Err(AppError::NaoEncontrado);
        }
        Ok(())
    }
}

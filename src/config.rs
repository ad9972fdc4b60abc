// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{AtividadeRepo, CatalogoRepo, EmpresaRepo, HistoricoRepo, ObservacaoRepo, ProcessoRepo},
    services::{
        consulta_cnpj::ConsultaCnpjService, empresa_service::EmpresaService,
        historico_service::HistoricoService, processo_service::ProcessoService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_secret: String,
    pub empresa_service: EmpresaService,
    pub processo_service: ProcessoService,
    pub historico_service: HistoricoService,
    pub catalogo_repo: CatalogoRepo,
    pub consulta_cnpj: ConsultaCnpjService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");
        let receitaws_url = env::var("RECEITAWS_URL")
            .unwrap_or_else(|_| "https://receitaws.com.br/v1".to_string());
        let receitaws_token =
            env::var("RECEITAWS_TOKEN").expect("RECEITAWS_TOKEN deve ser definido");

        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::montar(db_pool, jwt_secret, receitaws_url, receitaws_token))
    }

    /// Monta o gráfico de dependências a partir de uma pool já aberta.
    /// Os testes de integração entram por aqui, sem passar pelo env.
    pub fn montar(
        db_pool: PgPool,
        jwt_secret: String,
        receitaws_url: String,
        receitaws_token: String,
    ) -> Self {
        let historico_service = HistoricoService::new(HistoricoRepo::new(db_pool.clone()));
        let empresa_service = EmpresaService::new(
            EmpresaRepo::new(db_pool.clone()),
            AtividadeRepo::new(db_pool.clone()),
            historico_service.clone(),
        );
        let catalogo_repo = CatalogoRepo::new(db_pool.clone());
        let processo_service = ProcessoService::new(
            ProcessoRepo::new(db_pool.clone()),
            ObservacaoRepo::new(db_pool.clone()),
            catalogo_repo.clone(),
            empresa_service.clone(),
            historico_service.clone(),
        );
        let consulta_cnpj = ConsultaCnpjService::new(receitaws_url, receitaws_token);

        Self {
            db_pool,
            jwt_secret,
            empresa_service,
            processo_service,
            historico_service,
            catalogo_repo,
            consulta_cnpj,
        }
    }
}

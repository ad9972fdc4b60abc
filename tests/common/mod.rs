use std::time::{SystemTime, UNIX_EPOCH};

use sqlx::{postgres::PgPoolOptions, Connection, Executor, PgConnection, PgPool};

use legaliza_backend::config::AppState;

/// Contexto de teste com um banco descartável por execução.
///
/// Retorna `None` quando `TEST_DATABASE_URL` não está definida — os
/// testes de integração simplesmente não rodam sem um Postgres.
pub struct PgTestContext {
    pub state: AppState,
    admin_url: String,
    db_name: String,
}

impl PgTestContext {
    pub async fn new() -> Option<Self> {
        let base = std::env::var("TEST_DATABASE_URL").ok()?;
        let (admin_url, db_name, test_url) = build_urls(&base)?;

        let mut admin = PgConnection::connect(&admin_url).await.ok()?;
        let drop_sql = format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE);");
        let create_sql = format!("CREATE DATABASE \"{db_name}\";");
        let _ = admin.execute(drop_sql.as_str()).await;
        admin.execute(create_sql.as_str()).await.ok()?;

        let pool: PgPool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&test_url)
            .await
            .ok()?;

        sqlx::migrate!("./migrations").run(&pool).await.ok()?;

        let state = AppState::montar(
            pool,
            "segredo-de-teste".to_string(),
            // A URL aponta para lugar nenhum: os testes de integração não
            // exercitam a consulta externa.
            "http://127.0.0.1:9".to_string(),
            "token-de-teste".to_string(),
        );

        Some(Self {
            state,
            admin_url,
            db_name,
        })
    }

    pub async fn cleanup(self) {
        let Self {
            state,
            admin_url,
            db_name,
        } = self;
        state.db_pool.close().await;
        drop(state);

        if let Ok(mut admin) = PgConnection::connect(&admin_url).await {
            let drop_sql = format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE);");
            let _ = admin.execute(drop_sql.as_str()).await;
        }
    }
}

/// Deriva da URL base a URL administrativa e a URL do banco de teste
/// com nome único por execução.
fn build_urls(base: &str) -> Option<(String, String, String)> {
    let (prefixo, _banco_original) = base.rsplit_once('/')?;

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .ok()?
        .subsec_nanos();
    let db_name = format!("legaliza_test_{}_{nanos}", std::process::id());

    let admin_url = format!("{prefixo}/postgres");
    let test_url = format!("{prefixo}/{db_name}");
    Some((admin_url, db_name, test_url))
}

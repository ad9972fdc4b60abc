// src/services/consulta_cnpj.rs

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::sync::RwLock;

use crate::{common::error::AppError, models::consulta::ConsultaReceitaWS};

/// Gateway da consulta de CNPJ na ReceitaWS.
///
/// Qualquer falha — transporte, status não-2xx, corpo fora do schema —
/// vira o mesmo [`AppError::ConsultaCnpj`] genérico: o serviço externo
/// não dá como distinguir "não encontrado" de "fora do ar" de forma
/// confiável, então o chamador recebe uma única mensagem.
#[derive(Clone)]
pub struct ConsultaCnpjService {
    http: reqwest::Client,
    base_url: String,
    token: String,
    // Cache em memória por CNPJ; o TTL vem do parâmetro `days` de cada
    // consulta.
    cache: Arc<RwLock<HashMap<String, (Instant, ConsultaReceitaWS)>>>,
}

impl ConsultaCnpjService {
    pub fn new(base_url: String, token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            token,
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Consulta o cadastro do CNPJ, servindo do cache quando a entrada
    /// tem menos de `dias_cache` dias.
    pub async fn consultar(
        &self,
        cnpj: &str,
        dias_cache: u64,
    ) -> Result<ConsultaReceitaWS, AppError> {
        let ttl = Duration::from_secs(dias_cache.saturating_mul(24 * 60 * 60));

        if dias_cache > 0 {
            let cache = self.cache.read().await;
            if let Some((gravado_em, consulta)) = cache.get(cnpj) {
                if gravado_em.elapsed() < ttl {
                    tracing::debug!(cnpj, "Consulta de CNPJ servida do cache");
                    return Ok(consulta.clone());
                }
            }
        }

        let url = format!("{}/cnpj/{}", self.base_url.trim_end_matches('/'), cnpj);
        tracing::info!(%url, "Consultando ReceitaWS");

        let resposta = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .bearer_auth(&self.token)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|err| {
                tracing::warn!(cnpj, "Erro ao consultar ReceitaWS: {err}");
                AppError::ConsultaCnpj
            })?;

        let consulta: ConsultaReceitaWS = resposta.json().await.map_err(|err| {
            tracing::warn!(cnpj, "Resposta da ReceitaWS fora do schema: {err}");
            AppError::ConsultaCnpj
        })?;

        if dias_cache > 0 {
            let mut cache = self.cache.write().await;
            cache.insert(cnpj.to_string(), (Instant::now(), consulta.clone()));
        }

        Ok(consulta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CNPJ: &str = "11222333000181";

    // A porta 9 (discard) não responde: qualquer tentativa de chamada
    // externa falha no transporte.
    fn servico_sem_rede() -> ConsultaCnpjService {
        ConsultaCnpjService::new("http://127.0.0.1:9".to_string(), "token-de-teste".to_string())
    }

    fn consulta_de_exemplo() -> ConsultaReceitaWS {
        serde_json::from_str(
            r#"{ "status": "OK", "cnpj": "11.222.333/0001-81", "nome": "PADARIA EXEMPLO LTDA" }"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn falha_de_transporte_vira_erro_generico() {
        let servico = servico_sem_rede();

        let resultado = servico.consultar(CNPJ, 0).await;
        assert!(matches!(resultado, Err(AppError::ConsultaCnpj)));
    }

    #[tokio::test]
    async fn cache_dentro_do_ttl_evita_a_chamada_externa() {
        let servico = servico_sem_rede();
        servico
            .cache
            .write()
            .await
            .insert(CNPJ.to_string(), (Instant::now(), consulta_de_exemplo()));

        // A URL não responde: um Ok aqui só pode ter vindo do cache.
        let consulta = servico.consultar(CNPJ, 7).await.unwrap();
        assert_eq!(consulta.nome, "PADARIA EXEMPLO LTDA");
    }

    #[tokio::test]
    async fn days_zero_ignora_o_cache() {
        let servico = servico_sem_rede();
        servico
            .cache
            .write()
            .await
            .insert(CNPJ.to_string(), (Instant::now(), consulta_de_exemplo()));

        let resultado = servico.consultar(CNPJ, 0).await;
        assert!(matches!(resultado, Err(AppError::ConsultaCnpj)));
    }
}

// src/docs.rs

use axum::Json;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Empresas ---
        handlers::empresas::listar,
        handlers::empresas::buscar,
        handlers::empresas::criar,
        handlers::empresas::atualizar,
        handlers::empresas::excluir,
        handlers::empresas::historico,

        // --- Atividades ---
        handlers::atividades::listar_por_empresa,
        handlers::atividades::criar,
        handlers::atividades::atualizar,
        handlers::atividades::excluir,

        // --- Processos ---
        handlers::processos::listar,
        handlers::processos::buscar,
        handlers::processos::criar,
        handlers::processos::atualizar,
        handlers::processos::excluir,
        handlers::processos::historico,

        // --- Observações ---
        handlers::observacoes::listar_por_processo,
        handlers::observacoes::criar,
        handlers::observacoes::atualizar,
        handlers::observacoes::excluir,

        // --- Catálogos ---
        handlers::catalogos::listar_responsaveis,
        handlers::catalogos::listar_status,
        handlers::catalogos::listar_tipos_processo,
        handlers::catalogos::listar_tipos_alteracao,

        // --- Consulta CNPJ ---
        handlers::consulta::consultar,
    ),
    components(
        schemas(
            models::empresa::Empresa,
            models::empresa::Atividade,
            models::empresa::TipoAtividade,
            models::empresa::NovaAtividade,
            models::empresa::SalvarEmpresaPayload,
            models::processo::Processo,
            models::processo::SalvarProcessoPayload,
            models::processo::TipoAlteracaoSelecionado,
            models::processo::NovaObservacao,
            models::observacao::Observacao,
            models::historico::Historico,
            models::catalogo::Responsavel,
            models::catalogo::StatusProcesso,
            models::catalogo::TipoProcesso,
            models::catalogo::TipoAlteracao,
            models::catalogo::TipoAlteracaoVinculado,
            models::consulta::ConsultaReceitaWS,
            models::consulta::AtividadeReceita,
            models::consulta::RegimeSimplificado,
        )
    ),
    modifiers(&SecuritySchemes),
    tags(
        (name = "Empresas", description = "Cadastro de empresas"),
        (name = "Atividades", description = "Atividades econômicas (CNAE)"),
        (name = "Processos", description = "Processos de legalização"),
        (name = "Observações", description = "Observações dos processos"),
        (name = "Catálogos", description = "Catálogos dos formulários"),
        (name = "Consulta CNPJ", description = "Proxy da ReceitaWS")
    )
)]
pub struct ApiDoc;

struct SecuritySchemes;

impl Modify for SecuritySchemes {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_jwt",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

// GET /api/docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

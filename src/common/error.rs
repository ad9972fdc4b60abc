use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Tipo de erro único da aplicação, com `thiserror` para as conversões.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("O campo 'id' é obrigatório para esta operação")]
    IdObrigatorio,

    #[error("Registro não encontrado")]
    NaoEncontrado,

    #[error("Token de autenticação inválido ou ausente")]
    InvalidToken,

    // A consulta externa não distingue "não encontrado" de "fora do ar":
    // tudo vira esta variante genérica.
    #[error("Erro ao consultar o cadastro do CNPJ")]
    ConsultaCnpj,

    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::IdObrigatorio => (
                StatusCode::BAD_REQUEST,
                "O campo 'id' é obrigatório para esta operação.",
            ),
            AppError::NaoEncontrado => (StatusCode::NOT_FOUND, "Registro não encontrado."),
            AppError::InvalidToken | AppError::JwtError(_) => (
                StatusCode::UNAUTHORIZED,
                "Token de autenticação inválido ou ausente.",
            ),
            AppError::ConsultaCnpj => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Erro interno ao consultar ReceitaWS.",
            ),

            // DatabaseError e InternalServerError viram 500; o `tracing`
            // registra a mensagem detalhada que o `thiserror` montou.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado.",
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

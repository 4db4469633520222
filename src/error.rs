use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::providers::ProviderError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Texto vazio")]
    EmptyInput,

    #[error("Texto muito longo (máx: 5000 caracteres)")]
    TooLong,

    #[error("OpenAI não configurada")]
    NotConfigured,

    #[error("Completion service unreachable: {0}")]
    UpstreamUnavailable(String),

    #[error("Completion service error {status}: {body}")]
    UpstreamError { status: u16, body: String },

    #[error("Model output is not valid JSON: {0}")]
    MalformedResponse(String),

    #[error("Internal server error: {0}")]
    Unexpected(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Unexpected(anyhow::Error::new(err))
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotConfigured(_) => AppError::NotConfigured,
            ProviderError::Network(msg) => AppError::UpstreamUnavailable(msg),
            ProviderError::Api { status, body } => AppError::UpstreamError { status, body },
            ProviderError::EmptyCompletion => AppError::UpstreamError {
                status: 200,
                body: "completion contained no message content".to_string(),
            },
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let too_long = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .any(|e| e.code == "too_long");

        if too_long {
            AppError::TooLong
        } else {
            AppError::EmptyInput
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            message: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            details: Option<String>,
        }

        let (status, error, message, details) = match self {
            AppError::EmptyInput | AppError::TooLong => {
                (StatusCode::BAD_REQUEST, self.to_string(), None, None)
            }
            AppError::NotConfigured => (
                StatusCode::SERVICE_UNAVAILABLE,
                "OpenAI não configurada".to_string(),
                Some("Configure OPENAI_API_KEY nas variáveis de ambiente".to_string()),
                None,
            ),
            AppError::UpstreamUnavailable(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Erro ao gerar lição".to_string(),
                Some(format!("Completion service unreachable: {}", msg)),
                None,
            ),
            AppError::UpstreamError { status, body } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Erro ao gerar lição".to_string(),
                Some(format!("Completion service error {}", status)),
                Some(body),
            ),
            AppError::MalformedResponse(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Erro ao gerar lição".to_string(),
                Some(format!("Model output is not valid JSON: {}", msg)),
                None,
            ),
            AppError::Unexpected(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Erro ao gerar lição".to_string(),
                Some(err.to_string()),
                None,
            ),
            AppError::ConfigError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Configuration error".to_string(),
                Some(err.to_string()),
                None,
            ),
        };

        (
            status,
            Json(ErrorResponse {
                error,
                message,
                details,
            }),
        )
            .into_response()
    }
}

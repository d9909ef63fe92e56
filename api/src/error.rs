//! Unified error types for the product API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Persistence and core business errors raised behind the ports
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::entities::ProductField;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Application layer errors - used by HTTP handlers
///
/// The display text of each client error is the message sent back in the
/// response envelope.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Campo {0} invalido")]
    InvalidField(ProductField),

    #[error("Quantidade do estoque nao pode ser negativa")]
    NegativeStock,

    #[error("O id deve ser numerico")]
    MalformedId,

    #[error("Ambos valores precisam ser numericos")]
    MalformedStockValues,

    #[error("Produto Não Encontrado")]
    NotFound,

    #[error("ID não encontrado")]
    IdNotFound,

    #[error("Estoque insulficiente")]
    InsufficientStock,

    #[error("Corpo da requisição invalido")]
    InvalidBody(String),
}

impl From<ProductField> for AppError {
    fn from(field: ProductField) -> Self {
        AppError::InvalidField(field)
    }
}

/// Response envelope shared by confirmations and errors.
///
/// `code` is the status the operation reports in its body, which is not
/// always the HTTP status of the response carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
    pub code: u16,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>, code: u16) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Domain(DomainError::Internal(msg)) => {
                tracing::error!("Internal error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::InvalidBody(details) => {
                tracing::debug!("Rejected request body: {}", details);
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::BAD_REQUEST,
        };

        let message = match &self {
            AppError::Domain(DomainError::NotFound(_)) => AppError::NotFound.to_string(),
            AppError::Domain(_) => "Erro interno do servidor".to_string(),
            other => other.to_string(),
        };

        let body = Json(ApiMessage::new(message, status.as_u16()));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(error: AppError) -> StatusCode {
        error.into_response().status()
    }

    #[test]
    fn field_errors_name_the_field() {
        assert_eq!(
            AppError::InvalidField(ProductField::Name).to_string(),
            "Campo nome invalido"
        );
        assert_eq!(
            AppError::InvalidField(ProductField::Description).to_string(),
            "Campo descrição invalido"
        );
        assert_eq!(
            AppError::InvalidField(ProductField::Price).to_string(),
            "Campo Preço invalido"
        );
        assert_eq!(
            AppError::InvalidField(ProductField::StockQuantity).to_string(),
            "Campo quantidade invalido"
        );
    }

    #[test]
    fn client_errors_are_bad_request() {
        assert_eq!(status_of(AppError::MalformedId), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(AppError::NotFound), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(AppError::IdNotFound), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(AppError::InsufficientStock),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(AppError::NegativeStock), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(AppError::InvalidBody("eof".to_string())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn infrastructure_errors_are_internal() {
        assert_eq!(
            status_of(AppError::Domain(DomainError::Database("down".to_string()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(AppError::Domain(DomainError::Internal("bug".to_string()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn product_field_converts_into_app_error() {
        let error: AppError = ProductField::Price.into();
        assert!(matches!(error, AppError::InvalidField(ProductField::Price)));
    }

    #[test]
    fn serialize_api_message() {
        let json = serde_json::to_string(&ApiMessage::new("Produto Deletado", 204)).unwrap();
        assert_eq!(json, r#"{"message":"Produto Deletado","code":204}"#);
    }
}

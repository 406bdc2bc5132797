use crate::bank::BankError;
use crate::validation::Violation;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("payment request failed validation")]
    Validation(Vec<Violation>),
    #[error("payment not found: {0}")]
    NotFound(Uuid),
    #[error("acquiring bank unavailable: {0}")]
    BankUnavailable(String),
    #[error("operation cancelled")]
    Cancelled,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<BankError> for PaymentError {
    fn from(err: BankError) -> Self {
        match err {
            BankError::Unavailable(detail) => PaymentError::BankUnavailable(detail),
            BankError::Cancelled => PaymentError::Cancelled,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
}

impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        let (status, message, violations) = match self {
            PaymentError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                "The payment request is invalid.".to_string(),
                violations,
            ),
            PaymentError::NotFound(id) => {
                tracing::warn!("payment not found: {}", id);
                (
                    StatusCode::NOT_FOUND,
                    format!("Payment not found for id: {id}"),
                    Vec::new(),
                )
            }
            PaymentError::BankUnavailable(detail) => {
                tracing::warn!("bank unavailable: {}", detail);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "The acquiring bank is unavailable. Please retry later.".to_string(),
                    Vec::new(),
                )
            }
            PaymentError::Cancelled => {
                tracing::warn!("operation cancelled by caller");
                (
                    StatusCode::BAD_REQUEST,
                    "The operation was cancelled.".to_string(),
                    Vec::new(),
                )
            }
            PaymentError::Internal(e) => {
                // Full detail stays in the log; the caller gets a generic
                // message.
                tracing::error!("unexpected error: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred.".to_string(),
                    Vec::new(),
                )
            }
        };

        let body = ErrorBody {
            status_code: status.as_u16(),
            message,
            violations,
        };
        (status, Json(body)).into_response()
    }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

pub mod client;
pub mod mock;

/// Wire shape sent to the acquiring bank. Built fresh for every call,
/// never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationRequest {
    pub card_number: String,
    pub expiry_date: String,
    pub currency: String,
    pub amount: i64,
    pub cvv: String,
}

/// The bank may return richer data; only the flag is part of the contract.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorizationResult {
    pub authorized: bool,
}

#[derive(Debug, Error)]
pub enum BankError {
    #[error("acquiring bank unavailable: {0}")]
    Unavailable(String),
    #[error("bank call cancelled")]
    Cancelled,
}

#[async_trait::async_trait]
pub trait AcquiringBank: Send + Sync {
    async fn authorize(
        &self,
        request: AuthorizationRequest,
        cancel: &CancellationToken,
    ) -> Result<AuthorizationResult, BankError>;
}

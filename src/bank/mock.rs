use crate::bank::{AcquiringBank, AuthorizationRequest, AuthorizationResult, BankError};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio_util::sync::CancellationToken;

/// Scriptable stand-in for the acquiring bank. Counts calls so tests can
/// assert whether the bank was contacted at all.
pub struct MockBank {
    pub behavior: String,
    pub calls: AtomicUsize,
}

impl MockBank {
    pub fn new(behavior: &str) -> Self {
        Self {
            behavior: behavior.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl AcquiringBank for MockBank {
    async fn authorize(
        &self,
        _request: AuthorizationRequest,
        cancel: &CancellationToken,
    ) -> Result<AuthorizationResult, BankError> {
        if cancel.is_cancelled() {
            return Err(BankError::Cancelled);
        }
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.behavior.as_str() {
            "ALWAYS_DECLINED" => Ok(AuthorizationResult { authorized: false }),
            "ALWAYS_UNAVAILABLE" => Err(BankError::Unavailable("mock outage".to_string())),
            _ => Ok(AuthorizationResult { authorized: true }),
        }
    }
}

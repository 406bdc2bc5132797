use crate::bank::{AcquiringBank, AuthorizationRequest, AuthorizationResult, BankError};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Invoked at each retry boundary, before the backoff wait. Keeps the retry
/// loop itself free of logging concerns.
pub trait RetryObserver: Send + Sync {
    fn on_retry(&self, attempt: u32, delay: Duration, cause: &str);
}

pub struct LogRetryObserver;

impl RetryObserver for LogRetryObserver {
    fn on_retry(&self, attempt: u32, delay: Duration, cause: &str) {
        tracing::warn!("retry {} after {:?} due to: {}", attempt, delay, cause);
    }
}

pub struct BankClient {
    pub base_url: String,
    pub timeout_ms: u64,
    /// Retries after the first attempt; 3 retries means 4 attempts total.
    pub max_retries: u32,
    /// Base delay; retry n waits `backoff_unit * 2^n`.
    pub backoff_unit: Duration,
    pub client: reqwest::Client,
    pub observer: Arc<dyn RetryObserver>,
}

impl BankClient {
    pub fn new(base_url: String, timeout_ms: u64, client: reqwest::Client) -> Self {
        Self {
            base_url,
            timeout_ms,
            max_retries: 3,
            backoff_unit: Duration::from_secs(1),
            client,
            observer: Arc::new(LogRetryObserver),
        }
    }
}

#[async_trait::async_trait]
impl AcquiringBank for BankClient {
    async fn authorize(
        &self,
        request: AuthorizationRequest,
        cancel: &CancellationToken,
    ) -> Result<AuthorizationResult, BankError> {
        let url = format!("{}/payments", self.base_url.trim_end_matches('/'));
        let mut last_failure = String::from("no attempt made");

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = self.backoff_unit * 2u32.pow(attempt);
                self.observer.on_retry(attempt, delay, &last_failure);
                tokio::select! {
                    _ = cancel.cancelled() => return Err(BankError::Cancelled),
                    _ = tokio::time::sleep(delay) => {}
                }
            }
            if cancel.is_cancelled() {
                return Err(BankError::Cancelled);
            }

            let send = self
                .client
                .post(&url)
                .json(&request)
                .timeout(Duration::from_millis(self.timeout_ms))
                .send();
            let response = tokio::select! {
                _ = cancel.cancelled() => return Err(BankError::Cancelled),
                r = send => r,
            };

            match response {
                Ok(r) if r.status().is_success() => {
                    // A malformed success body is indistinguishable from an
                    // outage to the caller; it does not consume the retry
                    // budget.
                    return match r.json::<AuthorizationResult>().await {
                        Ok(result) => Ok(result),
                        Err(e) => {
                            Err(BankError::Unavailable(format!("unparseable bank response: {e}")))
                        }
                    };
                }
                Ok(r) => last_failure = format!("bank returned status {}", r.status()),
                Err(e) if e.is_timeout() => last_failure = "bank request timed out".to_string(),
                Err(e) => last_failure = format!("transport error: {e}"),
            }
        }

        Err(BankError::Unavailable(last_failure))
    }
}

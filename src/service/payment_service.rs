use crate::bank::{AcquiringBank, AuthorizationRequest};
use crate::domain::payment::{PaymentRecord, PaymentRequest, PaymentStatus};
use crate::error::PaymentError;
use crate::repo::payments_repo::PaymentsRepo;
use crate::validation::validate;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Sequences validation, the bank round-trip, and persistence for the
/// process-payment use case; holds no per-payment state of its own.
#[derive(Clone)]
pub struct PaymentService {
    pub payments_repo: PaymentsRepo,
    pub bank: Arc<dyn AcquiringBank>,
    pub clock: fn() -> DateTime<Utc>,
}

impl PaymentService {
    pub async fn process(
        &self,
        request: PaymentRequest,
        cancel: CancellationToken,
    ) -> Result<PaymentRecord, PaymentError> {
        let violations = validate(&request, (self.clock)());
        if !violations.is_empty() {
            return Err(PaymentError::Validation(violations));
        }

        let bank_request = AuthorizationRequest {
            card_number: request.card_number.clone(),
            expiry_date: format!("{:02}/{}", request.expiry_month, request.expiry_year),
            currency: request.currency.clone(),
            amount: request.amount,
            cvv: request.cvv.clone(),
        };

        tracing::info!(
            "authorizing payment for card ending with {}",
            last_four(&request.card_number)
        );
        let outcome = self.bank.authorize(bank_request, &cancel).await?;

        // The bank call has fully resolved; a cancelled caller still must
        // not observe a half-applied store.
        if cancel.is_cancelled() {
            return Err(PaymentError::Cancelled);
        }

        let record = PaymentRecord {
            id: Uuid::new_v4(),
            status: if outcome.authorized {
                PaymentStatus::Authorized
            } else {
                PaymentStatus::Declined
            },
            card_number_last_four: last_four(&request.card_number).to_string(),
            expiry_month: request.expiry_month,
            expiry_year: request.expiry_year,
            currency: request.currency,
            amount: request.amount,
        };
        self.payments_repo.add(record.clone()).await;

        Ok(record)
    }

    pub async fn get(&self, id: Uuid) -> Result<PaymentRecord, PaymentError> {
        self.payments_repo
            .get(id)
            .await
            .ok_or(PaymentError::NotFound(id))
    }
}

fn last_four(card_number: &str) -> &str {
    &card_number[card_number.len().saturating_sub(4)..]
}

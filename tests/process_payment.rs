use card_gateway::bank::mock::MockBank;
use card_gateway::domain::payment::{PaymentRequest, PaymentStatus};
use card_gateway::error::PaymentError;
use card_gateway::repo::payments_repo::PaymentsRepo;
use card_gateway::service::payment_service::PaymentService;
use chrono::Datelike;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

fn service(behavior: &str) -> (PaymentService, Arc<MockBank>) {
    let bank = Arc::new(MockBank::new(behavior));
    let service = PaymentService {
        payments_repo: PaymentsRepo::new(),
        bank: bank.clone(),
        clock: chrono::Utc::now,
    };
    (service, bank)
}

fn valid_request() -> PaymentRequest {
    PaymentRequest {
        card_number: "4111111111111111".to_string(),
        expiry_month: 12,
        expiry_year: chrono::Utc::now().year() + 1,
        currency: "USD".to_string(),
        amount: 500,
        cvv: "123".to_string(),
    }
}

#[tokio::test]
async fn authorized_payment_is_persisted_and_retrievable() {
    let (service, _bank) = service("ALWAYS_AUTHORIZED");

    let record = service
        .process(valid_request(), CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(record.status, PaymentStatus::Authorized);
    assert_eq!(record.card_number_last_four, "1111");
    assert_eq!(record.amount, 500);
    assert_eq!(record.currency, "USD");

    let fetched = service.get(record.id).await.unwrap();
    assert_eq!(fetched, record);
}

#[tokio::test]
async fn declined_payment_is_still_persisted() {
    let (service, _bank) = service("ALWAYS_DECLINED");

    let record = service
        .process(valid_request(), CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(record.status, PaymentStatus::Declined);
    let fetched = service.get(record.id).await.unwrap();
    assert_eq!(fetched.status, PaymentStatus::Declined);
}

#[tokio::test]
async fn invalid_request_never_reaches_the_bank() {
    let (service, bank) = service("ALWAYS_AUTHORIZED");
    let mut request = valid_request();
    request.amount = 0;

    let err = service
        .process(request, CancellationToken::new())
        .await
        .unwrap_err();

    match err {
        PaymentError::Validation(violations) => {
            assert!(violations.iter().any(|v| v.field == "amount"));
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
    assert_eq!(bank.call_count(), 0);
    assert_eq!(service.payments_repo.len().await, 0);
}

#[tokio::test]
async fn expired_card_never_reaches_the_bank() {
    let (service, bank) = service("ALWAYS_AUTHORIZED");
    let mut request = valid_request();
    request.expiry_month = 1;
    request.expiry_year = 2020;

    let err = service
        .process(request, CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, PaymentError::Validation(_)));
    assert_eq!(bank.call_count(), 0);
}

#[tokio::test]
async fn bank_outage_persists_nothing() {
    let (service, bank) = service("ALWAYS_UNAVAILABLE");

    let err = service
        .process(valid_request(), CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, PaymentError::BankUnavailable(_)));
    assert_eq!(bank.call_count(), 1);
    assert_eq!(service.payments_repo.len().await, 0);
}

#[tokio::test]
async fn unknown_identifier_is_not_found() {
    let (service, _bank) = service("ALWAYS_AUTHORIZED");

    let id = Uuid::new_v4();
    let err = service.get(id).await.unwrap_err();
    assert!(matches!(err, PaymentError::NotFound(missing) if missing == id));
}

#[tokio::test]
async fn cancelled_request_leaves_the_store_untouched() {
    let (service, bank) = service("ALWAYS_AUTHORIZED");
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = service.process(valid_request(), cancel).await.unwrap_err();

    assert!(matches!(err, PaymentError::Cancelled));
    assert_eq!(bank.call_count(), 0);
    assert_eq!(service.payments_repo.len().await, 0);
}

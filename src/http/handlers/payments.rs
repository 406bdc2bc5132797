use crate::domain::payment::{PaymentRecord, PaymentRequest};
use crate::error::PaymentError;
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

pub async fn process_payment(
    State(state): State<AppState>,
    Json(request): Json<PaymentRequest>,
) -> Result<Json<PaymentRecord>, PaymentError> {
    let record = state
        .payment_service
        .process(request, state.shutdown.child_token())
        .await?;
    tracing::info!("payment processed, id: {}", record.id);
    Ok(Json(record))
}

pub async fn get_payment(
    State(state): State<AppState>,
    Path(payment_id): Path<Uuid>,
) -> Result<Json<PaymentRecord>, PaymentError> {
    tracing::info!("fetching payment with id: {}", payment_id);
    let record = state.payment_service.get(payment_id).await?;
    Ok(Json(record))
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Caller-supplied payment request. Missing fields deserialize to their
/// defaults so the validator can report them instead of the JSON layer
/// rejecting the body outright.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentRequest {
    pub card_number: String,
    pub expiry_month: i32,
    pub expiry_year: i32,
    pub currency: String,
    pub amount: i64,
    pub cvv: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaymentStatus {
    Authorized,
    Declined,
    Rejected,
}

/// Fail-closed conversion from free-text status. Anything that is not an
/// exact case-insensitive match for a known status maps to `Rejected`.
pub fn map_status(status: &str) -> PaymentStatus {
    match status.to_ascii_lowercase().as_str() {
        "authorized" => PaymentStatus::Authorized,
        "declined" => PaymentStatus::Declined,
        "rejected" => PaymentStatus::Rejected,
        _ => PaymentStatus::Rejected,
    }
}

impl<'de> Deserialize<'de> for PaymentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Ok(map_status(&text))
    }
}

/// Persisted outcome of a processed payment. Holds only the last four
/// digits of the card; the full number and CVV never outlive the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: Uuid,
    pub status: PaymentStatus,
    pub card_number_last_four: String,
    pub expiry_month: i32,
    pub expiry_year: i32,
    pub currency: String,
    pub amount: i64,
}

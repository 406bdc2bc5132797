use crate::domain::payment::PaymentRequest;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

const VALID_CURRENCIES: [&str; 3] = ["USD", "EUR", "GBP"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl Violation {
    fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// Checks a raw payment request against every rule and returns the full
/// list of violations (empty means valid). Rules never short-circuit so a
/// single call surfaces everything the caller has to fix. The current
/// instant is a parameter so expiry checks are testable.
pub fn validate(request: &PaymentRequest, now: DateTime<Utc>) -> Vec<Violation> {
    let mut violations = Vec::new();

    if request.card_number.is_empty() {
        violations.push(Violation::new("cardNumber", "The card number is required."));
    }
    if !(14..=19).contains(&request.card_number.len()) {
        violations.push(Violation::new(
            "cardNumber",
            "The card number must be between 14 and 19 characters.",
        ));
    }
    if request.card_number.is_empty()
        || !request.card_number.chars().all(|c| c.is_ascii_digit())
    {
        violations.push(Violation::new(
            "cardNumber",
            "The card number must contain only digits.",
        ));
    }

    if request.expiry_month == 0 {
        violations.push(Violation::new("expiryMonth", "The expiration month is required."));
    }
    let month_in_range = (1..=12).contains(&request.expiry_month);
    if !month_in_range {
        violations.push(Violation::new(
            "expiryMonth",
            "The expiration month must be between 1 and 12.",
        ));
    }

    if request.expiry_year == 0 {
        violations.push(Violation::new("expiryYear", "The expiration year is required."));
    }
    if !(1000..=9999).contains(&request.expiry_year) {
        violations.push(Violation::new(
            "expiryYear",
            "The expiryYear must be a 4-digit number.",
        ));
    }
    if month_in_range && !expires_after(request.expiry_month, request.expiry_year, now) {
        violations.push(Violation::new(
            "expiryYear",
            "The expiration date must be in the future.",
        ));
    }

    if request.currency.is_empty() {
        violations.push(Violation::new("currency", "The currency is required."));
    }
    if request.currency.len() != 3 {
        violations.push(Violation::new("currency", "The currency must be 3 characters."));
    }
    if !VALID_CURRENCIES.contains(&request.currency.as_str()) {
        violations.push(Violation::new(
            "currency",
            "The currency is not valid. Valid currencies are: USD, EUR, GBP.",
        ));
    }

    if request.amount == 0 {
        violations.push(Violation::new("amount", "The amount is required."));
    }
    if request.amount <= 0 {
        violations.push(Violation::new("amount", "The amount must be greater than zero."));
    }

    if request.cvv.is_empty() {
        violations.push(Violation::new("cvv", "The CVV is required."));
    }
    if !(3..=4).contains(&request.cvv.len()) {
        violations.push(Violation::new(
            "cvv",
            "The CVV must be between 3 and 4 characters.",
        ));
    }
    if request.cvv.is_empty() || !request.cvv.chars().all(|c| c.is_ascii_digit()) {
        violations.push(Violation::new("cvv", "The CVV must contain only digits."));
    }

    violations
}

/// A card is usable through the last day of its expiry month: the check
/// compares the last day of (month, year) at midnight UTC against `now`.
/// Years outside the 4-digit range fail the check outright.
fn expires_after(month: i32, year: i32, now: DateTime<Utc>) -> bool {
    if !(1..=12).contains(&month) || !(1000..=9999).contains(&year) {
        return false;
    }
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1u32)
    } else {
        (year, month as u32 + 1)
    };
    let Some(first_of_next) = NaiveDate::from_ymd_opt(next_year, next_month, 1) else {
        return false;
    };
    let Some(last_day) = first_of_next.pred_opt() else {
        return false;
    };
    let Some(end_of_month) = last_day.and_hms_opt(0, 0, 0) else {
        return false;
    };
    end_of_month.and_utc() > now
}

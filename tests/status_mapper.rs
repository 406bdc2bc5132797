use card_gateway::domain::payment::{map_status, PaymentStatus};

#[test]
fn maps_known_statuses_case_insensitively() {
    assert_eq!(map_status("authorized"), PaymentStatus::Authorized);
    assert_eq!(map_status("AUTHORIZED"), PaymentStatus::Authorized);
    assert_eq!(map_status("Declined"), PaymentStatus::Declined);
    assert_eq!(map_status("rejected"), PaymentStatus::Rejected);
}

#[test]
fn unknown_empty_and_padded_statuses_fail_closed() {
    assert_eq!(map_status(""), PaymentStatus::Rejected);
    assert_eq!(map_status("   "), PaymentStatus::Rejected);
    assert_eq!(map_status(" authorized "), PaymentStatus::Rejected);
    assert_eq!(map_status("settled"), PaymentStatus::Rejected);
}

#[test]
fn canonical_status_strings_round_trip() {
    for status in [
        PaymentStatus::Authorized,
        PaymentStatus::Declined,
        PaymentStatus::Rejected,
    ] {
        let text = serde_json::to_value(status).unwrap();
        assert_eq!(map_status(text.as_str().unwrap()), status);
    }
}

#[test]
fn deserialization_goes_through_the_fail_closed_mapper() {
    let status: PaymentStatus = serde_json::from_str("\"bogus\"").unwrap();
    assert_eq!(status, PaymentStatus::Rejected);

    let status: PaymentStatus = serde_json::from_str("\"declined\"").unwrap();
    assert_eq!(status, PaymentStatus::Declined);
}

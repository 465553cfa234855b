// End-to-end checkout: format the raw keystrokes, validate the form,
// attempt the charge against a deterministic simulated provider.

use cardform::prelude::*;
use chrono::NaiveDate;
use std::time::Duration;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

fn instant_checkout(rate: f64) -> Checkout<SimulatedProvider> {
    Checkout::new(
        SimulatedProvider::new()
            .with_delay(Duration::ZERO)
            .with_approval_rate(rate),
    )
}

/// Shape the form the way a UI would: raw keystrokes through the
/// formatters for the masked fields, everything else verbatim.
fn typed_form() -> CheckoutForm {
    CheckoutForm {
        name: "Mary-Jane O'Brien".into(),
        card_number: format::card_number("4532015112830366"),
        expiry: format::expiry("0627"),
        cvv: "123".into(),
        amount: "10.5".into(),
    }
}

#[tokio::test]
async fn accepted_checkout_end_to_end() {
    let checkout = instant_checkout(1.0);
    let form = typed_form();

    // The masked fields carry display formatting into validation.
    assert_eq!(form.card_number, "4532 0151 1283 0366");
    assert_eq!(form.expiry, "06/27");

    let charge = checkout.submit(&form, today()).await.unwrap();
    assert_eq!(charge.status, ChargeStatus::Succeeded);
    assert!(charge.message.contains("$10.50"));
    assert!(charge.message.contains("Mary-Jane O'Brien"));
}

#[test]
fn live_network_display_follows_the_typed_prefix() {
    assert_eq!(CardNetwork::detect_for_display("453"), None);
    assert_eq!(
        CardNetwork::detect_for_display(&format::card_number("4532")),
        Some(CardNetwork::Visa)
    );
}

#[tokio::test]
async fn declined_checkout_is_terminal_per_attempt() {
    let checkout = instant_checkout(0.0);
    let err = checkout.submit(&typed_form(), today()).await.unwrap_err();
    assert!(matches!(err, PaymentError::CardDeclined(_)));
    // The user resubmits; the same checkout accepts a fresh attempt.
    let err = checkout.submit(&typed_form(), today()).await.unwrap_err();
    assert!(err.is_retryable());
}

#[tokio::test]
async fn invalid_fields_stop_the_submission() {
    let mut form = typed_form();
    form.cvv = "12a".into();
    form.expiry = "05/25".into();

    let err = instant_checkout(1.0)
        .submit(&form, today())
        .await
        .unwrap_err();
    match err {
        PaymentError::Validation(errors) => {
            assert_eq!(errors.failed_fields(), vec![FieldKey::Expiry, FieldKey::Cvv]);
            assert_eq!(
                err_message(&errors, FieldKey::Cvv),
                "Security code must be 3-4 digits"
            );
        }
        other => panic!("expected validation error, got {}", other),
    }
}

fn err_message(errors: &ValidationErrors, field: FieldKey) -> &str {
    &errors.for_field(field).unwrap().message
}

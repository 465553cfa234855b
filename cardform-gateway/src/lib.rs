//! Payment attempt surface for cardform
//!
//! Wraps the pure validation engine ([`cardform_validation`]) with the one
//! asynchronous thing this system does: attempting a payment. The provider
//! behind [`PaymentProvider`] is pluggable; the bundled
//! [`SimulatedProvider`] settles after a fixed delay with a probabilistic
//! outcome and stands in for a real gateway.
//!
//! One submission is in flight at a time by construction of the caller
//! (it disables its submit affordance while pending); nothing here queues
//! or retries.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use cardform_gateway::{Checkout, SimulatedProvider};
//! use cardform_validation::CheckoutForm;
//! use chrono::Utc;
//!
//! let checkout = Checkout::new(SimulatedProvider::new());
//! let form = CheckoutForm { /* raw field text */ ..Default::default() };
//!
//! match checkout.submit(&form, Utc::now().date_naive()).await {
//!     Ok(charge) => println!("{}", charge.message), // caller resets fields
//!     Err(err) => eprintln!("{}", err.user_message()),
//! }
//! ```

pub mod error;
pub mod provider;
pub mod simulated;
pub mod types;

pub use error::*;
pub use provider::*;
pub use simulated::*;
pub use types::*;

use cardform_validation::{CheckoutForm, FormRules};
use chrono::NaiveDate;
use log::{debug, info};
use std::sync::Arc;

/// Thin wrapper owning a payment provider
pub struct PaymentProcessor<P: PaymentProvider> {
    provider: Arc<P>,
}

impl<P: PaymentProvider> PaymentProcessor<P> {
    /// Create a new payment processor
    pub fn new(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Get the provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Attempt a charge
    pub async fn charge(&self, request: ChargeRequest) -> PaymentResult<Charge> {
        self.provider.charge(request).await
    }
}

impl<P: PaymentProvider> Clone for PaymentProcessor<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
        }
    }
}

/// Checkout orchestration: validate the whole form, then attempt payment
pub struct Checkout<P: PaymentProvider> {
    processor: PaymentProcessor<P>,
    rules: FormRules,
}

impl<P: PaymentProvider> Checkout<P> {
    /// Checkout backed by the given provider, with the standard form rules
    pub fn new(provider: P) -> Self {
        Self {
            processor: PaymentProcessor::new(provider),
            rules: FormRules::checkout(),
        }
    }

    /// The field rules in force (callers also use these for live
    /// formatting of the card number and expiry inputs)
    pub fn rules(&self) -> &FormRules {
        &self.rules
    }

    /// Validate every field and, when all pass, attempt the charge.
    ///
    /// Any validation failure short-circuits with
    /// [`PaymentError::Validation`] carrying one error per failing field;
    /// the provider is never contacted. On success the caller is expected
    /// to reset its own field state.
    pub async fn submit(&self, form: &CheckoutForm, today: NaiveDate) -> PaymentResult<Charge> {
        self.rules.validate(form, today)?;
        let request = ChargeRequest::from_form(form)?;
        debug!(
            target: "cardform::gateway",
            "form valid, submitting to provider '{}'",
            self.processor.provider().name()
        );
        let charge = self.processor.charge(request).await?;
        info!(
            target: "cardform::gateway",
            "charge {} settled: {}",
            charge.id, charge.message
        );
        Ok(charge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardform_validation::FieldKey;
    use std::time::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            name: "Mary-Jane O'Brien".into(),
            card_number: "4532 0151 1283 0366".into(),
            expiry: "06/27".into(),
            cvv: "123".into(),
            amount: "10.5".into(),
        }
    }

    fn instant_checkout(rate: f64) -> Checkout<SimulatedProvider> {
        Checkout::new(
            SimulatedProvider::new()
                .with_delay(Duration::ZERO)
                .with_approval_rate(rate),
        )
    }

    #[tokio::test]
    async fn test_valid_form_charges() {
        let charge = instant_checkout(1.0).submit(&valid_form(), today()).await.unwrap();
        assert!(charge.status.is_success());
        assert!(charge.message.contains("Mary-Jane O'Brien"));
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_the_provider() {
        let mut form = valid_form();
        form.card_number = "4532015112830367".into();
        form.amount = "0".into();

        // Rate 0.0 would decline anything that got through; the error we
        // see must be the validation one.
        let err = instant_checkout(0.0).submit(&form, today()).await.unwrap_err();
        match err {
            PaymentError::Validation(errors) => {
                assert_eq!(
                    errors.failed_fields(),
                    vec![FieldKey::CardNumber, FieldKey::Amount]
                );
            }
            other => panic!("expected validation error, got {}", other),
        }
    }

    #[tokio::test]
    async fn test_decline_surfaces_as_card_declined() {
        let err = instant_checkout(0.0).submit(&valid_form(), today()).await.unwrap_err();
        assert!(matches!(err, PaymentError::CardDeclined(_)));
    }

    #[test]
    fn test_processor_clone_shares_the_provider() {
        let processor = PaymentProcessor::new(SimulatedProvider::new());
        let clone = processor.clone();
        assert_eq!(processor.provider().name(), clone.provider().name());
    }
}

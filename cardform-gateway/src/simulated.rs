//! Timer-based simulated payment provider

use crate::error::{PaymentError, PaymentResult};
use crate::provider::PaymentProvider;
use crate::types::{Charge, ChargeRequest};
use async_trait::async_trait;
use log::{debug, info, warn};
use rand::Rng;
use std::time::Duration;

/// Simulates a payment gateway: waits a fixed delay, then approves with a
/// fixed probability. Stands in for a real backend behind
/// [`PaymentProvider`]; nothing leaves the process.
#[derive(Debug, Clone)]
pub struct SimulatedProvider {
    delay: Duration,
    approval_rate: f64,
}

impl SimulatedProvider {
    /// Settlement delay used by [`SimulatedProvider::new`]
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

    /// Approval probability used by [`SimulatedProvider::new`]
    pub const DEFAULT_APPROVAL_RATE: f64 = 0.9;

    pub fn new() -> Self {
        Self {
            delay: Self::DEFAULT_DELAY,
            approval_rate: Self::DEFAULT_APPROVAL_RATE,
        }
    }

    /// Override the settlement delay. Tests use `Duration::ZERO`.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Override the approval probability, clamped to `[0, 1]`. Tests pin
    /// this to `1.0` or `0.0` for deterministic outcomes.
    pub fn with_approval_rate(mut self, rate: f64) -> Self {
        self.approval_rate = rate.clamp(0.0, 1.0);
        self
    }
}

impl Default for SimulatedProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentProvider for SimulatedProvider {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn charge(&self, request: ChargeRequest) -> PaymentResult<Charge> {
        debug!(
            target: "cardform::gateway",
            "charging {} card ending in {}",
            request.network, request.card_last4
        );
        tokio::time::sleep(self.delay).await;

        if rand::rng().random_bool(self.approval_rate) {
            let charge = Charge::approved(&request);
            info!(target: "cardform::gateway", "charge {} approved", charge.id);
            Ok(charge)
        } else {
            warn!(
                target: "cardform::gateway",
                "charge declined for card ending in {}",
                request.card_last4
            );
            Err(PaymentError::CardDeclined(
                "Payment failed. Please check your details and try again.".into(),
            ))
        }
    }
}

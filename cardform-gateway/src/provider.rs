//! Payment provider trait

use crate::error::PaymentResult;
use crate::types::{Charge, ChargeRequest};
use async_trait::async_trait;

/// A payment attempt capability.
///
/// This is the seam between the form and whatever settles the money: the
/// bundled [`SimulatedProvider`](crate::SimulatedProvider) for local use, a
/// real gateway client in production. One operation only — a request either
/// settles into a [`Charge`] or fails with a typed error. There is no
/// cancellation and no retry policy; once started an attempt runs to
/// completion, and a failure is terminal until the user resubmits.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Provider name, for logs
    fn name(&self) -> &'static str;

    /// Attempt to charge
    async fn charge(&self, request: ChargeRequest) -> PaymentResult<Charge>;
}

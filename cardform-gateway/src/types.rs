//! Charge types and data structures

use crate::error::{PaymentError, PaymentResult};
use cardform_validation::{CardNetwork, CheckoutForm};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A request to charge a validated payment form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeRequest {
    /// Amount to charge
    pub amount: Decimal,
    /// Cardholder name, as entered (trimmed)
    pub cardholder: String,
    /// Last four digits of the card number
    pub card_last4: String,
    /// Detected card network
    pub network: CardNetwork,
    /// Description for logs / statements
    pub description: Option<String>,
}

impl ChargeRequest {
    /// Create a bare charge request
    pub fn new(amount: Decimal, cardholder: impl Into<String>) -> Self {
        Self {
            amount,
            cardholder: cardholder.into(),
            card_last4: String::new(),
            network: CardNetwork::Unknown,
            description: None,
        }
    }

    /// Record the card: keeps only the last four digits and the detected
    /// network. The full number is never stored on the request. Anything
    /// that is not an ASCII digit is ignored.
    pub fn card(mut self, raw: &str) -> Self {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        let tail = digits.len().saturating_sub(4);
        self.card_last4 = digits[tail..].to_string();
        self.network = CardNetwork::detect(&digits);
        self
    }

    /// With description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Build a request from an already-validated form. Re-parses the
    /// amount and reduces the card number to its last four digits.
    pub fn from_form(form: &CheckoutForm) -> PaymentResult<Self> {
        let amount: Decimal = form
            .amount
            .trim()
            .parse()
            .map_err(|_| PaymentError::InvalidAmount(form.amount.trim().to_string()))?;
        Ok(Self::new(amount, form.name.trim()).card(&form.card_number))
    }
}

/// Outcome of a settled payment attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeStatus {
    Succeeded,
    Failed,
}

impl ChargeStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// A settled payment attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Charge {
    /// Charge ID
    pub id: Uuid,
    /// Amount charged
    pub amount: Decimal,
    /// Outcome
    pub status: ChargeStatus,
    /// User-facing outcome line
    pub message: String,
    /// When the attempt settled
    pub created_at: DateTime<Utc>,
}

impl Charge {
    /// An approved charge with the standard receipt line, interpolating
    /// the amount at two decimal places and the cardholder name.
    pub fn approved(request: &ChargeRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount: request.amount,
            status: ChargeStatus::Succeeded,
            message: format!(
                "Payment of ${:.2} accepted. Thank you, {}!",
                request.amount, request.cardholder
            ),
            created_at: Utc::now(),
        }
    }
}

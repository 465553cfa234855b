//! Error types for payment attempts

use cardform_validation::ValidationErrors;
use thiserror::Error;

/// Result alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;

/// Payment error types
#[derive(Error, Debug)]
pub enum PaymentError {
    /// One or more form fields failed validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Card declined by the provider
    #[error("Card declined: {0}")]
    CardDeclined(String),

    /// Amount could not be interpreted
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Provider error
    #[error("Provider error: {0}")]
    Provider(String),
}

impl PaymentError {
    /// Generic user-facing line for this failure. Field-level detail stays
    /// in [`PaymentError::Validation`] for callers that highlight inputs.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Validation(_) => "Please correct the highlighted fields and try again.",
            Self::CardDeclined(_) => "Payment failed. Please check your details and try again.",
            Self::InvalidAmount(_) => "Please enter a valid amount.",
            Self::Provider(_) => "Something went wrong. Please try again.",
        }
    }

    /// True when resubmitting the same form could succeed (a decline or a
    /// provider hiccup, as opposed to input the user must change first).
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::CardDeclined(_) | Self::Provider(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardform_validation::{FieldKey, ValidationError};

    #[test]
    fn test_validation_errors_convert() {
        let errors =
            ValidationErrors::from(ValidationError::new(FieldKey::Cvv, "Security code is required"));
        let err = PaymentError::from(errors);
        assert!(matches!(err, PaymentError::Validation(_)));
        assert!(!err.is_retryable());
        assert_eq!(
            err.user_message(),
            "Please correct the highlighted fields and try again."
        );
    }

    #[test]
    fn test_decline_is_retryable() {
        let err = PaymentError::CardDeclined("simulated decline".into());
        assert!(err.is_retryable());
        assert!(err.to_string().starts_with("Card declined"));
    }
}

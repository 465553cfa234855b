// Form field identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the five payment form fields. The set is closed:
/// the form has exactly these inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    /// Cardholder name
    Name,
    /// Primary account number
    CardNumber,
    /// Expiry in MM/YY form
    Expiry,
    /// Card security code
    Cvv,
    /// Charge amount
    Amount,
}

impl FieldKey {
    /// Every form field, in form order. Validation errors are reported in
    /// this order.
    pub const ALL: [FieldKey; 5] = [
        FieldKey::Name,
        FieldKey::CardNumber,
        FieldKey::Expiry,
        FieldKey::Cvv,
        FieldKey::Amount,
    ];

    /// Wire / log name for the field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CardNumber => "card_number",
            Self::Expiry => "expiry",
            Self::Cvv => "cvv",
            Self::Amount => "amount",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

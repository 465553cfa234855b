// Card network classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Issuing network inferred from a card number's leading digits.
///
/// Classification is purely textual: it never consults validity, so a
/// number can classify as `Visa` and still fail the Luhn check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardNetwork {
    Visa,
    Mastercard,
    AmericanExpress,
    Discover,
    Jcb,
    DinersClub,
    Unknown,
}

impl CardNetwork {
    /// Classify a cleaned digit string. Works for any length; prefixes are
    /// tried in precedence order and the first match wins.
    pub fn detect(digits: &str) -> Self {
        if digits.starts_with('4') {
            return Self::Visa;
        }
        if in_two_digit_range(digits, 51, 55) || in_two_digit_range(digits, 22, 27) {
            return Self::Mastercard;
        }
        if digits.starts_with("34") || digits.starts_with("37") {
            return Self::AmericanExpress;
        }
        if digits.starts_with("6011") || digits.starts_with("65") {
            return Self::Discover;
        }
        if digits.starts_with("35") {
            return Self::Jcb;
        }
        if ["30", "36", "38", "39"].iter().any(|p| digits.starts_with(p)) {
            return Self::DinersClub;
        }
        Self::Unknown
    }

    /// Live-display variant: strips separators and reports nothing until at
    /// least 4 digits have been typed.
    pub fn detect_for_display(raw: &str) -> Option<Self> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if digits.len() < 4 {
            None
        } else {
            Some(Self::detect(&digits))
        }
    }

    /// Human-readable network label
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::AmericanExpress => "American Express",
            Self::Discover => "Discover",
            Self::Jcb => "JCB",
            Self::DinersClub => "Diners Club",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// True when the first two characters form a number in `[lo, hi]`.
fn in_two_digit_range(digits: &str, lo: u32, hi: u32) -> bool {
    digits
        .get(..2)
        .and_then(|p| p.parse::<u32>().ok())
        .is_some_and(|p| (lo..=hi).contains(&p))
}

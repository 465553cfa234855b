// Per-field validators
//
// Each validator applies its checks in a fixed order and stops at the first
// failure, so a field reports exactly one error at a time. All functions
// are pure; the expiry validator takes "today" as an explicit argument
// rather than reading the clock.

use crate::errors::ValidationError;
use crate::field::FieldKey;
use crate::luhn;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z .'-]{2,}$").unwrap());

// [0-9] rather than \d: the regex crate's \d matches Unicode digits, and
// these fields are ASCII-digit only.
static EXPIRY_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}$").unwrap());

static CVV_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3,4}$").unwrap());

/// Validates the cardholder name field
pub struct CardholderName;

impl CardholderName {
    pub const MIN_LEN: usize = 2;
    pub const MAX_LEN: usize = 50;

    pub fn validate(value: &str) -> Result<(), ValidationError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(
                ValidationError::new(FieldKey::Name, "Cardholder name is required")
                    .with_constraint("required"),
            );
        }
        let len = value.chars().count();
        if len < Self::MIN_LEN {
            return Err(ValidationError::new(
                FieldKey::Name,
                format!("Cardholder name must be at least {} characters", Self::MIN_LEN),
            )
            .with_constraint("minLength")
            .with_value(value.to_string()));
        }
        if len > Self::MAX_LEN {
            return Err(ValidationError::new(
                FieldKey::Name,
                format!("Cardholder name must be at most {} characters", Self::MAX_LEN),
            )
            .with_constraint("maxLength"));
        }
        if !NAME_REGEX.is_match(value) {
            return Err(ValidationError::new(
                FieldKey::Name,
                "Cardholder name may only contain letters, spaces, hyphens, apostrophes and periods",
            )
            .with_constraint("charset")
            .with_value(value.to_string()));
        }
        Ok(())
    }
}

/// Validates the card number field (separators stripped, digits only,
/// 13-19 long, Luhn-clean)
pub struct CardNumber;

impl CardNumber {
    pub const MIN_DIGITS: usize = 13;
    pub const MAX_DIGITS: usize = 19;

    pub fn validate(raw: &str) -> Result<(), ValidationError> {
        let clean = Self::strip_separators(raw);
        if clean.is_empty() {
            return Err(
                ValidationError::new(FieldKey::CardNumber, "Card number is required")
                    .with_constraint("required"),
            );
        }
        if !clean.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::new(
                FieldKey::CardNumber,
                "Card number must contain only digits",
            )
            .with_constraint("digits"));
        }
        if !(Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&clean.len()) {
            return Err(ValidationError::new(
                FieldKey::CardNumber,
                format!(
                    "Card number must be {} to {} digits",
                    Self::MIN_DIGITS,
                    Self::MAX_DIGITS
                ),
            )
            .with_constraint("length"));
        }
        if !luhn::checksum(&clean) {
            return Err(ValidationError::new(
                FieldKey::CardNumber,
                "Card number fails the checksum",
            )
            .with_constraint("luhn"));
        }
        Ok(())
    }

    /// Remove the separators users type into card numbers (whitespace and
    /// dashes). Anything else is left for the digits check to reject.
    pub fn strip_separators(raw: &str) -> String {
        raw.chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect()
    }
}

/// Validates the expiry field against an injected "today"
pub struct Expiry;

impl Expiry {
    /// Cards further out than this many years are rejected.
    pub const MAX_YEARS_AHEAD: i32 = 20;

    /// Two-digit years landing more than this many years in the past are
    /// assumed to mean the next century.
    const ROLLOVER_WINDOW: i32 = 10;

    pub fn validate(raw: &str, today: NaiveDate) -> Result<(), ValidationError> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(ValidationError::new(FieldKey::Expiry, "Expiry date is required")
                .with_constraint("required"));
        }
        if !EXPIRY_REGEX.is_match(value) {
            return Err(
                ValidationError::new(FieldKey::Expiry, "Expiry must be in MM/YY format")
                    .with_constraint("format")
                    .with_value(value.to_string()),
            );
        }

        // The regex pins the shape to ASCII `dd/dd`, so these parses only
        // fail on something the format check already rejected.
        let month: u32 = value[..2].parse().unwrap_or(0);
        let two_digit_year: i32 = value[3..5].parse().unwrap_or(-1);
        if !(1..=12).contains(&month) {
            return Err(ValidationError::new(FieldKey::Expiry, "Expiry month must be 01-12")
                .with_constraint("month")
                .with_value(value.to_string()));
        }

        // Expand YY against today's century. A year landing more than
        // ROLLOVER_WINDOW years in the past means the next century ("05"
        // typed in 2099 is 2105, not 2005). Exactly ROLLOVER_WINDOW years
        // back stays in the current century.
        let century = today.year() - today.year().rem_euclid(100);
        let mut year = century + two_digit_year;
        if year < today.year() - Self::ROLLOVER_WINDOW {
            year += 100;
        }

        let Some(expiry) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return Err(ValidationError::new(FieldKey::Expiry, "Expiry month must be 01-12")
                .with_constraint("month")
                .with_value(value.to_string()));
        };

        let current_month = today.with_day(1).unwrap_or(today);
        if expiry < current_month {
            return Err(ValidationError::new(FieldKey::Expiry, "Card has expired")
                .with_constraint("expired")
                .with_value(value.to_string()));
        }
        if expiry > add_years(today, Self::MAX_YEARS_AHEAD) {
            return Err(ValidationError::new(
                FieldKey::Expiry,
                format!("Expiry must be within {} years", Self::MAX_YEARS_AHEAD),
            )
            .with_constraint("maxFuture")
            .with_value(value.to_string()));
        }
        Ok(())
    }
}

/// Shift a date by whole years, clamping Feb 29 to Feb 28 when the target
/// year is not a leap year.
fn add_years(date: NaiveDate, years: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year() + years, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(date.year() + years, date.month(), 28))
        .unwrap_or(date)
}

/// Validates the card security code field
pub struct Cvv;

impl Cvv {
    pub fn validate(value: &str) -> Result<(), ValidationError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ValidationError::new(FieldKey::Cvv, "Security code is required")
                .with_constraint("required"));
        }
        if !CVV_REGEX.is_match(value) {
            return Err(
                ValidationError::new(FieldKey::Cvv, "Security code must be 3-4 digits")
                    .with_constraint("format")
                    .with_value(value.to_string()),
            );
        }
        Ok(())
    }
}

/// Validates the amount field
pub struct Amount;

impl Amount {
    /// Largest accepted charge
    pub fn max() -> Decimal {
        Decimal::new(99_999_999, 2) // 999999.99
    }

    /// Validate the textual amount as typed. The decimal-places rule reads
    /// the original text, not the parsed value, so "10.000" is rejected
    /// even though the value itself only carries two significant places.
    pub fn validate(raw: &str) -> Result<(), ValidationError> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(ValidationError::new(FieldKey::Amount, "Amount is required")
                .with_constraint("required"));
        }
        let Ok(amount) = value.parse::<Decimal>() else {
            return Err(ValidationError::new(FieldKey::Amount, "Amount must be a number")
                .with_constraint("numeric")
                .with_value(value.to_string()));
        };
        Self::check_value(amount)?;
        if let Some((_, fraction)) = value.split_once('.') {
            if fraction.len() > 2 {
                return Err(ValidationError::new(
                    FieldKey::Amount,
                    "Amount may have at most 2 decimal places",
                )
                .with_constraint("decimalPlaces")
                .with_value(value.to_string()));
            }
        }
        Ok(())
    }

    /// Validate a pre-parsed amount. Only the numeric rules apply here;
    /// there is no original text to run the decimal-places rule against.
    pub fn validate_decimal(amount: Decimal) -> Result<(), ValidationError> {
        Self::check_value(amount)
    }

    fn check_value(amount: Decimal) -> Result<(), ValidationError> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::new(FieldKey::Amount, "Amount must be positive")
                .with_constraint("positive")
                .with_value(amount.to_string()));
        }
        if amount > Self::max() {
            return Err(ValidationError::new(
                FieldKey::Amount,
                format!("Amount must not exceed {}", Self::max()),
            )
            .with_constraint("max")
            .with_value(amount.to_string()));
        }
        Ok(())
    }
}

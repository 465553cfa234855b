// Field rule registry
//
// A fixed mapping from FieldKey to its validator and (for the two masked
// inputs) its display formatter. Rules run in form order; each failing
// field contributes exactly one error.

use crate::errors::{ValidationError, ValidationErrors};
use crate::field::FieldKey;
use crate::format;
use crate::validators::{Amount, CardNumber, CardholderName, Cvv, Expiry};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

type ValidateFn = Arc<dyn Fn(&str, NaiveDate) -> Result<(), ValidationError> + Send + Sync>;
type FormatFn = fn(&str) -> String;

/// Raw payment form input, one string per field as typed by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub name: String,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
    pub amount: String,
}

impl CheckoutForm {
    /// The raw text for a given field
    pub fn value(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Name => &self.name,
            FieldKey::CardNumber => &self.card_number,
            FieldKey::Expiry => &self.expiry,
            FieldKey::Cvv => &self.cvv,
            FieldKey::Amount => &self.amount,
        }
    }
}

/// One field's validation rule and optional display formatter
#[derive(Clone)]
pub struct FieldRule {
    key: FieldKey,
    validate: ValidateFn,
    format: Option<FormatFn>,
}

impl FieldRule {
    /// Create a rule for a field. Validators that ignore the date just
    /// drop the second argument.
    pub fn new<F>(key: FieldKey, validate: F) -> Self
    where
        F: Fn(&str, NaiveDate) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        Self {
            key,
            validate: Arc::new(validate),
            format: None,
        }
    }

    /// Attach a display formatter
    pub fn with_formatter(mut self, format: FormatFn) -> Self {
        self.format = Some(format);
        self
    }

    pub fn key(&self) -> FieldKey {
        self.key
    }

    pub fn has_formatter(&self) -> bool {
        self.format.is_some()
    }

    /// Run the field's validator
    pub fn check(&self, value: &str, today: NaiveDate) -> Result<(), ValidationError> {
        (self.validate)(value, today)
    }
}

/// The fixed rule set for the payment form
#[derive(Clone)]
pub struct FormRules {
    rules: Vec<FieldRule>,
}

impl FormRules {
    /// Standard checkout rules: one entry per form field, formatters on
    /// the card number and expiry inputs.
    pub fn checkout() -> Self {
        Self {
            rules: vec![
                FieldRule::new(FieldKey::Name, |v, _| CardholderName::validate(v)),
                FieldRule::new(FieldKey::CardNumber, |v, _| CardNumber::validate(v))
                    .with_formatter(format::card_number),
                FieldRule::new(FieldKey::Expiry, Expiry::validate)
                    .with_formatter(format::expiry),
                FieldRule::new(FieldKey::Cvv, |v, _| Cvv::validate(v)),
                FieldRule::new(FieldKey::Amount, |v, _| Amount::validate(v)),
            ],
        }
    }

    /// Validate every field of the form. `today` anchors the expiry
    /// window and is injected so results are reproducible.
    ///
    /// Within a field the first failing rule wins; across fields all
    /// failures are collected, in form order. Summarizing them for the
    /// user is the caller's job.
    pub fn validate(&self, form: &CheckoutForm, today: NaiveDate) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        for rule in &self.rules {
            if let Err(error) = rule.check(form.value(rule.key), today) {
                errors.add(error);
            }
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Apply a field's display formatter. Returns `None` for fields that
    /// display exactly what was typed.
    pub fn format(&self, key: FieldKey, raw: &str) -> Option<String> {
        self.rule(key)?.format.map(|f| f(raw))
    }

    /// Look up the rule for a field
    pub fn rule(&self, key: FieldKey) -> Option<&FieldRule> {
        self.rules.iter().find(|r| r.key == key)
    }
}

impl Default for FormRules {
    fn default() -> Self {
        Self::checkout()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_checkout_has_a_rule_per_field() {
        let rules = FormRules::checkout();
        for key in FieldKey::ALL {
            assert!(rules.rule(key).is_some(), "no rule for {}", key);
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(FormRules::checkout().validate(&valid_form(), today()).is_ok());
    }

    #[test]
    fn test_one_error_per_failing_field_in_form_order() {
        let mut form = valid_form();
        form.cvv = "12a".into();
        form.expiry = "05/25".into();
        form.amount = "10.555".into();

        let errors = FormRules::checkout()
            .validate(&form, today())
            .unwrap_err();
        assert_eq!(
            errors.failed_fields(),
            vec![FieldKey::Expiry, FieldKey::Cvv, FieldKey::Amount]
        );
        assert_eq!(errors.for_field(FieldKey::Expiry).unwrap().constraint, "expired");
    }

    #[test]
    fn test_empty_form_fails_every_field() {
        let errors = FormRules::checkout()
            .validate(&CheckoutForm::default(), today())
            .unwrap_err();
        assert_eq!(errors.len(), 5);
        for error in &errors.errors {
            assert_eq!(error.constraint, "required");
        }
    }

    #[test]
    fn test_formatter_dispatch() {
        let rules = FormRules::checkout();
        assert!(rules.rule(FieldKey::CardNumber).unwrap().has_formatter());
        assert!(rules.rule(FieldKey::Expiry).unwrap().has_formatter());
        assert!(!rules.rule(FieldKey::Name).unwrap().has_formatter());
        assert_eq!(
            rules.format(FieldKey::CardNumber, "4111111111111111").as_deref(),
            Some("4111 1111 1111 1111")
        );
        assert_eq!(rules.format(FieldKey::Expiry, "0627").as_deref(), Some("06/27"));
        assert_eq!(rules.format(FieldKey::Name, "Jo"), None);
        assert_eq!(rules.format(FieldKey::Cvv, "123"), None);
        assert_eq!(rules.format(FieldKey::Amount, "10.5"), None);
    }
}

// Validation errors

use crate::field::FieldKey;
use std::fmt;

/// Validation error for a single field
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Field that failed validation
    pub field: FieldKey,

    /// Human-readable error message, caller-displayable, no markup
    pub message: String,

    /// Validation constraint that failed
    pub constraint: &'static str,

    /// Value that failed validation (optional; never the full card number)
    pub value: Option<String>,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(field: FieldKey, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            constraint: "custom",
            value: None,
        }
    }

    /// Set the constraint name
    pub fn with_constraint(mut self, constraint: &'static str) -> Self {
        self.constraint = constraint;
        self
    }

    /// Set the invalid value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors across form fields.
///
/// The engine itself reports at most one error per field (first failing
/// rule wins); this type is how callers see which fields failed.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Create a new validation errors collection
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Add an error
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Get the error for a specific field, if that field failed
    pub fn for_field(&self, field: FieldKey) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// Fields that failed, in report order
    pub fn failed_fields(&self) -> Vec<FieldKey> {
        self.errors.iter().map(|e| e.field).collect()
    }

    /// Convert to JSON representation
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "errors": self.errors.iter().map(|e| {
                serde_json::json!({
                    "field": e.field.as_str(),
                    "message": e.message,
                    "constraint": e.constraint,
                    "value": e.value,
                })
            }).collect::<Vec<_>>()
        })
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::new(errors)
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self::new(vec![error])
    }
}

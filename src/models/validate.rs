//! Structural validation support for domain models.
//!
//! Models that are constructed from raw service JSON run a structural pass
//! before decoding: required fields are checked for presence and JSON type
//! in one sweep, and every failure is collected so a caller can fix all
//! problems at once instead of replaying the request per field.

use std::fmt;

use thiserror::Error;

/// A single failed check on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Path of the failing field (e.g. `items[2].quantity`).
    pub field: String,
    /// What was wrong with it.
    pub message: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Error raised when a domain model fails structural validation.
///
/// Carries **every** failing field, not just the first.
///
/// # Example
///
/// ```rust
/// use shipstation_api::models::{Order, ValidationError};
/// use serde_json::json;
///
/// let error: ValidationError = Order::from_value(json!({"orderId": 1})).unwrap_err();
/// assert!(error.violations.len() > 1);
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("validation failed: {}", format_violations(.violations))]
pub struct ValidationError {
    /// All failing fields.
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Creates a validation error with a single violation.
    pub(crate) fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            violations: vec![FieldViolation {
                field: field.into(),
                message: message.into(),
            }],
        }
    }
}

fn format_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// The JSON type a required field must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum JsonKind {
    String,
    Number,
    Object,
    Array,
}

impl JsonKind {
    pub(crate) const fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Object => "object",
            Self::Array => "array",
        }
    }

    pub(crate) fn matches(self, value: &serde_json::Value) -> bool {
        matches!(
            (self, value),
            (Self::String, serde_json::Value::String(_))
                | (Self::Number, serde_json::Value::Number(_))
                | (Self::Object, serde_json::Value::Object(_))
                | (Self::Array, serde_json::Value::Array(_))
        )
    }
}

/// Returns a human-readable name for the JSON type of `value`.
pub(crate) fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Checks the required fields of a JSON object in one pass, appending a
/// violation for every missing or mistyped field.
pub(crate) fn check_required(
    object: &serde_json::Map<String, serde_json::Value>,
    required: &[(&str, JsonKind)],
    prefix: &str,
    violations: &mut Vec<FieldViolation>,
) {
    for (field, kind) in required {
        let path = if prefix.is_empty() {
            (*field).to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match object.get(*field) {
            None | Some(serde_json::Value::Null) => violations.push(FieldViolation {
                field: path,
                message: "missing required field".to_string(),
            }),
            Some(value) if !kind.matches(value) => violations.push(FieldViolation {
                field: path,
                message: format!("expected {}, got {}", kind.name(), kind_of(value)),
            }),
            Some(_) => {}
        }
    }
}

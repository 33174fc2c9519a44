//! Domain error model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Field-keyed validation messages (empty = valid).
///
/// At most one message is kept per field; a later message for the same field
/// replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(())` when empty, otherwise a `DomainError::Validation` carrying `self`.
    pub fn into_result(self) -> DomainResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(self))
        }
    }
}

impl core::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Domain-level error.
///
/// Every variant is an expected, user-correctable outcome. Operations that
/// fail leave the store untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more fields failed validation.
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    /// A requested record was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// A lookup was attempted with blank input.
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A query argument could not be understood (e.g. unknown sort field).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl DomainError {
    /// Single-field validation failure.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field, message);
        Self::Validation(errors)
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Field errors carried by a `Validation` failure, if that is what this is.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            DomainError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_errors_are_ok() {
        assert_eq!(FieldErrors::new().into_result(), Ok(()));
    }

    #[test]
    fn non_empty_field_errors_become_validation_error() {
        let mut errors = FieldErrors::new();
        errors.insert("name", "Product name is required");
        errors.insert("price", "Price must be greater than 0");

        let err = errors.clone().into_result().unwrap_err();
        assert_eq!(err.field_errors(), Some(&errors));
        assert_eq!(
            err.to_string(),
            "validation failed: name: Product name is required; price: Price must be greater than 0"
        );
    }

    #[test]
    fn later_message_replaces_earlier_for_same_field() {
        let mut errors = FieldErrors::new();
        errors.insert("sku", "SKU is required");
        errors.insert("sku", "SKU already exists");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("sku"), Some("SKU already exists"));
    }

    #[test]
    fn fields_are_reported_in_stable_order() {
        let mut errors = FieldErrors::new();
        errors.insert("supplier", "Supplier is required");
        errors.insert("category", "Category is required");

        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["category", "supplier"]);
        assert!(errors.contains("supplier"));
        assert!(!errors.contains("name"));
    }
}

use std::collections::BTreeMap;

use serde::Serialize;
use validator::{ValidationError, ValidationErrors};

/// A single rejected input field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

/// Rejected fields of one submission, keyed by field name.
///
/// Serializes as `{"field": ["message", ...]}` so it can be handed back to a
/// form renderer as is.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of rejected fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldValidationError> + '_ {
        self.0.iter().flat_map(|(field, messages)| {
            messages.iter().map(move |message| FieldValidationError {
                field: field.to_owned(),
                message: message.to_owned(),
            })
        })
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }
}

fn message(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| format!("Invalid value ({})", error.code))
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(value: &ValidationErrors) -> Self {
        let mut errors = FieldErrors::default();

        for (field, field_errors) in value.field_errors() {
            for error in field_errors.iter() {
                errors.push(field.to_string(), message(error));
            }
        }

        errors
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(value: ValidationErrors) -> Self {
        FieldErrors::from(&value)
    }
}

impl FromIterator<FieldValidationError> for FieldErrors {
    fn from_iter<T: IntoIterator<Item = FieldValidationError>>(iter: T) -> Self {
        let mut errors = FieldErrors::default();
        for error in iter {
            errors.push(error.field, error.message);
        }

        errors
    }
}

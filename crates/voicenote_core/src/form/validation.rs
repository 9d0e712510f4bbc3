//! Declarative field validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    Required,
    MaxLength,
}

/// Per-field validation failure shown inline next to the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: String,
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for FieldError {}

/// Rules registered for one text field.
///
/// `required` rejects only the empty string; whitespace counts as content.
/// Lengths are counted in Unicode scalar values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldRules {
    required: Option<String>,
    max_length: Option<(usize, String)>,
}

impl FieldRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.required = Some(message.into());
        self
    }

    pub fn max_length(mut self, limit: usize, message: impl Into<String>) -> Self {
        self.max_length = Some((limit, message.into()));
        self
    }

    /// Checks `value`, reporting the first failing rule.
    pub fn validate(&self, value: &str) -> Result<(), FieldError> {
        if let Some(message) = &self.required {
            if value.is_empty() {
                return Err(FieldError {
                    kind: FieldErrorKind::Required,
                    message: message.clone(),
                });
            }
        }
        if let Some((limit, message)) = &self.max_length {
            if char_count(value) > *limit {
                return Err(FieldError {
                    kind: FieldErrorKind::MaxLength,
                    message: message.clone(),
                });
            }
        }
        Ok(())
    }
}

pub fn char_count(value: &str) -> usize {
    value.chars().count()
}

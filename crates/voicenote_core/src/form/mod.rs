//! Note entry forms.
//!
//! # Responsibility
//! - Validate user-entered note content against declarative field rules.
//! - Hand accepted content to the note collection.
//!
//! # Invariants
//! - Validation failures are recorded on the form, never returned as `Err`.
//! - A rejected submit never mutates the collection.

pub mod compose;
pub mod editor;
pub mod validation;

pub use compose::ComposeForm;
pub use editor::NoteEditor;
pub use validation::{FieldError, FieldErrorKind, FieldRules};

/// Message for an empty content field.
pub const CONTENT_REQUIRED_MESSAGE: &str = "Content is required";
/// Message for compose content over the length ceiling.
pub const CONTENT_TOO_LONG_MESSAGE: &str = "Content cannot exceed 3000 characters";

/// Result of a form submit that passed or failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome<T> {
    Accepted(T),
    Rejected(FieldError),
}

impl<T> SubmitOutcome<T> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn rejection(&self) -> Option<&FieldError> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(err) => Some(err),
        }
    }
}

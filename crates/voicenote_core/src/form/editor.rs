//! Per-note edit form.

use super::validation::{FieldError, FieldRules};
use super::{SubmitOutcome, CONTENT_REQUIRED_MESSAGE};
use crate::clock::Clock;
use crate::model::note::Note;
use crate::repo::note_repo::NoteRepository;
use crate::service::note_service::{NoteService, NoteServiceError};

/// Edit form bound to one existing note.
///
/// Only emptiness is checked here; edits are not held to the compose length
/// ceiling.
#[derive(Debug, Clone)]
pub struct NoteEditor {
    id: String,
    rules: FieldRules,
    content: String,
    error: Option<FieldError>,
}

impl NoteEditor {
    /// Opens an editor pre-filled with the note's content.
    pub fn for_note(note: &Note) -> Self {
        Self {
            id: note.id.clone(),
            rules: FieldRules::new().required(CONTENT_REQUIRED_MESSAGE),
            content: note.content.clone(),
            error: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn error(&self) -> Option<&FieldError> {
        self.error.as_ref()
    }

    /// Validates and writes the edited content to the collection.
    pub fn submit<R: NoteRepository, C: Clock>(
        &mut self,
        notes: &mut NoteService<R, C>,
    ) -> Result<SubmitOutcome<()>, NoteServiceError> {
        if let Err(err) = self.rules.validate(&self.content) {
            self.error = Some(err.clone());
            return Ok(SubmitOutcome::Rejected(err));
        }
        notes.update(&self.id, self.content.as_str())?;
        self.error = None;
        Ok(SubmitOutcome::Accepted(()))
    }

    /// Deletes the note immediately; there is no confirmation step.
    pub fn delete<R: NoteRepository, C: Clock>(
        self,
        notes: &mut NoteService<R, C>,
    ) -> Result<(), NoteServiceError> {
        notes.delete(&self.id)
    }
}

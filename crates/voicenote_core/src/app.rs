//! Root composition of the note-taking surface.
//!
//! # Responsibility
//! - Fail fast when the host has no speech recognition.
//! - Own the collection, dictation bridge and compose form, and pass them
//!   to each other explicitly.

use crate::clock::Clock;
use crate::dictation::{DictationBridge, DictationError, SpeechCapability, StopNotice};
use crate::form::{ComposeForm, NoteEditor, SubmitOutcome};
use crate::model::note::Note;
use crate::repo::note_repo::NoteRepository;
use crate::service::note_service::{NoteService, NoteServiceError};
use log::warn;

/// Static message replacing the whole surface on unsupported hosts.
pub const UNSUPPORTED_NOTICE: &str = "Browser doesn't support speech recognition.";

/// What the host renders after mounting.
pub enum Surface<S: SpeechCapability, R: NoteRepository, C: Clock> {
    Unsupported(&'static str),
    Interactive(Box<NotesApp<S, R, C>>),
}

impl<S: SpeechCapability, R: NoteRepository, C: Clock> Surface<S, R, C> {
    pub fn into_app(self) -> Option<NotesApp<S, R, C>> {
        match self {
            Self::Unsupported(_) => None,
            Self::Interactive(app) => Some(*app),
        }
    }
}

/// Mounts the surface: support check first, then hydration.
pub fn mount<S, R, C>(capability: S, repo: R, clock: C) -> Result<Surface<S, R, C>, NoteServiceError>
where
    S: SpeechCapability,
    R: NoteRepository,
    C: Clock,
{
    let bridge = match DictationBridge::new(capability) {
        Ok(bridge) => bridge,
        Err(_) => {
            warn!("event=app_mount module=app status=unsupported");
            return Ok(Surface::Unsupported(UNSUPPORTED_NOTICE));
        }
    };
    let notes = NoteService::load(repo, clock)?;
    Ok(Surface::Interactive(Box::new(NotesApp {
        notes,
        bridge,
        compose: ComposeForm::new(),
    })))
}

/// Interactive note-taking surface.
pub struct NotesApp<S: SpeechCapability, R: NoteRepository, C: Clock> {
    notes: NoteService<R, C>,
    bridge: DictationBridge<S>,
    compose: ComposeForm,
}

impl<S: SpeechCapability, R: NoteRepository, C: Clock> NotesApp<S, R, C> {
    pub fn notes(&self) -> &NoteService<R, C> {
        &self.notes
    }

    pub fn bridge(&self) -> &DictationBridge<S> {
        &self.bridge
    }

    pub fn compose(&self) -> &ComposeForm {
        &self.compose
    }

    pub fn compose_mut(&mut self) -> &mut ComposeForm {
        &mut self.compose
    }

    pub fn is_recording(&self) -> bool {
        self.bridge.is_recording()
    }

    /// Toggle button: starts when idle, stops when recording.
    pub fn toggle_recording(&mut self) -> Result<Option<StopNotice>, DictationError> {
        if self.bridge.is_recording() {
            self.stop_recording().map(Some)
        } else {
            self.start_recording().map(|()| None)
        }
    }

    pub fn start_recording(&mut self) -> Result<(), DictationError> {
        self.compose.start_recording(&mut self.bridge)
    }

    pub fn stop_recording(&mut self) -> Result<StopNotice, DictationError> {
        let now_ms = self.notes.clock().now_millis();
        self.compose.stop_recording(&mut self.bridge, now_ms)
    }

    /// Host hook for each engine transcript event.
    pub fn receive_transcript(&mut self, transcript: impl Into<String>) {
        self.bridge.publish_transcript(transcript);
        self.compose.sync_transcript();
    }

    pub fn submit_compose(&mut self) -> Result<SubmitOutcome<Note>, NoteServiceError> {
        self.compose.submit(&mut self.notes, &mut self.bridge)
    }

    pub fn notice_visible(&self) -> bool {
        self.compose.notice_visible(self.notes.clock().now_millis())
    }

    /// One editor per note, newest first.
    pub fn editors(&self) -> Vec<NoteEditor> {
        self.notes
            .display_order()
            .into_iter()
            .map(NoteEditor::for_note)
            .collect()
    }

    pub fn submit_editor(
        &mut self,
        editor: &mut NoteEditor,
    ) -> Result<SubmitOutcome<()>, NoteServiceError> {
        editor.submit(&mut self.notes)
    }

    pub fn delete_note(&mut self, editor: NoteEditor) -> Result<(), NoteServiceError> {
        editor.delete(&mut self.notes)
    }
}

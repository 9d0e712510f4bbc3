//! Compose form for new notes, with dictation input.

use super::validation::{char_count, FieldError, FieldRules};
use super::{SubmitOutcome, CONTENT_REQUIRED_MESSAGE, CONTENT_TOO_LONG_MESSAGE};
use crate::clock::Clock;
use crate::dictation::{
    DictationBridge, DictationError, SpeechCapability, StopNotice, TranscriptSubscription,
};
use crate::model::note::{Note, NOTE_CONTENT_MAX_CHARS};
use crate::repo::note_repo::NoteRepository;
use crate::service::note_service::{NoteService, NoteServiceError};
use log::debug;

/// Input surface for creating a note.
///
/// While recording, the form holds a transcript subscription and every
/// transcript update overwrites `content`.
#[derive(Debug)]
pub struct ComposeForm {
    rules: FieldRules,
    content: String,
    error: Option<FieldError>,
    subscription: Option<TranscriptSubscription>,
    notice: Option<StopNotice>,
}

impl Default for ComposeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ComposeForm {
    pub fn new() -> Self {
        Self {
            rules: FieldRules::new()
                .required(CONTENT_REQUIRED_MESSAGE)
                .max_length(NOTE_CONTENT_MAX_CHARS, CONTENT_TOO_LONG_MESSAGE),
            content: String::new(),
            error: None,
            subscription: None,
            notice: None,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Typed input. Overwritten by the next transcript update while recording.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn error(&self) -> Option<&FieldError> {
        self.error.as_ref()
    }

    /// `(current, limit)` for the character counter.
    pub fn character_count(&self) -> (usize, usize) {
        (char_count(&self.content), NOTE_CONTENT_MAX_CHARS)
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Starts dictation and takes over the content field.
    pub fn start_recording<S: SpeechCapability>(
        &mut self,
        bridge: &mut DictationBridge<S>,
    ) -> Result<(), DictationError> {
        bridge.start()?;
        let mut subscription = bridge.subscribe();
        self.content = subscription.current();
        self.subscription = Some(subscription);
        Ok(())
    }

    /// Applies the latest transcript, if it changed. Returns whether it did.
    pub fn sync_transcript(&mut self) -> bool {
        let Some(subscription) = self.subscription.as_mut() else {
            return false;
        };
        match subscription.latest() {
            Some(transcript) => {
                self.content = transcript;
                true
            }
            None => false,
        }
    }

    /// Stops dictation, unsubscribes, and shows the stop notice.
    ///
    /// A previous notice is replaced, restarting its timer.
    pub fn stop_recording<S: SpeechCapability>(
        &mut self,
        bridge: &mut DictationBridge<S>,
        now_ms: i64,
    ) -> Result<StopNotice, DictationError> {
        self.sync_transcript();
        let notice = bridge.stop(now_ms)?;
        self.subscription = None;
        self.notice = Some(notice);
        Ok(notice)
    }

    /// The stop notice, if one is showing at `now_ms`.
    pub fn notice_at(&self, now_ms: i64) -> Option<&StopNotice> {
        self.notice
            .as_ref()
            .filter(|notice| notice.is_visible_at(now_ms))
    }

    pub fn notice_visible(&self, now_ms: i64) -> bool {
        self.notice_at(now_ms).is_some()
    }

    /// Validates and, on success, adds the note and clears the form.
    ///
    /// Clearing resets the field, the dictation transcript and the notice.
    pub fn submit<R, C, S>(
        &mut self,
        notes: &mut NoteService<R, C>,
        bridge: &mut DictationBridge<S>,
    ) -> Result<SubmitOutcome<Note>, NoteServiceError>
    where
        R: NoteRepository,
        C: Clock,
        S: SpeechCapability,
    {
        self.sync_transcript();
        if let Err(err) = self.rules.validate(&self.content) {
            debug!(
                "event=compose_submit module=form status=rejected kind={:?}",
                err.kind
            );
            self.error = Some(err.clone());
            return Ok(SubmitOutcome::Rejected(err));
        }

        let note = notes.add(self.content.as_str())?;
        self.error = None;
        self.content.clear();
        bridge.reset_transcript();
        if let Some(subscription) = self.subscription.as_mut() {
            // The reset is already reflected in the cleared field.
            subscription.current();
        }
        self.notice = None;
        Ok(SubmitOutcome::Accepted(note))
    }
}

//! Recording state machine and transcript publication.

use super::{DictationError, ListenOptions, SpeechCapability};
use log::{debug, info};
use tokio::sync::watch;

/// Banner text shown after recording stops.
pub const STOP_NOTICE_MESSAGE: &str =
    "You have stopped recording. Don't forget to save your note!";
/// How long the stop notice stays visible.
pub const STOP_NOTICE_TTL_MS: i64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictationState {
    Idle,
    Recording,
}

/// One-shot "recording stopped" notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopNotice {
    shown_at_ms: i64,
}

impl StopNotice {
    pub fn shown_at(now_ms: i64) -> Self {
        Self { shown_at_ms: now_ms }
    }

    pub fn shown_at_ms(&self) -> i64 {
        self.shown_at_ms
    }

    pub fn message(&self) -> &'static str {
        STOP_NOTICE_MESSAGE
    }

    /// Visible for `STOP_NOTICE_TTL_MS` after it was shown.
    pub fn is_visible_at(&self, now_ms: i64) -> bool {
        now_ms.saturating_sub(self.shown_at_ms) < STOP_NOTICE_TTL_MS
    }
}

/// Receiving end of the live transcript.
///
/// Dropping it unsubscribes.
#[derive(Debug)]
pub struct TranscriptSubscription {
    rx: watch::Receiver<String>,
}

impl TranscriptSubscription {
    /// Returns the transcript if it changed since the last read.
    pub fn latest(&mut self) -> Option<String> {
        match self.rx.has_changed() {
            Ok(true) => Some(self.rx.borrow_and_update().clone()),
            _ => None,
        }
    }

    /// Returns the current transcript and marks it as seen.
    pub fn current(&mut self) -> String {
        self.rx.borrow_and_update().clone()
    }
}

/// Wraps a speech engine with an idle/recording state machine.
pub struct DictationBridge<S: SpeechCapability> {
    capability: S,
    state: DictationState,
    transcript: watch::Sender<String>,
}

impl<S: SpeechCapability> DictationBridge<S> {
    /// Fails with `Unsupported` when the host lacks speech recognition.
    pub fn new(capability: S) -> Result<Self, DictationError> {
        if !capability.is_supported() {
            return Err(DictationError::Unsupported);
        }
        let (transcript, _) = watch::channel(String::new());
        Ok(Self {
            capability,
            state: DictationState::Idle,
            transcript,
        })
    }

    pub fn state(&self) -> DictationState {
        self.state
    }

    pub fn is_recording(&self) -> bool {
        self.state == DictationState::Recording
    }

    /// Begins continuous transcription.
    ///
    /// Calling it while already recording re-issues the listen request.
    pub fn start(&mut self) -> Result<(), DictationError> {
        self.capability
            .start_listening(ListenOptions { continuous: true })?;
        self.state = DictationState::Recording;
        info!("event=dictation_start module=dictation status=ok");
        Ok(())
    }

    /// Stops transcription and raises the stop notice.
    pub fn stop(&mut self, now_ms: i64) -> Result<StopNotice, DictationError> {
        self.capability.stop_listening()?;
        self.state = DictationState::Idle;
        info!(
            "event=dictation_stop module=dictation status=ok transcript_chars={}",
            self.transcript.borrow().chars().count()
        );
        Ok(StopNotice::shown_at(now_ms))
    }

    /// Publishes the engine's latest cumulative transcript.
    ///
    /// Updates arriving while idle are dropped.
    pub fn publish_transcript(&mut self, text: impl Into<String>) {
        if !self.is_recording() {
            debug!("event=transcript_update module=dictation status=dropped reason=idle");
            return;
        }
        let text = text.into();
        debug!(
            "event=transcript_update module=dictation status=ok chars={}",
            text.chars().count()
        );
        self.transcript.send_replace(text);
    }

    pub fn transcript(&self) -> String {
        self.transcript.borrow().clone()
    }

    /// Clears the transcript in the engine and in the published value.
    pub fn reset_transcript(&mut self) {
        self.capability.reset_transcript();
        self.transcript.send_replace(String::new());
    }

    /// Subscribes to transcript updates published after this call.
    pub fn subscribe(&self) -> TranscriptSubscription {
        TranscriptSubscription {
            rx: self.transcript.subscribe(),
        }
    }

    pub fn capability(&self) -> &S {
        &self.capability
    }
}

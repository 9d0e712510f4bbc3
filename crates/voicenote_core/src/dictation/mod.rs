//! Speech-to-text integration.
//!
//! # Responsibility
//! - Define the capability contract a host speech engine must satisfy.
//! - Bridge engine transcript events to subscribers (the compose form).
//!
//! # Invariants
//! - Only one recording session exists at a time.
//! - The transcript is cumulative; each update replaces the previous value.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod bridge;

pub use bridge::{
    DictationBridge, DictationState, StopNotice, TranscriptSubscription, STOP_NOTICE_MESSAGE,
    STOP_NOTICE_TTL_MS,
};

/// Options passed to the engine when listening starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenOptions {
    /// Keep transcribing until explicitly stopped.
    pub continuous: bool,
}

/// Host-provided speech recognition engine.
///
/// The engine delivers transcript text by having its host call
/// [`DictationBridge::publish_transcript`] for every update.
pub trait SpeechCapability {
    /// Whether the host can do speech recognition at all.
    fn is_supported(&self) -> bool;
    fn start_listening(&mut self, options: ListenOptions) -> Result<(), DictationError>;
    fn stop_listening(&mut self) -> Result<(), DictationError>;
    /// Clears the engine's cumulative transcript so later updates carry only
    /// new speech.
    fn reset_transcript(&mut self);
}

impl<T: SpeechCapability + ?Sized> SpeechCapability for Box<T> {
    fn is_supported(&self) -> bool {
        (**self).is_supported()
    }

    fn start_listening(&mut self, options: ListenOptions) -> Result<(), DictationError> {
        (**self).start_listening(options)
    }

    fn stop_listening(&mut self) -> Result<(), DictationError> {
        (**self).stop_listening()
    }

    fn reset_transcript(&mut self) {
        (**self).reset_transcript()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictationError {
    /// Host has no speech recognition.
    Unsupported,
    /// Engine reported a failure.
    Capability(String),
}

impl Display for DictationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported => write!(f, "speech recognition is not supported"),
            Self::Capability(message) => write!(f, "speech recognition failed: {message}"),
        }
    }
}

impl Error for DictationError {}

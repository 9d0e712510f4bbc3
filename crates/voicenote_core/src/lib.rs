//! Core domain logic for VoiceNote.
//! Notes are typed or dictated, validated, and kept as one JSON collection in
//! a local key-value store.

pub mod app;
pub mod clock;
pub mod config;
pub mod db;
pub mod dictation;
pub mod form;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use app::{mount, NotesApp, Surface, UNSUPPORTED_NOTICE};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, CoreConfig};
pub use dictation::{
    DictationBridge, DictationError, DictationState, ListenOptions, SpeechCapability, StopNotice,
    STOP_NOTICE_MESSAGE, STOP_NOTICE_TTL_MS,
};
pub use form::{
    ComposeForm, FieldError, FieldErrorKind, FieldRules, NoteEditor, SubmitOutcome,
    CONTENT_REQUIRED_MESSAGE, CONTENT_TOO_LONG_MESSAGE,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{display_order, Note, NOTE_CONTENT_MAX_CHARS};
pub use repo::note_repo::{
    KeyValueNoteRepository, NoteRepository, RepoError, RepoResult, NOTES_STORAGE_KEY,
};
pub use service::note_service::{NoteService, NoteServiceError};
pub use store::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StoreError, StoreResult};

/// Minimal health-check API.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

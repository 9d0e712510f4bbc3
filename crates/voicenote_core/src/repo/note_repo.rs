//! Note collection persistence over a key-value store.
//!
//! # Responsibility
//! - Read the whole note collection from the fixed `notes` key.
//! - Write the whole collection back on every commit.
//!
//! # Invariants
//! - Stored value is a JSON array of `{id, content}` objects.
//! - Missing, non-array or empty stored values load as an empty collection.
//! - Array elements that are not note-shaped are dropped one by one.
//! - Write failures are returned to the caller, never swallowed.

use crate::model::note::Note;
use crate::store::{KeyValueStore, StoreError};
use log::{debug, warn};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the serialized note collection.
pub const NOTES_STORAGE_KEY: &str = "notes";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence failure for the note collection.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    Serialize(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize notes: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Whole-collection load/save contract.
pub trait NoteRepository {
    fn load(&self) -> RepoResult<Vec<Note>>;
    fn save(&mut self, notes: &[Note]) -> RepoResult<()>;
}

/// Persistence adapter writing the collection as one JSON entry.
#[derive(Debug)]
pub struct KeyValueNoteRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> KeyValueNoteRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read access to the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: KeyValueStore> NoteRepository for KeyValueNoteRepository<S> {
    fn load(&self) -> RepoResult<Vec<Note>> {
        let Some(raw) = self.store.get_item(NOTES_STORAGE_KEY)? else {
            debug!("event=notes_load module=repo status=ok source=absent count=0");
            return Ok(Vec::new());
        };

        match parse_stored_notes(&raw) {
            Ok(parsed) => {
                if parsed.dropped > 0 {
                    warn!(
                        "event=notes_load module=repo status=partial dropped={} kept={}",
                        parsed.dropped,
                        parsed.notes.len()
                    );
                }
                debug!(
                    "event=notes_load module=repo status=ok source=store count={}",
                    parsed.notes.len()
                );
                Ok(parsed.notes)
            }
            Err(reason) => {
                warn!(
                    "event=notes_load module=repo status=discarded reason={reason} bytes={}",
                    raw.len()
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&mut self, notes: &[Note]) -> RepoResult<()> {
        let serialized = serde_json::to_string(notes).map_err(RepoError::Serialize)?;
        self.store.set_item(NOTES_STORAGE_KEY, &serialized)?;
        debug!(
            "event=notes_save module=repo status=ok count={} bytes={}",
            notes.len(),
            serialized.len()
        );
        Ok(())
    }
}

/// Notes recovered from a stored array, plus how many elements were unusable.
#[derive(Debug)]
struct ParsedNotes {
    notes: Vec<Note>,
    dropped: usize,
}

/// Parses a stored collection element by element.
///
/// Rejects the whole value only when it is not a non-empty JSON array.
/// Elements that are not note-shaped are dropped individually; integer ids
/// are accepted and kept as their decimal string.
fn parse_stored_notes(raw: &str) -> Result<ParsedNotes, &'static str> {
    let value: Value = serde_json::from_str(raw).map_err(|_| "invalid_json")?;
    let items = match value {
        Value::Array(items) if items.is_empty() => return Err("empty_array"),
        Value::Array(items) => items,
        _ => return Err("not_an_array"),
    };

    let total = items.len();
    let notes: Vec<Note> = items.into_iter().filter_map(note_from_value).collect();
    Ok(ParsedNotes {
        dropped: total - notes.len(),
        notes,
    })
}

fn note_from_value(value: Value) -> Option<Note> {
    let Value::Object(mut fields) = value else {
        return None;
    };
    let id = match fields.remove("id")? {
        Value::String(id) => id,
        Value::Number(number) if number.is_i64() || number.is_u64() => number.to_string(),
        _ => return None,
    };
    let Value::String(content) = fields.remove("content")? else {
        return None;
    };
    Some(Note { id, content })
}

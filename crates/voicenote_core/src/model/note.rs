//! Note entity and display ordering.

use serde::{Deserialize, Serialize};

/// Maximum content length accepted when composing a note.
pub const NOTE_CONTENT_MAX_CHARS: usize = 3000;

/// A saved text note.
///
/// Serialized as `{"id": "...", "content": "..."}`; the persisted layout has no
/// other fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Creation timestamp in epoch milliseconds, as a decimal string.
    pub id: String,
    pub content: String,
}

impl Note {
    /// Creates a note whose id is derived from `created_at_ms`.
    pub fn new(created_at_ms: i64, content: impl Into<String>) -> Self {
        Self {
            id: created_at_ms.to_string(),
            content: content.into(),
        }
    }

    /// Numeric sort key parsed back from the id.
    ///
    /// Returns `None` for ids that are not decimal integers (e.g. hand-edited
    /// storage).
    pub fn sort_key(&self) -> Option<i64> {
        self.id.trim().parse::<i64>().ok()
    }
}

/// Returns `notes` ordered newest first by numeric id.
///
/// Ids that do not parse sort after every numeric id; ties keep insertion
/// order.
pub fn display_order(notes: &[Note]) -> Vec<&Note> {
    let mut ordered: Vec<&Note> = notes.iter().collect();
    // Stable sort keeps insertion order among equal keys.
    ordered.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));
    ordered
}

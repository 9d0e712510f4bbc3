//! Local key-value store abstraction.
//!
//! # Responsibility
//! - Define the `get_item`/`set_item` contract the note persistence adapter
//!   writes through.
//! - Provide an in-memory store and a SQLite-backed store.
//!
//! # Invariants
//! - Values are opaque text; stores never interpret them.
//! - `set_item` replaces any previous value under the same key.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryKeyValueStore;
pub use sqlite::SqliteKeyValueStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport-level failure of a key-value store.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// Store refused the write, e.g. quota exhausted.
    WriteRejected(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::WriteRejected(message) => write!(f, "store rejected write: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::WriteRejected(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Textual key-value persistence, shaped after browser local storage.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` when absent.
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;
    /// Writes `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set_item(key, value)
    }
}

//! Persistence adapters for the note collection.
//!
//! # Responsibility
//! - Isolate the stored text layout from the collection manager.
//!
//! # Invariants
//! - Adapters hold no copy of the collection between calls.

pub mod note_repo;

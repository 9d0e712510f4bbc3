//! Domain model for saved notes.
//!
//! # Invariants
//! - A note id is the decimal string of its creation time in epoch ms.
//! - Display order is derived on read and never stored.

pub mod note;

//! Core use-case services.
//!
//! # Responsibility
//! - Keep form and CLI layers decoupled from storage details.

pub mod note_service;

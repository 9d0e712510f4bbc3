//! Note collection manager.
//!
//! # Responsibility
//! - Own the authoritative in-memory note list.
//! - Apply add/update/delete and commit each result to the repository.
//!
//! # Invariants
//! - The list is hydrated once, at construction.
//! - Every mutation performs exactly one `save` of the full next list.
//! - A failed `save` leaves the in-memory list unchanged.
//! - Unknown ids are not errors; update/delete on them still commit.

use crate::clock::Clock;
use crate::model::note::{display_order, Note};
use crate::repo::note_repo::{NoteRepository, RepoError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note collection use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Loading or committing the collection failed.
    Repo(RepoError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Explicitly-owned state container for the note collection.
pub struct NoteService<R: NoteRepository, C: Clock> {
    repo: R,
    clock: C,
    notes: Vec<Note>,
}

impl<R: NoteRepository, C: Clock> NoteService<R, C> {
    /// Hydrates the collection from `repo`.
    pub fn load(repo: R, clock: C) -> Result<Self, NoteServiceError> {
        let notes = repo.load()?;
        info!(
            "event=notes_hydrate module=service status=ok count={}",
            notes.len()
        );
        Ok(Self { repo, clock, notes })
    }

    /// Creates a note stamped with the current time and appends it.
    pub fn add(&mut self, content: impl Into<String>) -> Result<Note, NoteServiceError> {
        let note = Note::new(self.clock.now_millis(), content);
        let mut next = self.notes.clone();
        next.push(note.clone());
        self.commit("add", next)?;
        Ok(note)
    }

    /// Replaces the content of the note with `id`, if any.
    pub fn update(&mut self, id: &str, content: impl Into<String>) -> Result<(), NoteServiceError> {
        let content = content.into();
        let next = self
            .notes
            .iter()
            .map(|note| {
                if note.id == id {
                    Note {
                        id: note.id.clone(),
                        content: content.clone(),
                    }
                } else {
                    note.clone()
                }
            })
            .collect();
        self.commit("update", next)
    }

    /// Removes the note with `id`, if any.
    pub fn delete(&mut self, id: &str) -> Result<(), NoteServiceError> {
        let next = self
            .notes
            .iter()
            .filter(|note| note.id != id)
            .cloned()
            .collect();
        self.commit("delete", next)
    }

    /// Notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Notes newest first, recomputed on every call.
    pub fn display_order(&self) -> Vec<&Note> {
        display_order(&self.notes)
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Read access to the repository, mainly for inspection in tests.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn commit(&mut self, op: &'static str, next: Vec<Note>) -> Result<(), NoteServiceError> {
        if let Err(err) = self.repo.save(&next) {
            error!(
                "event=notes_commit module=service status=error op={op} count={} error={err}",
                next.len()
            );
            return Err(err.into());
        }
        info!(
            "event=notes_commit module=service status=ok op={op} count={}",
            next.len()
        );
        self.notes = next;
        Ok(())
    }
}

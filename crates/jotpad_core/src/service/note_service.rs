//! Note use-case service.
//!
//! # Responsibility
//! - Provide create/update/fetch/list/delete entry points for screens.
//! - Map repository absence (`None`) to the semantic `NoteNotFound` error.
//!
//! # Invariants
//! - `update_note` uses full title/body replacement semantics.
//! - Delete operations are idempotent; wiping never fails on empty stores.

use crate::model::note::{Note, NoteId, NoteSummary};
use crate::repo::note_repo::NoteRepository;
use crate::repo::{RepoError, RepoResult};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Target note does not exist.
    NoteNotFound(NoteId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent note state: {details}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NoteNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Note service facade over repository implementations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one note and returns it with its store-assigned id.
    pub fn create_note(&self, title: &str, body: &str) -> Result<Note, NoteServiceError> {
        let id = self.repo.create_note(title, body)?;
        self.repo
            .get_note(id)?
            .ok_or(NoteServiceError::InconsistentState(
                "created note not found in read-back",
            ))
    }

    /// Replaces title and body of an existing note and returns the new state.
    pub fn update_note(
        &self,
        id: NoteId,
        title: &str,
        body: &str,
    ) -> Result<Note, NoteServiceError> {
        self.repo.update_note(id, title, body)?;
        self.repo
            .get_note(id)?
            .ok_or(NoteServiceError::InconsistentState(
                "updated note not found in read-back",
            ))
    }

    /// Fetches one note, failing with `NoteNotFound` when the id is absent.
    pub fn fetch_note(&self, id: NoteId) -> Result<Note, NoteServiceError> {
        self.repo
            .get_note(id)?
            .ok_or(NoteServiceError::NoteNotFound(id))
    }

    /// Lists all notes in insertion order.
    pub fn list_notes(&self) -> RepoResult<Vec<Note>> {
        self.repo.list_notes()
    }

    /// Lists all notes as list-row projections.
    pub fn list_summaries(&self) -> RepoResult<Vec<NoteSummary>> {
        self.repo.list_summaries()
    }

    /// Deletes one note. Succeeds when the id is already gone.
    pub fn delete_note(&self, id: NoteId) -> RepoResult<()> {
        self.repo.delete_note(id)
    }

    /// Removes every note unconditionally.
    pub fn wipe_notes(&self) -> RepoResult<()> {
        self.repo.delete_all_notes()
    }
}

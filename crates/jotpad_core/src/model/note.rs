//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record owned by the store.
//! - Provide the list-row projection used by the list screen.
//!
//! # Invariants
//! - `id` is stable and unique for the lifetime of a note.
//! - `body_chars` is derived from `body` at read time, never stored.

use serde::{Deserialize, Serialize};

/// Stable identifier assigned by the store on insert.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = i64;

/// A user-authored title/body record.
///
/// The store exclusively owns note records; screens hold transient copies
/// for display and editing only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Store-assigned stable ID.
    pub id: NoteId,
    /// Single-line title shown in the list.
    pub title: String,
    /// Free-form body text. Empty bodies are valid.
    pub body: String,
}

impl Note {
    pub fn new(id: NoteId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// List-row projection: title plus a body-length indicator.
///
/// Derived when listing; carries no body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSummary {
    /// Store-assigned stable ID.
    pub id: NoteId,
    /// Single-line title shown in the list.
    pub title: String,
    /// Body length in characters.
    pub body_chars: u32,
}

impl From<&Note> for NoteSummary {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id,
            title: note.title.clone(),
            body_chars: note.body.chars().count() as u32,
        }
    }
}

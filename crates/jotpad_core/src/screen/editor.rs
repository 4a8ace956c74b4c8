//! Editor session for creating or editing one note.
//!
//! # Invariants
//! - A session without a note id inserts on save; with an id it updates.
//! - Dropping a session without saving mutates nothing (cancel).
//! - Empty titles and bodies are accepted; there are no validation rules.

use crate::model::note::{Note, NoteId};
use crate::repo::note_repo::NoteRepository;
use crate::service::note_service::{NoteService, NoteServiceError};

/// Transient title/body input buffer handed to the host UI while editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSession {
    note_id: Option<NoteId>,
    pub title: String,
    pub body: String,
}

impl EditorSession {
    /// Starts a session for a brand-new note.
    pub fn new_note() -> Self {
        Self {
            note_id: None,
            title: String::new(),
            body: String::new(),
        }
    }

    /// Starts a session pre-filled from an existing note.
    pub fn edit(note: &Note) -> Self {
        Self {
            note_id: Some(note.id),
            title: note.title.clone(),
            body: note.body.clone(),
        }
    }

    /// The note being edited, or `None` for a new note.
    pub fn note_id(&self) -> Option<NoteId> {
        self.note_id
    }

    /// Writes the buffered input back to the store and returns the saved
    /// note. Inserts for new sessions, updates otherwise.
    pub fn save<R: NoteRepository>(
        &self,
        service: &NoteService<R>,
    ) -> Result<Note, NoteServiceError> {
        match self.note_id {
            None => service.create_note(&self.title, &self.body),
            Some(id) => service.update_note(id, &self.title, &self.body),
        }
    }
}

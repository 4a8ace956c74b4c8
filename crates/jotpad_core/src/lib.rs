//! Core domain logic for Jotpad.
//! This crate is the single source of truth for business invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod mail;
pub mod model;
pub mod repo;
pub mod screen;
pub mod service;

pub use config::MailConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use mail::composer::{compose_all, compose_note, MailMessage, TERMINATOR};
pub use mail::MailTransport;
pub use model::note::{Note, NoteId, NoteSummary};
pub use repo::note_repo::{NoteRepository, SqliteNoteRepository};
pub use repo::prefs_repo::PrefsStore;
pub use repo::{RepoError, RepoResult};
pub use screen::editor::EditorSession;
pub use screen::list::{Confirm, ListCommand, ListEffect, ListScreen, ListState};
pub use service::note_service::{NoteService, NoteServiceError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

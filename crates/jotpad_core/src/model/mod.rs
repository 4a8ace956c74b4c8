//! Domain model for the note store.
//!
//! # Responsibility
//! - Define the canonical note record and its read-time projections.
//!
//! # Invariants
//! - Every note is identified by a stable, store-assigned `NoteId`.
//! - Deletion is a hard delete; a removed id is never reused for lookups.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod note;

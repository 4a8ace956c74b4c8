//! Note repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `notes` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - List order is insertion order (`id ASC`).
//! - `delete_note` is idempotent: deleting an absent id succeeds.
//! - Row handles are dropped inside each call, on every exit path.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::model::note::{Note, NoteId, NoteSummary};
use crate::repo::{ensure_schema_current, table_exists, table_has_column, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

/// Repository interface for note CRUD operations.
///
/// The list screen and editor are generic over this trait so they can be
/// exercised against lightweight fakes in tests.
pub trait NoteRepository {
    /// Creates a note and returns its store-assigned id.
    fn create_note(&self, title: &str, body: &str) -> RepoResult<NoteId>;
    /// Gets one note by id. `None` when the id does not exist.
    fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>>;
    /// Lists all notes in insertion order.
    fn list_notes(&self) -> RepoResult<Vec<Note>>;
    /// Lists all notes as list-row projections, in insertion order.
    fn list_summaries(&self) -> RepoResult<Vec<NoteSummary>>;
    /// Replaces title and body of an existing note.
    fn update_note(&self, id: NoteId, title: &str, body: &str) -> RepoResult<()>;
    /// Deletes one note. No-op success when the id is absent.
    fn delete_note(&self, id: NoteId) -> RepoResult<()>;
    /// Removes every note unconditionally.
    fn delete_all_notes(&self) -> RepoResult<()>;
}

/// SQLite-backed note repository.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_current(conn)?;
        ensure_notes_table_ready(conn)?;
        Ok(Self { conn })
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn create_note(&self, title: &str, body: &str) -> RepoResult<NoteId> {
        self.conn.execute(
            "INSERT INTO notes (title, body) VALUES (?1, ?2);",
            params![title, body],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, body FROM notes WHERE id = ?1;")?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_note_row(row)?));
        }

        Ok(None)
    }

    fn list_notes(&self) -> RepoResult<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, body FROM notes ORDER BY id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }
        Ok(notes)
    }

    fn list_summaries(&self) -> RepoResult<Vec<NoteSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, length(body) AS body_chars
             FROM notes
             ORDER BY id ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut summaries = Vec::new();
        while let Some(row) = rows.next()? {
            summaries.push(NoteSummary {
                id: row.get("id")?,
                title: row.get("title")?,
                body_chars: row.get("body_chars")?,
            });
        }
        Ok(summaries)
    }

    fn update_note(&self, id: NoteId, title: &str, body: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE notes SET title = ?2, body = ?3 WHERE id = ?1;",
            params![id, title, body],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete_note(&self, id: NoteId) -> RepoResult<()> {
        // Idempotent: absent rows delete zero rows and still succeed.
        self.conn
            .execute("DELETE FROM notes WHERE id = ?1;", [id])?;
        Ok(())
    }

    fn delete_all_notes(&self) -> RepoResult<()> {
        self.conn.execute("DELETE FROM notes;", [])?;
        Ok(())
    }
}

fn parse_note_row(row: &Row<'_>) -> RepoResult<Note> {
    Ok(Note {
        id: row.get("id")?,
        title: row.get("title")?,
        body: row.get("body")?,
    })
}

fn ensure_notes_table_ready(conn: &Connection) -> RepoResult<()> {
    if !table_exists(conn, "notes")? {
        return Err(RepoError::MissingRequiredTable("notes"));
    }

    for column in ["id", "title", "body"] {
        if !table_has_column(conn, "notes", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "notes",
                column,
            });
        }
    }

    Ok(())
}

//! Key-value preferences store backed by the `prefs` table.
//!
//! # Responsibility
//! - Persist string-valued settings alongside note data.
//! - Keep key naming compatible with existing installs.
//!
//! # Invariants
//! - `set` replaces the previous value for a key atomically.
//! - Absent keys read as `None`; defaults are applied by `config`, not here.

use crate::repo::{ensure_schema_current, table_exists, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Primary outbound address.
pub const KEY_EMAIL: &str = "email";
/// Secondary recipient used when mailing a single note.
pub const KEY_SECONDARY_EMAIL: &str = "rtmemail";
/// Secondary recipient used when mailing the full list.
pub const KEY_IMPORT_EMAIL: &str = "rtmimport";
/// Subject line for full-list mail.
pub const KEY_SUBJECT: &str = "emailsubject";
/// Priority label appended to composed note lines.
pub const KEY_DEFAULT_PRIORITY: &str = "default_priority";
/// Due-date label appended to composed note lines.
pub const KEY_DEFAULT_DUEDATE: &str = "default_duedate";

/// SQLite-backed preferences store.
pub struct PrefsStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> PrefsStore<'conn> {
    /// Constructs a store from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_current(conn)?;
        if !table_exists(conn, "prefs")? {
            return Err(RepoError::MissingRequiredTable("prefs"));
        }
        Ok(Self { conn })
    }

    /// Reads one setting. `None` when the key has never been set.
    pub fn get(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM prefs WHERE key = ?1;", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Writes one setting, replacing any previous value.
    pub fn set(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO prefs (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }

    /// Removes one setting. No-op when the key is absent.
    pub fn remove(&self, key: &str) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM prefs WHERE key = ?1;", [key])?;
        Ok(())
    }
}

//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `jotpad_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use jotpad_core::db::open_db_in_memory;
use jotpad_core::{NoteService, SqliteNoteRepository};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("jotpad_core ping={}", jotpad_core::ping());
    println!("jotpad_core version={}", jotpad_core::core_version());

    // Exercise the store end to end against a throwaway database.
    let conn = open_db_in_memory()?;
    let service = NoteService::new(SqliteNoteRepository::try_new(&conn)?);
    let created = service.create_note("smoke", "in-memory round-trip")?;
    let rows = service.list_summaries()?;
    println!(
        "jotpad_core smoke id={} rows={} body_chars={}",
        created.id,
        rows.len(),
        rows[0].body_chars
    );

    Ok(())
}

use jotpad_core::db::migrations::latest_version;
use jotpad_core::db::open_db_in_memory;
use jotpad_core::{NoteRepository, NoteService, NoteServiceError, RepoError, SqliteNoteRepository};
use rusqlite::Connection;

#[test]
fn insert_and_fetch_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let id = repo.create_note("Groceries", "Milk, eggs").unwrap();
    assert_eq!(id, 1);

    let loaded = repo.get_note(id).unwrap().unwrap();
    assert_eq!(loaded.id, 1);
    assert_eq!(loaded.title, "Groceries");
    assert_eq!(loaded.body, "Milk, eggs");

    let all = repo.list_notes().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], loaded);
}

#[test]
fn ids_are_assigned_in_insertion_order_and_listing_follows_them() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let first = repo.create_note("first", "").unwrap();
    let second = repo.create_note("second", "").unwrap();
    let third = repo.create_note("third", "").unwrap();
    assert!(first < second && second < third);

    let titles: Vec<String> = repo
        .list_notes()
        .unwrap()
        .into_iter()
        .map(|note| note.title)
        .collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
}

#[test]
fn update_then_fetch_returns_new_values() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let id = repo.create_note("draft", "old body").unwrap();
    repo.update_note(id, "final", "new body").unwrap();

    let loaded = repo.get_note(id).unwrap().unwrap();
    assert_eq!(loaded.title, "final");
    assert_eq!(loaded.body, "new body");
}

#[test]
fn update_missing_id_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let err = repo.update_note(42, "x", "y").unwrap_err();
    assert!(matches!(err, RepoError::NotFound(42)));
}

#[test]
fn delete_is_idempotent_on_missing_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let id = repo.create_note("only", "note").unwrap();
    repo.delete_note(999).unwrap();

    let all = repo.list_notes().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, id);
}

#[test]
fn deleting_first_of_two_leaves_only_the_second() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let first = repo.create_note("first", "a").unwrap();
    let second = repo.create_note("second", "b").unwrap();

    repo.delete_note(first).unwrap();

    let remaining = repo.list_notes().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second);
    assert!(repo.get_note(first).unwrap().is_none());
}

#[test]
fn delete_all_empties_the_store_for_any_prior_content() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    for idx in 0..12 {
        repo.create_note(&format!("note {idx}"), "body").unwrap();
    }

    repo.delete_all_notes().unwrap();
    assert!(repo.list_notes().unwrap().is_empty());

    // Wiping an already-empty store also succeeds.
    repo.delete_all_notes().unwrap();
    assert!(repo.list_notes().unwrap().is_empty());
}

#[test]
fn summaries_project_body_length_without_body_text() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    repo.create_note("short", "abc").unwrap();
    repo.create_note("empty", "").unwrap();

    let summaries = repo.list_summaries().unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].title, "short");
    assert_eq!(summaries[0].body_chars, 3);
    assert_eq!(summaries[1].body_chars, 0);
}

#[test]
fn service_fetch_maps_absence_to_note_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::try_new(&conn).unwrap());

    let err = service.fetch_note(7).unwrap_err();
    assert!(matches!(err, NoteServiceError::NoteNotFound(7)));

    let created = service.create_note("found", "body").unwrap();
    let fetched = service.fetch_note(created.id).unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn service_create_and_update_return_persisted_state() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::try_new(&conn).unwrap());

    let created = service.create_note("Groceries", "Milk, eggs").unwrap();
    assert_eq!(created.id, 1);

    let updated = service.update_note(created.id, "Groceries", "Milk only").unwrap();
    assert_eq!(updated.body, "Milk only");
    assert_eq!(service.fetch_note(created.id).unwrap(), updated);
}

#[test]
fn empty_title_and_body_are_accepted() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::try_new(&conn).unwrap());

    let created = service.create_note("", "").unwrap();
    assert_eq!(created.title, "");
    assert_eq!(created.body, "");
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteNoteRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_required_notes_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteNoteRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("notes"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_notes_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE notes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteNoteRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "notes",
            column: "body"
        })
    ));
}

//! SQL DDL for initializing the folders/notes storage.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT on both tables, so ids are never reused
/// - `notes.folder_id` referencing `folders.id` (enforced with `foreign_keys = ON`)
/// - `notes.modified` TEXT in RFC3339, defaulting to the insert time in UTC
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS folders (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    folder_title TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    note_title TEXT NOT NULL,
    content TEXT NOT NULL,
    folder_id INTEGER NOT NULL REFERENCES folders(id),
    modified TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ', 'now'))
);

CREATE INDEX IF NOT EXISTS idx_notes_folder_id ON notes(folder_id);
"#;

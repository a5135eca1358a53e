use crate::db::models::{DbNote, NewNote};
use crate::db::sqlite::{SqlitePool, parse_timestamp};
use crate::error::NotefulError;
use futures::stream::{BoxStream, StreamExt, TryStreamExt};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use tracing::{debug, info};

const INSERT_WITH_MODIFIED: &str = r#"
    INSERT INTO notes (note_title, content, folder_id, modified)
    VALUES (?, ?, ?, ?)
    RETURNING id, note_title, content, folder_id, modified
"#;

const INSERT_DEFAULT_MODIFIED: &str = r#"
    INSERT INTO notes (note_title, content, folder_id)
    VALUES (?, ?, ?)
    RETURNING id, note_title, content, folder_id, modified
"#;

#[derive(Clone)]
pub struct NotesService {
    pool: SqlitePool,
}

impl NotesService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Lazily stream every note; each call issues a fresh query.
    pub fn stream_all(&self) -> BoxStream<'_, Result<DbNote, NotefulError>> {
        sqlx::query("SELECT id, note_title, content, folder_id, modified FROM notes ORDER BY id")
            .fetch(&self.pool)
            .map(|row| row.map_err(NotefulError::from).and_then(Self::row_to_model))
            .boxed()
    }

    pub async fn list_all(&self) -> Result<Vec<DbNote>, NotefulError> {
        self.stream_all().try_collect().await
    }

    /// `Ok(None)` when no note has this id.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<DbNote>, NotefulError> {
        let row = sqlx::query(
            r#"SELECT id, note_title, content, folder_id, modified
               FROM notes WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        debug!(id, found = row.is_some(), "note lookup");
        row.map(Self::row_to_model).transpose()
    }

    /// Insert a note. The folder reference is checked by storage, not here.
    pub async fn insert(&self, note: NewNote) -> Result<DbNote, NotefulError> {
        let row = match note.modified {
            Some(modified) => {
                sqlx::query(INSERT_WITH_MODIFIED)
                    .bind(note.note_title)
                    .bind(note.content)
                    .bind(note.folder_id)
                    .bind(modified.to_rfc3339())
                    .fetch_one(&self.pool)
                    .await?
            }
            // omit the column entirely so the table default applies
            None => {
                sqlx::query(INSERT_DEFAULT_MODIFIED)
                    .bind(note.note_title)
                    .bind(note.content)
                    .bind(note.folder_id)
                    .fetch_one(&self.pool)
                    .await?
            }
        };
        let stored = Self::row_to_model(row)?;
        info!(id = stored.id, folder_id = stored.folder_id, "note created");
        Ok(stored)
    }

    /// Delete by id. Returns the number of rows removed (0 or 1).
    pub async fn delete_by_id(&self, id: i64) -> Result<u64, NotefulError> {
        let affected = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        info!(id, affected, "note delete");
        Ok(affected)
    }

    fn row_to_model(row: SqliteRow) -> Result<DbNote, NotefulError> {
        let id: i64 = row.try_get("id")?;
        let note_title: String = row.try_get("note_title")?;
        let content: String = row.try_get("content")?;
        let folder_id: i64 = row.try_get("folder_id")?;
        let modified_str: String = row.try_get("modified")?;
        let modified = parse_timestamp(&modified_str)?;

        Ok(DbNote {
            id,
            note_title,
            content,
            folder_id,
            modified,
        })
    }
}

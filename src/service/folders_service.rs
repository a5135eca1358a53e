use crate::db::models::{DbFolder, NewFolder};
use crate::db::sqlite::SqlitePool;
use crate::error::NotefulError;
use futures::stream::{BoxStream, StreamExt, TryStreamExt};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use tracing::{debug, info};

#[derive(Clone)]
pub struct FoldersService {
    pool: SqlitePool,
}

impl FoldersService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Lazily stream every folder; each call issues a fresh query.
    pub fn stream_all(&self) -> BoxStream<'_, Result<DbFolder, NotefulError>> {
        sqlx::query("SELECT id, folder_title FROM folders ORDER BY id")
            .fetch(&self.pool)
            .map(|row| row.map_err(NotefulError::from).and_then(Self::row_to_model))
            .boxed()
    }

    pub async fn list_all(&self) -> Result<Vec<DbFolder>, NotefulError> {
        self.stream_all().try_collect().await
    }

    /// `Ok(None)` when no folder has this id.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<DbFolder>, NotefulError> {
        let row = sqlx::query("SELECT id, folder_title FROM folders WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        debug!(id, found = row.is_some(), "folder lookup");
        row.map(Self::row_to_model).transpose()
    }

    pub async fn insert(&self, folder: NewFolder) -> Result<DbFolder, NotefulError> {
        let row = sqlx::query(
            "INSERT INTO folders (folder_title) VALUES (?) RETURNING id, folder_title",
        )
        .bind(folder.folder_title)
        .fetch_one(&self.pool)
        .await?;
        let stored = Self::row_to_model(row)?;
        info!(id = stored.id, "folder created");
        Ok(stored)
    }

    fn row_to_model(row: SqliteRow) -> Result<DbFolder, NotefulError> {
        let id: i64 = row.try_get("id")?;
        let folder_title: String = row.try_get("folder_title")?;
        Ok(DbFolder { id, folder_title })
    }
}

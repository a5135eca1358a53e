use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use std::convert::Infallible;
use tracing::debug;

use crate::NotefulError;
use crate::db::models::{DbFolder, DbNote};
use crate::router::NotefulState;

/// The `{id}` path segment, `None` when it is not an integer.
///
/// A malformed id can never match a row, so callers treat it as not found.
#[derive(Debug, Clone, Copy)]
pub struct PathId(pub Option<i64>);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let id = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => raw.parse::<i64>().ok(),
            Err(rejection) => {
                debug!(error = %rejection, "no usable id in path");
                None
            }
        };
        Ok(PathId(id))
    }
}

/// Folder resolved from `/folders/{id}`; rejects with 404 when absent.
pub struct ExistingFolder(pub DbFolder);

impl FromRequestParts<NotefulState> for ExistingFolder {
    type Rejection = NotefulError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &NotefulState,
    ) -> Result<Self, Self::Rejection> {
        let Ok(PathId(Some(id))) = PathId::from_request_parts(parts, state).await else {
            return Err(NotefulError::FolderNotFound);
        };
        state
            .folders
            .get_by_id(id)
            .await?
            .map(ExistingFolder)
            .ok_or(NotefulError::FolderNotFound)
    }
}

/// Note resolved from `/notes/{id}`; rejects with 404 when absent.
pub struct ExistingNote(pub DbNote);

impl FromRequestParts<NotefulState> for ExistingNote {
    type Rejection = NotefulError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &NotefulState,
    ) -> Result<Self, Self::Rejection> {
        let Ok(PathId(Some(id))) = PathId::from_request_parts(parts, state).await else {
            return Err(NotefulError::NoteNotFound);
        };
        state
            .notes
            .get_by_id(id)
            .await?
            .map(ExistingNote)
            .ok_or(NotefulError::NoteNotFound)
    }
}

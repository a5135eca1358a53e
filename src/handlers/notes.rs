use axum::{
    Json,
    extract::{OriginalUri, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use super::location_for;
use crate::middleware::{ExistingNote, PathId, ValidatedJson};
use crate::types::{NewNoteBody, NoteResponse};
use crate::{NotefulError, router::NotefulState};

/// GET /notes
pub async fn list_notes(
    State(state): State<NotefulState>,
) -> Result<Json<Vec<NoteResponse>>, NotefulError> {
    let notes = state.notes.list_all().await?;
    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}

/// POST /notes -> 201 with `Location` pointing at the new note.
pub async fn create_note(
    State(state): State<NotefulState>,
    OriginalUri(uri): OriginalUri,
    ValidatedJson(body): ValidatedJson<NewNoteBody>,
) -> Result<impl IntoResponse, NotefulError> {
    let note = state.notes.insert(body.into()).await?;
    let location = location_for(&uri, note.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(NoteResponse::from(note)),
    ))
}

/// GET /notes/{id}
pub async fn get_note(ExistingNote(note): ExistingNote) -> Json<NoteResponse> {
    Json(note.into())
}

/// DELETE /notes/{id} -> 204, or 404 when nothing was deleted.
///
/// The affected-row count of the delete decides the outcome, so a note
/// removed concurrently by another request is reported as missing.
pub async fn delete_note(
    State(state): State<NotefulState>,
    PathId(id): PathId,
) -> Result<StatusCode, NotefulError> {
    let Some(id) = id else {
        return Err(NotefulError::NoteNotFound);
    };
    match state.notes.delete_by_id(id).await? {
        0 => Err(NotefulError::NoteNotFound),
        _ => Ok(StatusCode::NO_CONTENT),
    }
}

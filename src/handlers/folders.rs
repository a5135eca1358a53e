use axum::{
    Json,
    extract::{OriginalUri, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use super::location_for;
use crate::middleware::{ExistingFolder, ValidatedJson};
use crate::types::{FolderResponse, NewFolderBody};
use crate::{NotefulError, router::NotefulState};

/// GET /folders
pub async fn list_folders(
    State(state): State<NotefulState>,
) -> Result<Json<Vec<FolderResponse>>, NotefulError> {
    let folders = state.folders.list_all().await?;
    Ok(Json(folders.into_iter().map(FolderResponse::from).collect()))
}

/// POST /folders -> 201 with `Location` pointing at the new folder.
pub async fn create_folder(
    State(state): State<NotefulState>,
    OriginalUri(uri): OriginalUri,
    ValidatedJson(body): ValidatedJson<NewFolderBody>,
) -> Result<impl IntoResponse, NotefulError> {
    let folder = state.folders.insert(body.into()).await?;
    let location = location_for(&uri, folder.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(FolderResponse::from(folder)),
    ))
}

/// GET /folders/{id}
pub async fn get_folder(ExistingFolder(folder): ExistingFolder) -> Json<FolderResponse> {
    Json(folder.into())
}

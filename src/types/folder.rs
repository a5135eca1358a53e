use serde::{Deserialize, Serialize};

use super::RequiredFields;
use super::sanitize::sanitize;
use crate::db::models::{DbFolder, NewFolder};

/// `POST /folders` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct NewFolderBody {
    pub folder_title: String,
}

impl RequiredFields for NewFolderBody {
    const REQUIRED: &'static [&'static str] = &["folder_title"];
}

impl From<NewFolderBody> for NewFolder {
    fn from(body: NewFolderBody) -> Self {
        Self {
            folder_title: body.folder_title,
        }
    }
}

/// Public representation of a folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderResponse {
    pub id: i64,
    pub folder_title: String,
}

impl From<DbFolder> for FolderResponse {
    fn from(folder: DbFolder) -> Self {
        Self {
            id: folder.id,
            folder_title: sanitize(&folder.folder_title),
        }
    }
}

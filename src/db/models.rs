use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DbFolder {
    pub id: i64,
    pub folder_title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DbNote {
    pub id: i64,
    pub note_title: String,
    pub content: String,
    pub folder_id: i64,
    pub modified: DateTime<Utc>,
}

/// Folder row before storage assigns an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFolder {
    pub folder_title: String,
}

/// Note row before storage assigns an id.
///
/// `modified: None` leaves the column out of the insert so the table default
/// (current UTC time) applies; it is never written as NULL.
#[derive(Debug, Clone, PartialEq)]
pub struct NewNote {
    pub note_title: String,
    pub content: String,
    pub folder_id: i64,
    pub modified: Option<DateTime<Utc>>,
}

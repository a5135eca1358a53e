use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};

use super::RequiredFields;
use super::sanitize::{format_date, sanitize};
use crate::db::models::{DbNote, NewNote};

/// `POST /notes` payload. `modified` may be absent or null.
#[derive(Debug, Clone, Deserialize)]
pub struct NewNoteBody {
    pub note_title: String,
    pub content: String,
    pub folder_id: i64,
    #[serde(default, deserialize_with = "deserialize_modified")]
    pub modified: Option<DateTime<Utc>>,
}

/// Accepts RFC 3339, or a naive `YYYY-MM-DD[( |T)HH:MM:SS[.fff]]` read as UTC.
fn deserialize_modified<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    parse_modified(raw.trim())
        .map(Some)
        .ok_or_else(|| de::Error::custom(format!("invalid 'modified' timestamp: {raw:?}")))
}

pub(crate) fn parse_modified(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

impl RequiredFields for NewNoteBody {
    const REQUIRED: &'static [&'static str] = &["note_title", "content", "folder_id"];
}

impl From<NewNoteBody> for NewNote {
    fn from(body: NewNoteBody) -> Self {
        Self {
            note_title: body.note_title,
            content: body.content,
            folder_id: body.folder_id,
            modified: body.modified,
        }
    }
}

/// Public representation of a note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteResponse {
    pub id: i64,
    pub note_title: String,
    pub content: String,
    pub folder_id: i64,
    pub modified: String,
}

impl From<DbNote> for NoteResponse {
    fn from(note: DbNote) -> Self {
        Self {
            id: note.id,
            note_title: sanitize(&note.note_title),
            content: sanitize(&note.content),
            folder_id: note.folder_id,
            modified: format_date(&note.modified),
        }
    }
}

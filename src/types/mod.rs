//! Wire types: request payloads and the serialized public representations.

pub mod folder;
pub mod note;
pub mod sanitize;

pub use folder::{FolderResponse, NewFolderBody};
pub use note::{NewNoteBody, NoteResponse};

/// Request payloads whose fields must be present and non-null.
///
/// Fields are checked in declaration order; the first missing one is reported.
pub trait RequiredFields {
    const REQUIRED: &'static [&'static str];
}

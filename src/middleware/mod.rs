pub mod existing;
pub mod validated_json;

pub use existing::{ExistingFolder, ExistingNote, PathId};
pub use validated_json::ValidatedJson;

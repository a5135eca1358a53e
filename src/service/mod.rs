pub mod folders_service;
pub mod notes_service;

pub use folders_service::FoldersService;
pub use notes_service::NotesService;

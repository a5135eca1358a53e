use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::get,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::db::SqlitePool;
use crate::handlers::{folders, hello, notes};
use crate::service::{FoldersService, NotesService};

/// Shared state handed to every handler. Both services hold clones of the
/// same pool.
#[derive(Clone)]
pub struct NotefulState {
    pub folders: FoldersService,
    pub notes: NotesService,
}

impl NotefulState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            folders: FoldersService::new(pool.clone()),
            notes: NotesService::new(pool),
        }
    }
}

pub fn noteful_router(state: NotefulState, cfg: &Config) -> Router {
    let resources = Router::new()
        .route(
            "/folders",
            get(folders::list_folders).post(folders::create_folder),
        )
        .route("/folders/{id}", get(folders::get_folder))
        .route("/notes", get(notes::list_notes).post(notes::create_note))
        .route(
            "/notes/{id}",
            get(notes::get_note).delete(notes::delete_note),
        );

    let api_root = cfg.api_root();
    let app = if api_root.is_empty() {
        resources
    } else {
        Router::new().nest(&api_root, resources)
    };

    app.route("/", get(hello))
        .layer(DefaultBodyLimit::max(cfg.basic.body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

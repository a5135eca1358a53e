use axum::http::Uri;

pub mod folders;
pub mod notes;

/// `<request path>/<id>`, built from the original (pre-nesting) request path.
pub(crate) fn location_for(uri: &Uri, id: i64) -> String {
    format!("{}/{}", uri.path().trim_end_matches('/'), id)
}

/// GET / liveness probe.
pub async fn hello() -> &'static str {
    "Hello, world!"
}

#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, Bytes, to_bytes},
    http::{HeaderMap, Request, StatusCode, header},
};
use noteful::{Config, NotefulState, db::SqlitePool, noteful_router};
use serde_json::{Value, json};
use std::{
    fs,
    path::PathBuf,
    sync::atomic::{AtomicUsize, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

static DB_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Router wired to a throwaway SQLite file that is removed on drop.
pub struct TestApp {
    pub app: Router,
    pub pool: SqlitePool,
    path: PathBuf,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(Config::default()).await
}

pub async fn spawn_app_with(cfg: Config) -> TestApp {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut path = std::env::temp_dir();
    path.push(format!(
        "noteful-test-{}-{}-{}.sqlite",
        std::process::id(),
        nanos,
        DB_COUNTER.fetch_add(1, Ordering::Relaxed)
    ));

    let database_url = format!("sqlite:{}", path.display());
    let pool = noteful::db::connect(&database_url)
        .await
        .expect("failed to open test database");
    let app = noteful_router(NotefulState::new(pool.clone()), &cfg);

    TestApp { app, pool, path }
}

pub fn folder_fixtures() -> Vec<Value> {
    vec![
        json!({"id": 50, "folder_title": "Important"}),
        json!({"id": 51, "folder_title": "Super"}),
        json!({"id": 52, "folder_title": "Spangley"}),
    ]
}

/// Notes as stored; `modified` is rendered as `1/3/2019` on the wire.
pub fn note_fixtures() -> Vec<Value> {
    vec![
        json!({"id": 1, "note_title": "Dogs", "content": "Corgis are the best", "folder_id": 50}),
        json!({"id": 2, "note_title": "Cats", "content": "Cats are aloof", "folder_id": 51}),
        json!({"id": 3, "note_title": "Pigs", "content": "Pigs are smart", "folder_id": 52}),
    ]
}

/// Serialized form the API returns for `note_fixtures()`.
pub fn expected_notes() -> Vec<Value> {
    note_fixtures()
        .into_iter()
        .map(|mut n| {
            n["modified"] = json!("1/3/2019");
            n
        })
        .collect()
}

pub async fn seed(pool: &SqlitePool) {
    for f in folder_fixtures() {
        sqlx::query("INSERT INTO folders (id, folder_title) VALUES (?, ?)")
            .bind(f["id"].as_i64())
            .bind(f["folder_title"].as_str())
            .execute(pool)
            .await
            .expect("failed to seed folder");
    }
    for n in note_fixtures() {
        sqlx::query(
            "INSERT INTO notes (id, note_title, content, folder_id, modified) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(n["id"].as_i64())
        .bind(n["note_title"].as_str())
        .bind(n["content"].as_str())
        .bind(n["folder_id"].as_i64())
        .bind("2019-01-03T00:00:00.000Z")
        .execute(pool)
        .await
        .expect("failed to seed note");
    }
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    let sql = format!("SELECT COUNT(*) FROM {table}");
    let rec: (i64,) = sqlx::query_as(&sql)
        .fetch_one(pool)
        .await
        .expect("count query failed");
    rec.0
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    post_raw(uri, body.to_string())
}

pub fn post_raw(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("failed to build request")
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body was not JSON")
    }

    pub fn location(&self) -> &str {
        self.headers
            .get(header::LOCATION)
            .expect("missing Location header")
            .to_str()
            .expect("Location header was not ASCII")
    }
}

pub async fn send(app: &Router, req: Request<Body>) -> TestResponse {
    let resp = app.clone().oneshot(req).await.expect("request failed");
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn error_body(message: &str) -> Value {
    json!({"error": {"message": message}})
}

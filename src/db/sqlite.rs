use crate::db::schema::SQLITE_INIT;
use crate::error::NotefulError;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::debug;

pub type SqlitePool = Pool<Sqlite>;

/// Open the pool shared by every resource service and apply the schema.
pub async fn connect(database_url: &str) -> Result<SqlitePool, NotefulError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
    init_schema(&pool).await?;
    Ok(pool)
}

/// Initialize the schema by executing the bundled DDL.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), NotefulError> {
    // execute multiple statements one by one (sqlx::query takes a single statement)
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    debug!("schema initialized");
    Ok(())
}

/// Decode a stored RFC3339 timestamp column.
pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, NotefulError> {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
        .with_timezone(&Utc);
    Ok(parsed)
}

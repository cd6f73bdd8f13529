use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use squadbook_types::errors::PersistenceError;

pub type DbPool = SqlitePool;

/// Opens (creating if missing) the local store at `database_url` and makes
/// sure the kv table exists. The url comes from Config, never from env reads
/// buried down here.
pub async fn establish_connection_pool(database_url: &str) -> Result<DbPool, PersistenceError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = init_connection_pool(options).await?;
    tracing::debug!("Opened local store at {database_url}");
    Ok(pool)
}

/// In-memory store for tests.
pub async fn establish_test_connection_pool() -> Result<DbPool, PersistenceError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
    init_connection_pool(options).await
}

async fn init_connection_pool(options: SqliteConnectOptions) -> Result<DbPool, PersistenceError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    sqlx::query("CREATE TABLE IF NOT EXISTS kv (key TEXT PRIMARY KEY, value TEXT NOT NULL)")
        .execute(&pool)
        .await?;

    Ok(pool)
}

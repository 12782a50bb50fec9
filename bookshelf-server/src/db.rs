//! SQLite pool construction
//!
//! The pool is built once at startup and shared through
//! [`crate::http::server::AppState`]. No DDL runs here: the books table
//! exists only after a schema reset (`POST /setup`), and operations against
//! a fresh database fail until then.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

pub mod repos;

pub use repos::{Book, BookRepo, DbError};

/// Maximum pooled connections against the database file
const MAX_CONNECTIONS: u32 = 10;

/// Open a pool against a file-backed database.
///
/// Creates the parent directory and the database file if missing.
pub async fn connect(path: impl AsRef<Path>) -> Result<SqlitePool, DbError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Open an in-memory pool (for testing).
///
/// Capped at a single connection: each in-memory connection is its own
/// database, so every checkout must reuse the same one.
pub async fn connect_in_memory() -> Result<SqlitePool, DbError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connect_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("books.db");

        let pool = connect(&path).await.unwrap();
        assert!(path.exists());

        pool.close().await;
    }

    #[tokio::test]
    async fn in_memory_pool_reuses_one_connection() {
        let pool = connect_in_memory().await.unwrap();

        sqlx::query("CREATE TABLE t (x INTEGER)")
            .execute(&pool)
            .await
            .unwrap();

        // A second checkout still sees the table
        sqlx::query("SELECT x FROM t")
            .fetch_all(&pool)
            .await
            .unwrap();
    }
}

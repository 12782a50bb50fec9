//! Book repository
//!
//! All DDL for the service lives here: reset drops and recreates the
//! table wholesale, discarding every record.

use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use crate::models::PageWindow;

/// Book record from database
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

const SCHEMA: &str = r#"
CREATE TABLE books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author TEXT NOT NULL
)
"#;

/// Book repository
///
/// Each operation checks one connection out of the pool at entry; the
/// guard's drop returns it on every exit path.
pub struct BookRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> BookRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Drop and recreate the books table, discarding all rows.
    ///
    /// Idempotent: a second reset leaves the same empty table.
    pub async fn reset_schema(&self) -> Result<(), DbError> {
        let mut conn = self.pool.acquire().await?;

        sqlx::query("DROP TABLE IF EXISTS books")
            .execute(&mut *conn)
            .await?;
        sqlx::query(SCHEMA).execute(&mut *conn).await?;

        Ok(())
    }

    /// Insert one book; the write is committed when this returns.
    ///
    /// Returns the store-assigned id.
    pub async fn insert(&self, title: &str, author: &str) -> Result<i64, DbError> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query("INSERT INTO books (title, author) VALUES (?1, ?2)")
            .bind(title)
            .bind(author)
            .execute(&mut *conn)
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// Fetch one page of books, ordered by id ascending.
    pub async fn list(&self, window: PageWindow) -> Result<Vec<Book>, DbError> {
        let mut conn = self.pool.acquire().await?;

        let books = sqlx::query_as::<_, Book>(
            "SELECT id, title, author FROM books ORDER BY id LIMIT ?1 OFFSET ?2",
        )
        .bind(window.limit())
        .bind(window.offset())
        .fetch_all(&mut *conn)
        .await?;

        Ok(books)
    }
}

//! Book endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Book, BookRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ValidJson, ValidQuery};
use crate::http::server::AppState;
use crate::models::{PageParams, PageWindow};

/// Create book request
#[derive(Deserialize)]
pub struct CreateBookRequest {
    pub title: String,
    pub author: String,
}

/// Create book response
#[derive(Serialize)]
pub struct CreateBookResponse {
    pub ok: bool,
}

/// Book response
#[derive(Serialize)]
pub struct BookResponse {
    pub id: i64,
    pub title: String,
    pub author: String,
}

impl From<Book> for BookResponse {
    fn from(b: Book) -> Self {
        Self {
            id: b.id,
            title: b.title,
            author: b.author,
        }
    }
}

/// GET /books - list books with limit/offset pagination
async fn list_books(
    State(state): State<Arc<AppState>>,
    ValidQuery(params): ValidQuery<PageParams>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let window = PageWindow::try_from(params)?;
    let books = BookRepo::new(&state.pool).list(window).await?;

    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// POST /books - insert a new book
///
/// The assigned id is not part of the response contract; it is logged at
/// debug level instead.
async fn create_book(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateBookRequest>,
) -> Result<Json<CreateBookResponse>, ApiError> {
    let id = BookRepo::new(&state.pool)
        .insert(&req.title, &req.author)
        .await?;
    tracing::debug!(id, title = %req.title, "book inserted");

    Ok(Json(CreateBookResponse { ok: true }))
}

/// Book routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/books", get(list_books).post(create_book))
}

//! bookshelf-server: HTTP service for a single-table book catalog
//!
//! Exposes schema setup, book insertion, and paginated listing over HTTP,
//! backed by a SQLite database reached through sqlx.

pub mod db;
pub mod http;
pub mod models;

pub use http::server::{run_server, AppState, ServerConfig};

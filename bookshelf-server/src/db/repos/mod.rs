//! Repositories, one per stored resource

pub mod books;

pub use books::{Book, BookRepo, DbError};

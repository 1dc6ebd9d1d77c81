//! Repository layer: the catalog store abstraction and its backends.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::book::{Book, UpdateBook},
};

pub use memory::MemoryBookStore;
pub use postgres::PgBookStore;

/// Abstraction over book persistence.
///
/// Backends provide their own concurrency control; callers never
/// coordinate across requests.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Persist a new book and return it with its assigned id
    async fn insert(&self, book: Book) -> AppResult<Book>;

    /// All stored books, in id order
    async fn list(&self) -> AppResult<Vec<Book>>;

    /// Look up a book by id
    async fn get(&self, id: i32) -> AppResult<Option<Book>>;

    /// Look up a book by exact title and author
    async fn find_by_title_and_author(&self, title: &str, author: &str)
        -> AppResult<Option<Book>>;

    /// Overwrite title/author/isbn of an existing book, returning the
    /// updated record, or `None` for an unknown id
    async fn update(&self, id: i32, payload: &UpdateBook) -> AppResult<Option<Book>>;

    /// Remove a book; true if a record was deleted
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

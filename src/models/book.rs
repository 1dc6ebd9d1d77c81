//! Book (catalog entry) model and request payloads.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Canonical catalog entity.
///
/// `id` is store-assigned. Books mapped from the external volumes API are
/// transient and carry no id until explicitly created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Book {
    #[serde(default)]
    pub id: Option<i32>,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub description: Option<String>,
}

/// Payload for creating a book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub description: Option<String>,
}

/// Payload for updating a book.
/// The description is not updatable through this path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl From<CreateBook> for Book {
    fn from(payload: CreateBook) -> Self {
        Self {
            id: None,
            title: payload.title,
            author: payload.author,
            isbn: payload.isbn,
            description: payload.description,
        }
    }
}

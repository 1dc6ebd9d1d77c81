//! Book (catalog) endpoints.
//!
//! Handlers log intent, delegate to exactly one catalog-service operation
//! and relay the envelope unchanged: its status code becomes the transport
//! status, the full envelope the body.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::models::{
    book::{Book, CreateBook, UpdateBook},
    response::ServiceResponse,
};

/// List all books
pub async fn list_books(State(state): State<crate::AppState>) -> ServiceResponse<Vec<Book>> {
    tracing::info!("Listing all books");

    state.services.books.get_all_books().await
}

/// Get a book by ID
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> ServiceResponse<Book> {
    tracing::info!("Retrieving book {}", id);

    state.services.books.get_book_by_id(id).await
}

/// Create a new book
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(payload): Json<CreateBook>,
) -> ServiceResponse<Book> {
    tracing::info!("Creating book");

    state.services.books.create_book(payload).await
}

/// Update an existing book
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBook>,
) -> ServiceResponse<Book> {
    tracing::info!("Updating book {}", id);

    state.services.books.update_book(id, payload).await
}

/// Delete a book
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> ServiceResponse<String> {
    tracing::info!("Deleting book {}", id);

    state.services.books.delete_book(id).await
}

#[derive(Deserialize)]
pub struct ExternalSearchParams {
    pub query: String,
}

/// Search the external volumes API
pub async fn search_external_books(
    State(state): State<crate::AppState>,
    Query(params): Query<ExternalSearchParams>,
) -> ServiceResponse<Vec<Book>> {
    tracing::info!("Searching external books");

    state
        .services
        .books
        .search_external_books(&params.query)
        .await
}

/// Fetch a book's description from the external source
pub async fn get_book_description(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> ServiceResponse<String> {
    tracing::info!("Retrieving description for book {}", id);

    state.services.books.get_book_description(id).await
}

//! Catalog service: store orchestration, external lookups, and the
//! uniform envelope semantics per case.
//!
//! Every operation returns a [`ServiceResponse`]; errors are caught here
//! and converted to fixed status/message pairs, never propagated past the
//! service layer.

use std::sync::Arc;

use axum::http::StatusCode;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, CreateBook, UpdateBook},
        response::ServiceResponse,
    },
    repository::BookStore,
    services::external::ExternalCatalog,
};

#[derive(Clone)]
pub struct BookService {
    store: Arc<dyn BookStore>,
    external: Arc<dyn ExternalCatalog>,
}

impl BookService {
    pub fn new(store: Arc<dyn BookStore>, external: Arc<dyn ExternalCatalog>) -> Self {
        Self { store, external }
    }

    /// Create a book unless one with the same title and author exists
    pub async fn create_book(&self, payload: CreateBook) -> ServiceResponse<Book> {
        match self.try_create_book(payload).await {
            Ok(book) => ServiceResponse::ok(book, "Book created successfully."),
            Err(AppError::Conflict(message)) => {
                ServiceResponse::failure(StatusCode::BAD_REQUEST, &message)
            }
            Err(e) => {
                tracing::error!("Error creating book: {}", e);
                ServiceResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error.")
            }
        }
    }

    async fn try_create_book(&self, payload: CreateBook) -> AppResult<Book> {
        let duplicate = self
            .store
            .find_by_title_and_author(&payload.title, &payload.author)
            .await?;

        if duplicate.is_some() {
            return Err(AppError::Conflict("Book already exists.".to_string()));
        }

        self.store.insert(Book::from(payload)).await
    }

    /// List the whole catalog
    pub async fn get_all_books(&self) -> ServiceResponse<Vec<Book>> {
        match self.store.list().await {
            Ok(books) if books.is_empty() => ServiceResponse::no_content("No books found."),
            Ok(books) => ServiceResponse::ok(books, "Books retrieved successfully."),
            Err(e) => {
                tracing::error!("Error retrieving all books: {}", e);
                ServiceResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error.")
            }
        }
    }

    /// Fetch one book by id
    pub async fn get_book_by_id(&self, id: i32) -> ServiceResponse<Book> {
        match self.store.get(id).await {
            Ok(Some(book)) => ServiceResponse::ok(book, "Book retrieved successfully."),
            Ok(None) => ServiceResponse::failure(StatusCode::NOT_FOUND, "Book not found."),
            Err(e) => {
                tracing::error!("Error retrieving book by id: {}", e);
                ServiceResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error.")
            }
        }
    }

    /// Overwrite title/author/isbn of an existing book
    pub async fn update_book(&self, id: i32, payload: UpdateBook) -> ServiceResponse<Book> {
        match self.store.update(id, &payload).await {
            Ok(Some(book)) => ServiceResponse::ok(book, "Book updated successfully."),
            Ok(None) => ServiceResponse::failure(StatusCode::NOT_FOUND, "Book not found."),
            Err(e) => {
                tracing::error!("Error updating book: {}", e);
                ServiceResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error.")
            }
        }
    }

    /// Remove a book
    pub async fn delete_book(&self, id: i32) -> ServiceResponse<String> {
        match self.store.delete(id).await {
            Ok(true) => ServiceResponse::ok("Book deleted successfully.".to_string(), "Successful."),
            Ok(false) => ServiceResponse::failure(StatusCode::NOT_FOUND, "Book not found."),
            Err(e) => {
                tracing::error!("Error deleting book: {}", e);
                ServiceResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error.")
            }
        }
    }

    /// Search the external volumes API and map the hits into books
    pub async fn search_external_books(&self, query: &str) -> ServiceResponse<Vec<Book>> {
        match self.external.search_books(query).await {
            Ok(books) if books.is_empty() => {
                ServiceResponse::no_content("No external books found.")
            }
            Ok(books) => ServiceResponse::ok(books, "External books retrieved successfully."),
            Err(e) => {
                tracing::error!("Error fetching external books: {}", e);
                ServiceResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error fetching external books.",
                )
            }
        }
    }

    /// Description for a stored book, enriched from the external source by
    /// its ISBN. The lookup itself never fails; only an unknown id does.
    pub async fn get_book_description(&self, id: i32) -> ServiceResponse<String> {
        match self.store.get(id).await {
            Ok(Some(book)) => {
                let description = self.external.description_for_isbn(&book.isbn).await;
                ServiceResponse::ok(description, "Book description retrieved successfully.")
            }
            Ok(None) => ServiceResponse::failure(StatusCode::NOT_FOUND, "Book not found."),
            Err(e) => {
                tracing::error!("Error retrieving book description: {}", e);
                ServiceResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error.")
            }
        }
    }
}

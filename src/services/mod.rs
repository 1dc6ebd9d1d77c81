//! Business logic services

pub mod books;
pub mod external;

use std::sync::Arc;

use crate::repository::BookStore;

pub use books::BookService;
pub use external::{ExternalCatalog, GoogleBooksClient};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BookService,
}

impl Services {
    /// Create all services with the given store and external client
    pub fn new(store: Arc<dyn BookStore>, external: Arc<dyn ExternalCatalog>) -> Self {
        Self {
            books: books::BookService::new(store, external),
        }
    }
}

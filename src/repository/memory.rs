//! In-memory catalog store.
//!
//! The default backend: the whole catalog lives in a lock-guarded map, so
//! the server runs with zero infrastructure. Ids are assigned from a
//! monotonically increasing counter starting at 1.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::BookStore;
use crate::{
    error::AppResult,
    models::book::{Book, UpdateBook},
};

#[derive(Default)]
pub struct MemoryBookStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i32,
    books: BTreeMap<i32, Book>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn insert(&self, mut book: Book) -> AppResult<Book> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let id = inner.next_id;
        book.id = Some(id);
        inner.books.insert(id, book.clone());
        Ok(book)
    }

    async fn list(&self) -> AppResult<Vec<Book>> {
        let inner = self.inner.read().await;
        Ok(inner.books.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> AppResult<Option<Book>> {
        let inner = self.inner.read().await;
        Ok(inner.books.get(&id).cloned())
    }

    async fn find_by_title_and_author(
        &self,
        title: &str,
        author: &str,
    ) -> AppResult<Option<Book>> {
        let inner = self.inner.read().await;
        Ok(inner
            .books
            .values()
            .find(|b| b.title == title && b.author == author)
            .cloned())
    }

    async fn update(&self, id: i32, payload: &UpdateBook) -> AppResult<Option<Book>> {
        let mut inner = self.inner.write().await;
        let Some(book) = inner.books.get_mut(&id) else {
            return Ok(None);
        };
        book.title = payload.title.clone();
        book.author = payload.author.clone();
        book.isbn = payload.isbn.clone();
        Ok(Some(book.clone()))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner.books.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, author: &str) -> Book {
        Book {
            id: None,
            title: title.to_string(),
            author: author.to_string(),
            isbn: "000".to_string(),
            description: None,
        }
    }

    #[test]
    fn test_insert_assigns_increasing_ids() {
        tokio_test::block_on(async {
            let store = MemoryBookStore::new();

            let first = store.insert(book("Dune", "Herbert")).await.unwrap();
            let second = store.insert(book("Hyperion", "Simmons")).await.unwrap();

            assert_eq!(first.id, Some(1));
            assert_eq!(second.id, Some(2));
            assert_eq!(store.list().await.unwrap().len(), 2);
        });
    }

    #[test]
    fn test_find_by_title_and_author() {
        tokio_test::block_on(async {
            let store = MemoryBookStore::new();
            store.insert(book("Dune", "Herbert")).await.unwrap();

            let found = store.find_by_title_and_author("Dune", "Herbert").await.unwrap();
            assert!(found.is_some());

            let missing = store.find_by_title_and_author("Dune", "Asimov").await.unwrap();
            assert!(missing.is_none());
        });
    }

    #[test]
    fn test_update_unknown_id() {
        tokio_test::block_on(async {
            let store = MemoryBookStore::new();
            let payload = UpdateBook {
                title: "x".to_string(),
                author: "y".to_string(),
                isbn: "z".to_string(),
            };

            assert!(store.update(42, &payload).await.unwrap().is_none());
        });
    }

    #[test]
    fn test_delete() {
        tokio_test::block_on(async {
            let store = MemoryBookStore::new();
            let created = store.insert(book("Dune", "Herbert")).await.unwrap();
            let id = created.id.unwrap();

            assert!(store.delete(id).await.unwrap());
            assert!(!store.delete(id).await.unwrap());
            assert!(store.get(id).await.unwrap().is_none());
        });
    }
}

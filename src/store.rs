//! In-memory book store.
//!
//! Explicit store object with process-wide lifetime, injected into the
//! service layer through `AppState`. The runtime is multi-threaded, so the
//! collection lives behind a lock; no lock is held across an await point.

use tokio::sync::RwLock;

use crate::models::{Book, UpdateBook};

/// Shared mutable book collection, kept in insertion order
#[derive(Debug, Default)]
pub struct BookStore {
    books: RwLock<Vec<Book>>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the full collection in insertion order
    pub async fn list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    pub async fn find(&self, id: &str) -> Option<Book> {
        self.books.read().await.iter().find(|b| b.id == id).cloned()
    }

    pub async fn insert(&self, book: Book) {
        self.books.write().await.push(book);
    }

    /// Merge the provided fields of `patch` over the record with the given
    /// id, in place. Returns the updated record, or `None` if absent.
    pub async fn merge(&self, id: &str, patch: UpdateBook) -> Option<Book> {
        let mut books = self.books.write().await;
        let book = books.iter_mut().find(|b| b.id == id)?;
        if let Some(title) = patch.title {
            book.title = title;
        }
        if let Some(author) = patch.author {
            book.author = author;
        }
        if let Some(year) = patch.year {
            book.year = year;
        }
        if let Some(isbn) = patch.isbn {
            book.isbn = isbn;
        }
        Some(book.clone())
    }

    /// Remove the record with the given id, preserving the relative order
    /// of the remaining entries. Returns whether a record was removed.
    pub async fn remove(&self, id: &str) -> bool {
        let mut books = self.books.write().await;
        match books.iter().position(|b| b.id == id) {
            Some(index) => {
                books.remove(index);
                true
            }
            None => false,
        }
    }
}

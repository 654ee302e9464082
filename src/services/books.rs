//! Book catalog service

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    models::{Book, CreateBook, UpdateBook},
    store::BookStore,
};

/// CRUD operations over the book collection. Pure domain logic, no HTTP
/// awareness; "absent" outcomes are expressed as `Option`/`bool`, never as
/// errors.
#[derive(Clone)]
pub struct BookService {
    store: Arc<BookStore>,
}

impl BookService {
    pub fn new(store: Arc<BookStore>) -> Self {
        Self { store }
    }

    /// All books in insertion order
    pub async fn list_all(&self) -> Vec<Book> {
        self.store.list().await
    }

    /// Look up a book by id. Malformed ids never reach this point, the
    /// validation layer rejects them upstream.
    pub async fn get_by_id(&self, id: &str) -> Option<Book> {
        self.store.find(id).await
    }

    /// Create a book with a freshly assigned unique id
    pub async fn create(&self, payload: CreateBook) -> Book {
        let book = Book {
            id: Uuid::new_v4().to_string(),
            title: payload.title,
            author: payload.author,
            year: payload.year,
            isbn: payload.isbn,
        };
        self.store.insert(book.clone()).await;
        tracing::debug!(id = %book.id, "Book created");
        book
    }

    /// Merge the provided fields over an existing book. Returns `None` if
    /// no book has the given id.
    pub async fn update(&self, id: &str, patch: UpdateBook) -> Option<Book> {
        let updated = self.store.merge(id, patch).await;
        if updated.is_some() {
            tracing::debug!(id = %id, "Book updated");
        }
        updated
    }

    /// Delete a book. Returns whether a book was removed.
    pub async fn delete(&self, id: &str) -> bool {
        let deleted = self.store.remove(id).await;
        if deleted {
            tracing::debug!(id = %id, "Book deleted");
        }
        deleted
    }
}

//! Business logic services

pub mod books;

use std::sync::Arc;

use crate::store::BookStore;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BookService,
}

impl Services {
    /// Create all services with the given store
    pub fn new(store: Arc<BookStore>) -> Self {
        Self {
            books: books::BookService::new(store),
        }
    }
}

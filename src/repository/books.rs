//! In-memory book store

use crate::models::Book;

/// Ordered collection of the session's books.
///
/// Storage order is load order and is never changed; ids are not required
/// to be unique, so every lookup resolves to the first match.
#[derive(Debug, Clone, Default)]
pub struct BooksRepository {
    books: Vec<Book>,
}

impl BooksRepository {
    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// All books in storage order
    pub fn all(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Get book by ID
    pub fn find_by_id(&self, id: i32) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Get book by ID for an availability change
    pub fn find_by_id_mut(&mut self, id: i32) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.id == id)
    }
}

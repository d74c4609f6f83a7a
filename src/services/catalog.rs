//! Catalog browsing service

use crate::{models::Book, repository::Repository};

#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogService;

impl CatalogService {
    pub fn new() -> Self {
        Self
    }

    /// All books in storage order, or `None` when the catalog is empty
    pub fn list<'a>(&self, repository: &'a Repository) -> Option<&'a [Book]> {
        let books = repository.books.all();
        (!books.is_empty()).then_some(books)
    }

    /// Case-insensitive substring match against title and author.
    ///
    /// The query is used as typed; an empty query matches every book.
    pub fn search<'a>(&self, repository: &'a Repository, query: &str) -> Vec<&'a Book> {
        let needle = query.to_lowercase();
        repository
            .books
            .all()
            .iter()
            .filter(|book| {
                book.title.to_lowercase().contains(&needle)
                    || book.author.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

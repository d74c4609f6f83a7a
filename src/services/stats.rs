//! Statistics service

use crate::{models::CatalogSummary, repository::Repository};

#[derive(Debug, Clone, Copy, Default)]
pub struct StatsService;

impl StatsService {
    pub fn new() -> Self {
        Self
    }

    /// Count available and borrowed books over the whole catalog
    pub fn summary(&self, repository: &Repository) -> CatalogSummary {
        let books = repository.books.all();
        let available = books.iter().filter(|b| b.available).count();
        CatalogSummary {
            total: books.len(),
            available,
            borrowed: books.len() - available,
        }
    }
}

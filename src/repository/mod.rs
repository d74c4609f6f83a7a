//! Repository layer for the catalog file

pub mod books;

use std::fs;
use std::path::Path;

use crate::{
    codec,
    error::AppResult,
    models::LoadReport,
};

/// Session catalog and its file persistence.
///
/// The catalog file is read once in [`Repository::load`] and written once in
/// [`Repository::save`]; nothing in between touches the disk.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    pub fn new(books: books::BooksRepository) -> Self {
        Self { books }
    }

    /// Read and decode the whole catalog file.
    pub fn load(path: &Path) -> AppResult<(Self, LoadReport)> {
        let content = fs::read_to_string(path)?;
        let (books, report) = codec::decode(&content);
        tracing::info!(
            path = %path.display(),
            loaded = report.loaded,
            dropped = report.dropped.len(),
            "Catalog loaded"
        );
        Ok((Self::new(books::BooksRepository::from_books(books)), report))
    }

    /// Overwrite the catalog file with the full current collection.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        fs::write(path, codec::encode(self.books.all()))?;
        tracing::info!(path = %path.display(), books = self.books.len(), "Catalog saved");
        Ok(())
    }
}

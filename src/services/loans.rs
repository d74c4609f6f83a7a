//! Loan management service

use crate::{
    error::{AppError, AppResult},
    models::Book,
    repository::Repository,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct LoansService;

impl LoansService {
    pub fn new() -> Self {
        Self
    }

    /// Lend a book out
    pub fn borrow<'a>(&self, repository: &'a mut Repository, id: i32) -> AppResult<&'a Book> {
        let book = repository
            .books
            .find_by_id_mut(id)
            .ok_or(AppError::BookNotFound(id))?;
        if !book.available {
            return Err(AppError::AlreadyBorrowed(book.title.clone()));
        }
        book.available = false;
        tracing::info!(id, title = %book.title, "Book borrowed");
        Ok(book)
    }

    /// Put a lent-out book back on the shelf
    pub fn return_book<'a>(&self, repository: &'a mut Repository, id: i32) -> AppResult<&'a Book> {
        let book = repository
            .books
            .find_by_id_mut(id)
            .ok_or(AppError::BookNotFound(id))?;
        if book.available {
            return Err(AppError::AlreadyAvailable(book.title.clone()));
        }
        book.available = true;
        tracing::info!(id, title = %book.title, "Book returned");
        Ok(book)
    }
}

/// Parse a book id typed by the operator.
pub fn parse_book_id(input: &str) -> AppResult<i32> {
    let trimmed = input.trim();
    trimmed
        .parse::<i32>()
        .map_err(|_| AppError::InvalidInput(format!("not a book id: {:?}", trimmed)))
}

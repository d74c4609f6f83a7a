//! Error types for the library catalog

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Catalog is empty: {0}")]
    EmptyCatalog(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Book with id {0} not found")]
    BookNotFound(i32),

    #[error("Book is already borrowed: {0}")]
    AlreadyBorrowed(String),

    #[error("Book is already in the library: {0}")]
    AlreadyAvailable(String),
}

impl AppError {
    /// Domain-rule violations and bad operator input are recovered inside a
    /// single menu iteration; everything else is a fault worth logging.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::InvalidInput(_)
                | AppError::BookNotFound(_)
                | AppError::AlreadyBorrowed(_)
                | AppError::AlreadyAvailable(_)
        )
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

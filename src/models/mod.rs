//! Data models for the library catalog

pub mod book;
pub mod load_report;
pub mod summary;

// Re-export commonly used types
pub use book::Book;
pub use load_report::{DropReason, DroppedLine, LoadReport};
pub use summary::CatalogSummary;

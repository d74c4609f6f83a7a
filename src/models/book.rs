//! Book (catalog entry) model

/// Status token written for a book on the shelf.
pub const STATUS_AVAILABLE: &str = "available";
/// Status token written for a book that is lent out.
pub const STATUS_BORROWED: &str = "borrowed";

/// One catalog entry.
///
/// `id` comes from the catalog file and is not checked for uniqueness; the
/// only field mutated during a session is `available`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub available: bool,
}

impl Book {
    /// On-disk status token for this book
    pub fn status_token(&self) -> &'static str {
        if self.available {
            STATUS_AVAILABLE
        } else {
            STATUS_BORROWED
        }
    }

    /// Map an on-disk status token. Anything other than the exact
    /// `available` token means the book is lent out.
    pub fn is_available_token(token: &str) -> bool {
        token == STATUS_AVAILABLE
    }
}

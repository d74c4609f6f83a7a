//! Catalog encoder

use crate::models::Book;

use super::HEADER;

/// Encode the full catalog in storage order, header first.
pub fn encode(books: &[Book]) -> String {
    let mut out = String::with_capacity(HEADER.len() + 1 + books.len() * 64);
    out.push_str(HEADER);
    out.push('\n');
    for book in books {
        out.push_str(&encode_line(book));
        out.push('\n');
    }
    out
}

/// Encode one record line without its terminator.
pub fn encode_line(book: &Book) -> String {
    format!(
        "{},{},{},{},{},{}",
        book.id,
        book.title,
        book.author,
        book.year,
        book.genre,
        book.status_token()
    )
}

//! Catalog decoder
//!
//! Turns catalog text into books. Lines that cannot be decoded are skipped
//! and recorded in the returned [`LoadReport`].

use crate::models::{Book, DropReason, DroppedLine, LoadReport};

/// Decode a whole catalog file.
///
/// The first line is treated as a header and skipped without inspection.
/// Blank lines are skipped silently.
pub fn decode(content: &str) -> (Vec<Book>, LoadReport) {
    let mut books = Vec::new();
    let mut report = LoadReport::default();

    // `lines` also strips the `\r` of CRLF terminators
    for (idx, line) in content.lines().enumerate().skip(1) {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line) {
            Ok(book) => books.push(book),
            Err(reason) => {
                match &reason {
                    DropReason::FieldCount(count) => {
                        tracing::debug!(line = line_no, fields = *count, "Dropping catalog line");
                    }
                    DropReason::InvalidNumber { .. } => {
                        tracing::warn!(line = line_no, %reason, "Dropping catalog line");
                    }
                }
                report.dropped.push(DroppedLine {
                    line: line_no,
                    reason,
                });
            }
        }
    }

    report.loaded = books.len();
    (books, report)
}

/// Decode a single record line (without its line terminator).
pub fn parse_line(line: &str) -> Result<Book, DropReason> {
    // A single trailing comma closes the last field instead of opening an
    // empty one: `1,T,A,2000,G,` has five fields.
    let fields: Vec<&str> = line.strip_suffix(',').unwrap_or(line).split(',').collect();
    let [id, title, author, year, genre, status] = fields.as_slice() else {
        return Err(DropReason::FieldCount(fields.len()));
    };

    Ok(Book {
        id: parse_number("id", id)?,
        title: title.to_string(),
        author: author.to_string(),
        year: parse_number("year", year)?,
        genre: genre.to_string(),
        available: Book::is_available_token(status),
    })
}

fn parse_number(field: &'static str, value: &str) -> Result<i32, DropReason> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| DropReason::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

//! Catalog file codec
//!
//! The catalog is a flat comma-separated file with a single header line and
//! one book per line:
//!
//! ```text
//! id,title,author,year,genre,status
//! 1,Some Title,Some Author,2001,Fiction,available
//! ```
//!
//! There is no quoting or escaping. A title or author containing a comma
//! shifts the remaining fields and the line is dropped on load (or, when the
//! count happens to stay at six, decoded with the wrong field contents).
//! Introducing quoting would change the on-disk format.

pub mod parser;
pub mod writer;

pub use parser::{decode, parse_line};
pub use writer::{encode, encode_line};

/// Header line written at the top of every catalog file.
pub const HEADER: &str = "id,title,author,year,genre,status";

/// Number of comma-separated fields in a record line.
pub const FIELD_COUNT: usize = 6;

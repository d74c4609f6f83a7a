//! Text rendering for the operator console

use std::borrow::Cow;
use std::io::{self, Write};

use crate::{
    console::menu::MenuChoice,
    error::AppError,
    models::{Book, CatalogSummary},
};

const ID_WIDTH: usize = 4;
const TITLE_WIDTH: usize = 32;
const AUTHOR_WIDTH: usize = 18;
const GENRE_WIDTH: usize = 14;
const YEAR_WIDTH: usize = 6;
const STATUS_WIDTH: usize = 11;

const COLUMN_WIDTHS: [usize; 6] = [
    ID_WIDTH,
    TITLE_WIDTH,
    AUTHOR_WIDTH,
    GENRE_WIDTH,
    YEAR_WIDTH,
    STATUS_WIDTH,
];

pub fn banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "==============================")?;
    writeln!(out, "       LIBRARY CATALOG        ")?;
    writeln!(out, "==============================")?;
    writeln!(out)
}

pub fn menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Choose an option:")?;
    for choice in MenuChoice::ALL {
        writeln!(out, " {}. {}", choice.key(), choice.label())?;
    }
    write!(out, "Your choice: ")?;
    out.flush()
}

/// Write a prompt and flush so it shows before the read blocks.
pub fn prompt(out: &mut impl Write, text: &str) -> io::Result<()> {
    write!(out, "{}", text)?;
    out.flush()
}

/// Render books as a bordered table, one row per book in the given order.
pub fn book_table<'a, I>(out: &mut impl Write, books: I) -> io::Result<()>
where
    I: IntoIterator<Item = &'a Book>,
{
    separator(out)?;
    row(out, ["ID", "Title", "Author", "Genre", "Year", "Status"])?;
    separator(out)?;
    for book in books {
        let id = book.id.to_string();
        let year = book.year.to_string();
        let title = truncate(&book.title, TITLE_WIDTH);
        let author = truncate(&book.author, AUTHOR_WIDTH);
        let genre = truncate(&book.genre, GENRE_WIDTH);
        let status = if book.available { "Available" } else { "Borrowed" };
        row(out, [id.as_str(), &*title, &*author, &*genre, year.as_str(), status])?;
    }
    separator(out)
}

pub fn summary(out: &mut impl Write, summary: &CatalogSummary) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Collection summary:")?;
    writeln!(out, " - Total titles: {}", summary.total)?;
    writeln!(out, " - Available:    {}", summary.available)?;
    writeln!(out, " - Borrowed:     {}", summary.borrowed)
}

/// Operator-facing message for an error raised inside a menu action.
pub fn error_message(err: &AppError) -> Cow<'static, str> {
    match err {
        AppError::InvalidInput(_) => Cow::Borrowed("Invalid input."),
        AppError::BookNotFound(_) => Cow::Borrowed("Book ID not found."),
        AppError::AlreadyBorrowed(_) => {
            Cow::Borrowed("That book is already borrowed. Please choose another.")
        }
        AppError::AlreadyAvailable(_) => Cow::Borrowed("That book is already in the library."),
        other => Cow::Owned(format!("Error: {}", other)),
    }
}

/// Shorten `text` to at most `width` characters, marking the cut with `...`.
pub fn truncate(text: &str, width: usize) -> Cow<'_, str> {
    if text.chars().count() <= width {
        return Cow::Borrowed(text);
    }
    if width <= 3 {
        return Cow::Owned(text.chars().take(width).collect());
    }
    let mut short: String = text.chars().take(width - 3).collect();
    short.push_str("...");
    Cow::Owned(short)
}

fn separator(out: &mut impl Write) -> io::Result<()> {
    for width in COLUMN_WIDTHS {
        write!(out, "+{}", "-".repeat(width + 2))?;
    }
    writeln!(out, "+")
}

fn row(out: &mut impl Write, cells: [&str; 6]) -> io::Result<()> {
    for (cell, width) in cells.iter().zip(COLUMN_WIDTHS) {
        write!(out, "| {:<width$} ", cell, width = width)?;
    }
    writeln!(out, "|")
}

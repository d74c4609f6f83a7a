//! Interactive menu session
//!
//! A session owns the catalog for the lifetime of the process and runs the
//! menu loop until the operator saves and exits or input runs out. The
//! catalog file is only written by the save-and-exit choice.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::{
    console::{menu::MenuChoice, render},
    error::{AppError, AppResult},
    repository::Repository,
    services::{loans::parse_book_id, Services},
};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The operator chose save-and-exit and the catalog was written.
    Saved,
    /// Input closed before save-and-exit; in-session changes are discarded.
    Abandoned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Running,
    Stopped(SessionOutcome),
}

#[derive(Debug)]
pub struct Session<R, W> {
    services: Services,
    repository: Repository,
    catalog_path: PathBuf,
    input: R,
    output: W,
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(repository: Repository, catalog_path: PathBuf, input: R, output: W) -> Self {
        Self {
            services: Services::new(),
            repository,
            catalog_path,
            input,
            output,
            state: SessionState::Running,
        }
    }

    /// Run the menu loop to completion.
    ///
    /// Only I/O failures on the operator streams end the loop with an error;
    /// everything raised by a menu action is reported and the loop continues.
    pub fn run(&mut self) -> AppResult<SessionOutcome> {
        render::banner(&mut self.output)?;
        loop {
            if let SessionState::Stopped(outcome) = self.state {
                return Ok(outcome);
            }
            render::menu(&mut self.output)?;
            match self.read_line()? {
                Some(line) => self.step(&line)?,
                None => self.abandon()?,
            }
        }
    }

    /// Handle one line of menu input.
    pub fn step(&mut self, input: &str) -> AppResult<()> {
        match input.parse::<MenuChoice>() {
            Ok(choice) => {
                tracing::debug!(?choice, "Menu choice");
                self.dispatch(choice)
            }
            Err(err) => {
                tracing::debug!(error = %err, "Rejected menu input");
                writeln!(self.output, "Unrecognized choice. Please pick 1-6.")?;
                Ok(())
            }
        }
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    /// Whether the loop would render another menu.
    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Consume the session and hand back the operator output.
    pub fn into_output(self) -> W {
        self.output
    }

    fn dispatch(&mut self, choice: MenuChoice) -> AppResult<()> {
        match choice {
            MenuChoice::List => self.list(),
            MenuChoice::Search => self.search(),
            MenuChoice::Borrow => self.borrow(),
            MenuChoice::Return => self.return_book(),
            MenuChoice::Summary => {
                let summary = self.services.stats.summary(&self.repository);
                render::summary(&mut self.output, &summary)?;
                Ok(())
            }
            MenuChoice::SaveAndExit => self.save_and_exit(),
        }
    }

    fn list(&mut self) -> AppResult<()> {
        match self.services.catalog.list(&self.repository) {
            Some(books) => render::book_table(&mut self.output, books)?,
            None => writeln!(self.output, "No books in the catalog yet.")?,
        }
        Ok(())
    }

    fn search(&mut self) -> AppResult<()> {
        render::prompt(&mut self.output, "Enter a title/author keyword: ")?;
        let Some(query) = self.read_line()? else {
            return self.abandon();
        };

        let results = self.services.catalog.search(&self.repository, &query);
        if results.is_empty() {
            writeln!(self.output, "No books match that keyword.")?;
            return Ok(());
        }
        writeln!(self.output)?;
        writeln!(self.output, "Search results:")?;
        render::book_table(&mut self.output, results)?;
        Ok(())
    }

    fn borrow(&mut self) -> AppResult<()> {
        let Some(id) = self.prompt_book_id("Enter the ID of the book to borrow: ")? else {
            return Ok(());
        };
        match self.services.loans.borrow(&mut self.repository, id) {
            Ok(book) => writeln!(self.output, "Borrowed: {}", book.title)?,
            Err(err) => report(&mut self.output, &err)?,
        }
        Ok(())
    }

    fn return_book(&mut self) -> AppResult<()> {
        let Some(id) = self.prompt_book_id("Enter the ID of the book to return: ")? else {
            return Ok(());
        };
        match self.services.loans.return_book(&mut self.repository, id) {
            Ok(book) => {
                writeln!(self.output, "Thank you, return recorded for: {}", book.title)?;
            }
            Err(err) => report(&mut self.output, &err)?,
        }
        Ok(())
    }

    fn save_and_exit(&mut self) -> AppResult<()> {
        match self.repository.save(&self.catalog_path) {
            Ok(()) => {
                self.state = SessionState::Stopped(SessionOutcome::Saved);
                writeln!(self.output, "Changes saved. Goodbye!")?;
            }
            Err(err) => {
                // Stay running so the operator can retry
                tracing::error!(
                    path = %self.catalog_path.display(),
                    error = %err,
                    "Failed to save catalog"
                );
                writeln!(self.output, "Could not save the catalog: {}", err)?;
            }
        }
        Ok(())
    }

    /// Prompt for a book id. `None` means nothing should happen: either the
    /// input was rejected (and reported) or input closed.
    fn prompt_book_id(&mut self, text: &str) -> AppResult<Option<i32>> {
        render::prompt(&mut self.output, text)?;
        let Some(line) = self.read_line()? else {
            self.abandon()?;
            return Ok(None);
        };
        match parse_book_id(&line) {
            Ok(id) => Ok(Some(id)),
            Err(err) => {
                report(&mut self.output, &err)?;
                Ok(None)
            }
        }
    }

    fn abandon(&mut self) -> AppResult<()> {
        tracing::warn!("Input closed before save; discarding session changes");
        self.state = SessionState::Stopped(SessionOutcome::Abandoned);
        writeln!(self.output)?;
        writeln!(self.output, "Input closed. Changes were not saved.")?;
        Ok(())
    }

    /// Read one line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> AppResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

fn report(out: &mut impl Write, err: &AppError) -> AppResult<()> {
    if err.is_recoverable() {
        tracing::debug!(error = %err, "Menu action rejected");
    } else {
        tracing::error!(error = %err, "Menu action failed");
    }
    writeln!(out, "{}", render::error_message(err))?;
    Ok(())
}

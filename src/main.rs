//! Library Catalog - interactive lending console
//!
//! Loads the catalog file, runs the operator menu on stdin/stdout and writes
//! the catalog back when the operator chooses save-and-exit.

use std::io;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt};

use library_catalog::{
    config::{AppConfig, LoggingConfig},
    console::{Session, SessionOutcome},
    error::AppError,
    models::LoadReport,
    repository::Repository,
};

fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    // Must outlive the session so buffered log lines reach the file
    let _log_guard = init_tracing(&config.logging)?;

    tracing::info!("Starting Library Catalog v{}", env!("CARGO_PKG_VERSION"));

    let catalog_path = config.catalog.path.clone();
    let (repository, report) = match Repository::load(&catalog_path) {
        Ok(loaded) => loaded,
        Err(err) => {
            tracing::error!(path = %catalog_path.display(), error = %err, "Failed to read catalog");
            eprintln!("Cannot open catalog file: {}", catalog_path.display());
            (Repository::default(), LoadReport::default())
        }
    };

    if repository.books.is_empty() {
        let err = AppError::EmptyCatalog(catalog_path.display().to_string());
        tracing::error!(error = %err, "Refusing to start");
        println!(
            "No books to show. Make sure {} exists and lists at least one book.",
            catalog_path.display()
        );
        return Ok(ExitCode::from(1));
    }

    let malformed = report.invalid_numbers().count();
    if malformed > 0 {
        println!(
            "Note: skipped {} catalog line(s) with a malformed id or year.",
            malformed
        );
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(repository, catalog_path, stdin.lock(), stdout.lock());
    match session.run()? {
        SessionOutcome::Saved => tracing::info!("Session ended with save"),
        SessionOutcome::Abandoned => tracing::info!("Session ended without save"),
    }

    Ok(ExitCode::SUCCESS)
}

/// Install the global subscriber. Stdout belongs to the operator, so events
/// go to stderr unless a log file is configured.
fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_catalog={}", logging.level).into());

    let (writer, guard, ansi) = match &logging.file {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(open_log_file(path)?);
            (BoxMakeWriter::new(writer), Some(guard), false)
        }
        None => (BoxMakeWriter::new(io::stderr), None, true),
    };

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi);
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer).init();
    }

    Ok(guard)
}

/// Open `path` for appending log events, creating its directory if needed.
fn open_log_file(path: &Path) -> anyhow::Result<RollingFileAppender> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("logging.file has no file name: {}", path.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

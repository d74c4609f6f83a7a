//! Library Catalog
//!
//! Single-operator lending console over a flat catalog file: list, search,
//! borrow, return and summarize books, then save the catalog on exit.

pub mod codec;
pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use crate::config::AppConfig;
pub use crate::error::{AppError, AppResult};

//! Local mood journal: an append-only SQLite store of entries tagged with an
//! emotion color, a weekly "Wrapped" aggregate over them, and a JSON export.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;

pub use error::{AppError, AppResult};

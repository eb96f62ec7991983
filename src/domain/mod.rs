//! Domain layer - core types for issue records.
//!
//! This layer contains pure domain models, configuration types, and error
//! types without any external dependencies (environment, IO, etc.).

pub mod config;
pub mod error;
pub mod models;

pub use config::{AppConfig, ExportSettings, OutputConfig};
pub use error::{AppError, Result};
pub use models::{sanitize_title, IssueRecord, DEFAULT_TITLE};

//! PES Faculty: a crawler for the PES University staff directory
//!
//! This crate walks the paginated staff listings of the directory site,
//! collects faculty identifiers and extracts each faculty profile into a
//! structured [`Professor`] record.

pub mod config;
pub mod crawler;
pub mod directory;
pub mod model;
pub mod url;

use thiserror::Error;

/// Main error type for crawler operations
#[derive(Debug, Error)]
pub enum FacultyError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid filter: {0}")]
    InvalidFilter(#[from] FilterError),

    #[error("Failed to fetch URL: {url} ({reason})")]
    Fetch { url: String, reason: String },

    #[error("Malformed profile at {url}: {message}")]
    MalformedProfile { url: String, message: String },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Rejected campus or department filters
///
/// Raised before any network access takes place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("unknown campus '{0}'")]
    UnknownCampus(String),

    #[error("unknown department '{0}'")]
    UnknownDepartment(String),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for crawler operations
pub type Result<T> = std::result::Result<T, FacultyError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{FacultyCrawler, FetchResult, HttpTransport, Transport};
pub use model::{FacultyQuery, Professor};
pub use crate::url::plan;

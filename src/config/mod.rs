//! Configuration module for the faculty crawler
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a default, so [`Config::default`] points at the live directory.
//!
//! # Example
//!
//! ```no_run
//! use pes_faculty::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("faculty.toml")).unwrap();
//! println!("Crawling {}", config.directory.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, DirectoryConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;

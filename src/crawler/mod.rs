//! Crawler module for directory fetching and extraction
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the [`Transport`] trait
//! - Listing, search and profile page parsing
//! - Pagination of listing URLs
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod paginator;
mod parser;
mod profile;
#[cfg(test)]
mod testing;

pub use coordinator::FacultyCrawler;
pub use fetcher::{
    build_http_client, fetch_url, user_agent_string, FetchResult, HttpTransport, Transport,
};
pub use paginator::paginate;
pub use parser::{parse_listing_page, parse_search_results, ListingPage};
pub use profile::parse_profile;

use crate::config::Config;
use crate::model::{FacultyQuery, Professor};
use crate::FacultyError;

/// Runs a complete crawl over HTTP
///
/// This is the main entry point for a crawl. It will:
/// 1. Validate the configuration and build the HTTP client
/// 2. Validate the campus/department filters and plan listing URLs
/// 3. Walk every listing for faculty identifiers (or run a name search)
/// 4. Extract each profile and apply the designation filter
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `query` - Campus, department, designation and name filters
///
/// # Returns
///
/// * `Ok(Vec<Professor>)` - Matching professors in discovery order
/// * `Err(FacultyError)` - Invalid configuration or filters, or a failure the
///   configuration does not allow to be skipped
pub async fn crawl(config: Config, query: &FacultyQuery) -> Result<Vec<Professor>, FacultyError> {
    FacultyCrawler::new(config)?.run(query).await
}

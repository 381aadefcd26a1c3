//! Crawler coordinator - main crawl orchestration logic
//!
//! This module ties the pieces of a crawl together:
//! - Planning the listing URLs for a campus/department filter
//! - Walking each listing for faculty identifiers
//! - Extracting every profile, or running a name search instead
//! - Applying the designation filter in discovery order

use crate::config::{validate, Config};
use crate::crawler::fetcher::{FetchResult, HttpTransport, Transport};
use crate::crawler::paginator::paginate;
use crate::crawler::parser::parse_search_results;
use crate::crawler::profile::parse_profile;
use crate::model::{FacultyQuery, Professor};
use crate::url::{plan, profile_url, search_url};
use crate::FacultyError;
use std::collections::HashSet;

/// Crawls the staff directory through a [`Transport`]
pub struct FacultyCrawler<T = HttpTransport> {
    config: Config,
    transport: T,
}

impl FacultyCrawler<HttpTransport> {
    /// Creates a crawler that fetches over HTTP
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    ///
    /// # Returns
    ///
    /// * `Ok(FacultyCrawler)` - Successfully created crawler
    /// * `Err(FacultyError)` - Invalid configuration or HTTP client failure
    pub fn new(config: Config) -> Result<Self, FacultyError> {
        validate(&config)?;
        let transport = HttpTransport::new(&config.user_agent, &config.crawler)?;
        Ok(Self { config, transport })
    }
}

impl<T: Transport> FacultyCrawler<T> {
    /// Creates a crawler over a caller-supplied transport
    pub fn with_transport(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Plans the listing URLs for a campus/department filter
    pub fn plan(
        &self,
        campus: Option<&str>,
        department: Option<&str>,
    ) -> Result<Vec<String>, FacultyError> {
        Ok(plan(&self.config.directory.base_url, campus, department)?)
    }

    /// Collects the faculty identifiers of every page of one listing
    pub async fn paginate(&self, listing_url: &str) -> Vec<String> {
        paginate(
            &self.transport,
            listing_url,
            self.config.crawler.max_pages_per_listing,
        )
        .await
    }

    /// Fetches and extracts one faculty profile
    ///
    /// # Returns
    ///
    /// * `Ok(Professor)` - The extracted profile
    /// * `Err(FacultyError::Fetch)` - The profile page could not be fetched
    /// * `Err(FacultyError::MalformedProfile)` - The page has no name or
    ///   designation
    pub async fn extract(&self, faculty_id: &str) -> Result<Professor, FacultyError> {
        let url = profile_url(&self.config.directory.base_url, faculty_id);
        tracing::debug!("Fetching profile {}", url);

        let body = match self.transport.get(&url).await {
            FetchResult::Success { body, .. } => body,
            failure => {
                return Err(FacultyError::Fetch {
                    reason: failure.failure_reason().unwrap_or_default(),
                    url,
                })
            }
        };

        parse_profile(&body, &self.config.directory.email_domain)
            .map_err(|message| FacultyError::MalformedProfile { url, message })
    }

    /// Searches the directory by name and extracts every match
    ///
    /// Matches whose profile cannot be extracted are left out.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Professor>)` - Extracted matches in result order
    /// * `Err(FacultyError::Fetch)` - The search page could not be fetched
    pub async fn search_by_name(&self, query: &str) -> Result<Vec<Professor>, FacultyError> {
        let url = search_url(&self.config.directory.base_url, query);
        tracing::info!("Searching faculty by name: {}", query);

        let body = match self.transport.get(&url).await {
            FetchResult::Success { body, .. } => body,
            failure => {
                return Err(FacultyError::Fetch {
                    reason: failure.failure_reason().unwrap_or_default(),
                    url,
                })
            }
        };

        let faculty_ids = self.dedupe(parse_search_results(&body), &mut HashSet::new());
        tracing::debug!("Search for '{}' matched {} faculty", query, faculty_ids.len());

        let mut professors = Vec::with_capacity(faculty_ids.len());
        for faculty_id in &faculty_ids {
            match self.extract(faculty_id).await {
                Ok(professor) => professors.push(professor),
                Err(e) => tracing::warn!("Skipping search match {}: {}", faculty_id, e),
            }
        }

        Ok(professors)
    }

    /// Runs a complete crawl for the given filters
    ///
    /// Campus and department are validated before any request, in every
    /// mode. With a name set the crawl is a name search and the other filters
    /// are not applied. Otherwise the result follows plan order, then
    /// discovery order within each listing, keeping professors whose
    /// designation list contains the requested designation exactly.
    ///
    /// A profile that fails to extract is logged and skipped, unless
    /// `abort-on-profile-error` is configured.
    pub async fn run(&self, query: &FacultyQuery) -> Result<Vec<Professor>, FacultyError> {
        let listing_urls = self.plan(query.campus.as_deref(), query.department.as_deref())?;

        if let Some(name) = &query.name {
            return self.search_by_name(name).await;
        }

        tracing::info!("Crawling {} listing URLs", listing_urls.len());

        let mut seen = HashSet::new();
        let mut professors = Vec::new();
        let mut skipped = 0usize;

        for listing_url in &listing_urls {
            let faculty_ids = self.dedupe(self.paginate(listing_url).await, &mut seen);
            tracing::debug!("{} yielded {} faculty", listing_url, faculty_ids.len());

            for faculty_id in &faculty_ids {
                let professor = match self.extract(faculty_id).await {
                    Ok(professor) => professor,
                    Err(e) if self.config.crawler.abort_on_profile_error => return Err(e),
                    Err(e) => {
                        tracing::warn!("Skipping faculty {}: {}", faculty_id, e);
                        skipped += 1;
                        continue;
                    }
                };

                if query.accepts(&professor) {
                    professors.push(professor);
                }
            }
        }

        tracing::info!(
            "Crawl completed: {} professors kept, {} profiles skipped",
            professors.len(),
            skipped
        );

        Ok(professors)
    }

    /// Drops identifiers already in `seen` when deduplication is enabled
    fn dedupe(&self, faculty_ids: Vec<String>, seen: &mut HashSet<String>) -> Vec<String> {
        if !self.config.crawler.deduplicate {
            return faculty_ids;
        }
        faculty_ids
            .into_iter()
            .filter(|id| seen.insert(id.clone()))
            .collect()
    }
}

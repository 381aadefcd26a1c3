//! Listing pagination
//!
//! Walks a listing from page 1, following the page number each page's
//! "next" link reports. Failures end the walk quietly: whatever earlier
//! pages produced is kept.

use crate::crawler::fetcher::{FetchResult, Transport};
use crate::crawler::parser::parse_listing_page;
use crate::url::page_url;
use std::collections::HashSet;

/// Collects every faculty identifier of one listing URL
///
/// # Termination
///
/// The walk stops when a page has no next link, when a page fails to fetch
/// or parse, when the next link points at a page already visited, or after
/// `max_pages` pages.
///
/// # Arguments
///
/// * `transport` - Fetches the listing pages
/// * `listing_url` - Listing URL without a page parameter
/// * `max_pages` - Upper bound on pages fetched
///
/// # Returns
///
/// Identifiers in page order, then document order within each page. Never
/// fails; a first-page failure yields an empty list.
pub async fn paginate<T>(transport: &T, listing_url: &str, max_pages: u32) -> Vec<String>
where
    T: Transport + ?Sized,
{
    let mut faculty_ids = Vec::new();
    let mut visited = HashSet::new();
    let mut next_page = Some(1u32);

    while let Some(page) = next_page.take() {
        if visited.len() >= max_pages as usize {
            tracing::warn!(
                "Stopping {} after {} pages (page limit reached)",
                listing_url,
                max_pages
            );
            break;
        }

        if !visited.insert(page) {
            tracing::warn!(
                "Listing {} points back to page {}, stopping",
                listing_url,
                page
            );
            break;
        }

        let url = page_url(listing_url, page);
        tracing::debug!("Fetching listing page {}", url);

        let body = match transport.get(&url).await {
            FetchResult::Success { body, .. } => body,
            failure => {
                tracing::warn!(
                    "Listing page {} unavailable ({}), keeping {} identifiers",
                    url,
                    failure.failure_reason().unwrap_or_default(),
                    faculty_ids.len()
                );
                break;
            }
        };

        match parse_listing_page(&body) {
            Ok(listing) => {
                tracing::debug!(
                    "Page {} listed {} faculty, next page {:?}",
                    page,
                    listing.faculty_ids.len(),
                    listing.next_page
                );
                faculty_ids.extend(listing.faculty_ids);
                next_page = listing.next_page;
            }
            Err(e) => {
                tracing::warn!("Failed to parse listing page {}: {}", url, e);
                break;
            }
        }
    }

    faculty_ids
}

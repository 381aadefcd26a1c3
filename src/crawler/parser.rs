//! HTML parsing for listing and search pages
//!
//! This module handles parsing directory pages to extract:
//! - Faculty identifiers from listing entries and search result cards
//! - The next page number advertised by a listing page

use crate::url::faculty_id_from_href;
use scraper::{ElementRef, Html, Selector};

/// Extracted information from one listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage {
    /// Page number the "next" link points at, if any
    pub next_page: Option<u32>,

    /// Identifiers of the listed faculty, in document order
    pub faculty_ids: Vec<String>,
}

/// Compiles a CSS selector, reporting failures as parse errors
pub(crate) fn selector(css: &str) -> Result<Selector, String> {
    Selector::parse(css).map_err(|e| format!("invalid selector '{}': {:?}", css, e))
}

/// Collects the trimmed visible text of an element
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Parses a listing page
///
/// # Markup
///
/// - next link: `a.nextposts-link`, page number after the last `?page=`
/// - entries: `div.staff-profile` each holding an `a.geodir-category-img_item`
///
/// # Returns
///
/// * `Ok(ListingPage)` - Successfully parsed page
/// * `Err(String)` - The next link or an entry is malformed; the page as a
///   whole is unusable
///
/// # Example
///
/// ```
/// use pes_faculty::crawler::parse_listing_page;
///
/// let html = r#"
///     <div class="staff-profile"><a class="geodir-category-img_item" href="https://staff.pes.edu/abc/">A</a></div>
///     <a class="nextposts-link" href="https://staff.pes.edu/rr/atoz/law?page=2">Next</a>
/// "#;
/// let page = parse_listing_page(html).unwrap();
/// assert_eq!(page.next_page, Some(2));
/// assert_eq!(page.faculty_ids, vec!["abc"]);
/// ```
pub fn parse_listing_page(html: &str) -> Result<ListingPage, String> {
    let document = Html::parse_document(html);

    let next_page = extract_next_page(&document)?;
    let faculty_ids = extract_listing_ids(&document)?;

    Ok(ListingPage {
        next_page,
        faculty_ids,
    })
}

/// Reads the page number from the "next page" link
fn extract_next_page(document: &Html) -> Result<Option<u32>, String> {
    let next_selector = selector("a.nextposts-link")?;

    let Some(link) = document.select(&next_selector).next() else {
        return Ok(None);
    };

    let href = link
        .value()
        .attr("href")
        .ok_or_else(|| "next page link has no href".to_string())?;

    let number = href.rsplit("?page=").next().unwrap_or_default().trim();
    number
        .parse::<u32>()
        .map(Some)
        .map_err(|e| format!("bad next page number in '{}': {}", href, e))
}

/// Extracts one identifier per `div.staff-profile` entry
fn extract_listing_ids(document: &Html) -> Result<Vec<String>, String> {
    let entry_selector = selector("div.staff-profile")?;
    let link_selector = selector("a.geodir-category-img_item")?;

    document
        .select(&entry_selector)
        .map(|entry| {
            let href = entry
                .select(&link_selector)
                .next()
                .and_then(|link| link.value().attr("href"))
                .ok_or_else(|| "staff entry has no profile link".to_string())?;

            faculty_id_from_href(href)
                .ok_or_else(|| format!("profile link '{}' has no identifier", href))
        })
        .collect()
}

/// Parses a name-search result page into faculty identifiers
///
/// Result cards are `div.col-md-3.left-padding-0` holding an
/// `a.chat-contacts-item`. Cards without a usable link are skipped.
pub fn parse_search_results(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let (Ok(card_selector), Ok(link_selector)) = (
        selector("div.col-md-3.left-padding-0"),
        selector("a.chat-contacts-item"),
    ) else {
        return Vec::new();
    };

    document
        .select(&card_selector)
        .filter_map(|card| {
            let href = card.select(&link_selector).next()?.value().attr("href")?;
            let id = faculty_id_from_href(href);
            if id.is_none() {
                tracing::debug!("Skipping search card with unusable link {}", href);
            }
            id
        })
        .collect()
}

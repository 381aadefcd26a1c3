//! URL handling for the staff directory
//!
//! This module builds listing, profile and search URLs from the directory's
//! templates, plans which listings a crawl visits, and pulls faculty
//! identifiers out of profile links.

mod segment;
mod templates;

use crate::directory::{resolve_department, validate_campus, CAMPUSES, DEPARTMENTS};
use crate::FilterError;

// Re-export main functions
pub use segment::faculty_id_from_href;
pub use templates::{listing_url, page_url, profile_url, search_url};

/// Plans the listing URLs to crawl for a campus/department filter
///
/// Both filters are validated before anything is built. The department is
/// checked first.
///
/// | campus | department | result |
/// |--------|------------|--------|
/// | none   | none       | the unfiltered root listing |
/// | none   | set        | one URL per campus, in [`CAMPUSES`] order |
/// | set    | none       | one URL per department, in [`DEPARTMENTS`] order |
/// | set    | set        | exactly one URL |
///
/// # Arguments
///
/// * `base_url` - Root of the directory site
/// * `campus` - Optional campus code
/// * `department` - Optional department short code
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Listing URLs in deterministic order
/// * `Err(FilterError)` - A filter is not in the fixed tables
///
/// # Examples
///
/// ```
/// use pes_faculty::url::plan;
///
/// let urls = plan("https://staff.pes.edu", Some("rr"), Some("cse")).unwrap();
/// assert_eq!(urls, vec!["https://staff.pes.edu/rr/atoz/computer-science"]);
///
/// assert!(plan("https://staff.pes.edu", Some("xx"), None).is_err());
/// ```
pub fn plan(
    base_url: &str,
    campus: Option<&str>,
    department: Option<&str>,
) -> Result<Vec<String>, FilterError> {
    let department_segment = department.map(resolve_department).transpose()?;
    if let Some(campus) = campus {
        validate_campus(campus)?;
    }

    let urls = match (campus, department_segment) {
        (None, None) => vec![listing_url(base_url, "", "")],
        (None, Some(segment)) => CAMPUSES
            .iter()
            .map(|campus| listing_url(base_url, campus, segment))
            .collect(),
        (Some(campus), None) => DEPARTMENTS
            .iter()
            .map(|(_, segment)| listing_url(base_url, campus, segment))
            .collect(),
        (Some(campus), Some(segment)) => vec![listing_url(base_url, campus, segment)],
    };

    Ok(urls)
}

//! URL templates of the staff directory
//!
//! All builders take the configured base URL so the same templates serve the
//! live site and mock servers. A trailing `/` on the base is ignored.

use ::url::form_urlencoded;

fn trim_base(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}

/// Builds a listing URL: `{base}/{campus}/atoz/{department}`
///
/// Either segment may be empty; the unfiltered root listing is
/// `{base}//atoz/`.
///
/// # Examples
///
/// ```
/// use pes_faculty::url::listing_url;
///
/// assert_eq!(
///     listing_url("https://staff.pes.edu", "rr", "computer-science"),
///     "https://staff.pes.edu/rr/atoz/computer-science"
/// );
/// assert_eq!(listing_url("https://staff.pes.edu", "", ""), "https://staff.pes.edu//atoz/");
/// ```
pub fn listing_url(base_url: &str, campus: &str, department_segment: &str) -> String {
    format!(
        "{}/{}/atoz/{}",
        trim_base(base_url),
        campus,
        department_segment
    )
}

/// Appends the page parameter to a listing URL
pub fn page_url(listing_url: &str, page: u32) -> String {
    format!("{}?page={}", listing_url, page)
}

/// Builds the profile URL for a faculty identifier
pub fn profile_url(base_url: &str, faculty_id: &str) -> String {
    format!("{}/{}", trim_base(base_url), faculty_id)
}

/// Builds the name-search URL, form-encoding the query
pub fn search_url(base_url: &str, query: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("{}/atoz/list/?search={}", trim_base(base_url), encoded)
}

/// Extracts a faculty identifier from a profile link
///
/// The identifier is the last non-empty path segment of the link, ignoring
/// any query, fragment or trailing `/`. Works on absolute and relative links.
///
/// # Returns
///
/// * `Some(String)` - The identifier
/// * `None` - The link has no usable path segment
///
/// # Examples
///
/// ```
/// use pes_faculty::url::faculty_id_from_href;
///
/// assert_eq!(
///     faculty_id_from_href("https://staff.pes.edu/6d1f2a3b/"),
///     Some("6d1f2a3b".to_string())
/// );
/// assert_eq!(faculty_id_from_href("/"), None);
/// ```
pub fn faculty_id_from_href(href: &str) -> Option<String> {
    let href = href.trim();
    let path = href
        .split(|c: char| c == '?' || c == '#')
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');

    // A bare scheme and host is not a profile path
    let path = match path.split_once("://") {
        Some((_, rest)) => rest.split_once('/').map(|(_, p)| p).unwrap_or_default(),
        None => path,
    };

    path.rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}

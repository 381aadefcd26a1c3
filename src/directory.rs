//! Fixed lookup tables of the staff directory
//!
//! The campus codes and the department code to URL segment mapping are part
//! of the site's URL scheme and are reproduced exactly, in site order.

use crate::FilterError;

/// Campus codes, in the order listings are fanned out over
pub const CAMPUSES: [&str; 3] = ["rr", "ec", "hn"];

/// Department short codes and their URL segments, in fan-out order
pub const DEPARTMENTS: [(&str, &str); 17] = [
    ("arch", "architecture"),
    ("bt", "biotechnology"),
    ("cv", "civil"),
    ("cse", "computer-science"),
    ("cse-aiml", "computer-science-AIML"),
    ("ca", "computer-application"),
    ("des", "design"),
    ("eee", "electrical-&-electronics"),
    ("ece", "electronics-&-communications"),
    ("law", "law"),
    ("me", "mechanical"),
    ("ms", "management-studies"),
    ("sh", "science-&-humanities"),
    ("com", "commerce"),
    ("psy", "psychology"),
    ("cie", "centre-for-innovation-&-entrepreneurship"),
    ("ps", "pharmaceutical-sciences"),
];

/// Returns true if `code` is a known campus code
pub fn is_campus(code: &str) -> bool {
    CAMPUSES.contains(&code)
}

/// Looks up the URL segment for a department short code
pub fn department_segment(code: &str) -> Option<&'static str> {
    DEPARTMENTS
        .iter()
        .find(|(short, _)| *short == code)
        .map(|(_, segment)| *segment)
}

/// Checks a campus filter against [`CAMPUSES`]
pub fn validate_campus(code: &str) -> Result<(), FilterError> {
    if is_campus(code) {
        Ok(())
    } else {
        Err(FilterError::UnknownCampus(code.to_string()))
    }
}

/// Resolves a department filter to its URL segment
pub fn resolve_department(code: &str) -> Result<&'static str, FilterError> {
    department_segment(code).ok_or_else(|| FilterError::UnknownDepartment(code.to_string()))
}

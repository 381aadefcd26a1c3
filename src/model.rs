//! Data model for extracted faculty records and crawl filters

use serde::Serialize;

/// One faculty member as extracted from a profile page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Professor {
    pub name: String,

    /// Roles in display order; the page lists them comma-separated
    pub designation: Vec<String>,

    pub education: Vec<String>,

    pub experience: Vec<String>,

    pub department: Option<String>,

    pub campus: Option<String>,

    /// Teaching domains
    pub domains: Vec<String>,

    pub email: Option<String>,

    pub responsibilities: Vec<String>,
}

impl Professor {
    /// Returns true if `designation` is one of this professor's roles
    ///
    /// The comparison is exact: "Professor" does not match
    /// "Associate Professor".
    pub fn has_designation(&self, designation: &str) -> bool {
        self.designation.iter().any(|d| d == designation)
    }
}

/// Filter criteria for a crawl
///
/// When `name` is set the crawl runs a name search and the other filters
/// do not narrow the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacultyQuery {
    pub campus: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
    pub name: Option<String>,
}

impl FacultyQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn campus(mut self, campus: impl Into<String>) -> Self {
        self.campus = Some(campus.into());
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn designation(mut self, designation: impl Into<String>) -> Self {
        self.designation = Some(designation.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns true if `professor` passes the designation filter
    pub fn accepts(&self, professor: &Professor) -> bool {
        match &self.designation {
            Some(designation) => professor.has_designation(designation),
            None => true,
        }
    }
}

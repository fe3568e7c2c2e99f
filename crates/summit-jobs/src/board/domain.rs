use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a posting in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A single job board entry. Postings are never mutated once the catalog is
/// loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: JobId,
    pub role: String,
    pub company: String,
    pub location: String,
    /// Open-ended label such as "Full-time" or "Contract".
    #[serde(rename = "type")]
    pub employment_type: String,
    pub category: String,
    pub url: String,
}

impl JobPosting {
    pub fn field(&self, field: FilterField) -> &str {
        match field {
            FilterField::Company => &self.company,
            FilterField::Location => &self.location,
            FilterField::EmploymentType => &self.employment_type,
            FilterField::Category => &self.category,
        }
    }
}

/// Postings attributes exposed as exact-match dropdown filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    Company,
    Location,
    #[serde(rename = "type")]
    EmploymentType,
    Category,
}

impl FilterField {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Company,
            Self::Location,
            Self::EmploymentType,
            Self::Category,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Company => "Company",
            Self::Location => "Location",
            Self::EmploymentType => "Type",
            Self::Category => "Category",
        }
    }
}

/// Distinct dropdown values per filter field, in first-seen catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub companies: Vec<String>,
    pub locations: Vec<String>,
    pub types: Vec<String>,
    pub categories: Vec<String>,
}

impl FilterOptions {
    pub fn values(&self, field: FilterField) -> &[String] {
        match field {
            FilterField::Company => &self.companies,
            FilterField::Location => &self.locations,
            FilterField::EmploymentType => &self.types,
            FilterField::Category => &self.categories,
        }
    }

    pub(crate) fn values_mut(&mut self, field: FilterField) -> &mut Vec<String> {
        match field {
            FilterField::Company => &mut self.companies,
            FilterField::Location => &mut self.locations,
            FilterField::EmploymentType => &mut self.types,
            FilterField::Category => &mut self.categories,
        }
    }

    pub fn is_empty(&self) -> bool {
        FilterField::ordered()
            .into_iter()
            .all(|field| self.values(field).is_empty())
    }
}

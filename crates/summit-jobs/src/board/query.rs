use serde::{Deserialize, Deserializer, Serialize};

use super::domain::FilterField;

/// Search and filter state for one visitor's view of the job board.
///
/// Deserializes from the listing endpoint's query string
/// (`?search=&company=&location=&type=&category=&page=`). Missing keys fall
/// back to the defaults: no search term, no filters, first page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobQuery {
    #[serde(rename = "search")]
    pub search_term: String,
    pub company: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub employment_type: Option<String>,
    pub category: Option<String>,
    /// Any integer is accepted; the engine clamps it into the valid range.
    #[serde(deserialize_with = "lenient_page")]
    pub page: u32,
}

impl Default for JobQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            company: None,
            location: None,
            employment_type: None,
            category: None,
            page: 1,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPage {
    Number(i64),
    Text(String),
}

/// Maps negative, blank, or garbled page values to 1 and saturates large ones
/// at `u32::MAX`.
fn lenient_page<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let page = match RawPage::deserialize(deserializer)? {
        RawPage::Number(value) => page_from_number(value),
        RawPage::Text(raw) => {
            let trimmed = raw.trim();
            match trimmed.parse::<i64>() {
                Ok(value) => page_from_number(value),
                Err(_) if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) => {
                    u32::MAX
                }
                Err(_) => 1,
            }
        }
    };
    Ok(page)
}

fn page_from_number(value: i64) -> u32 {
    if value < 1 {
        1
    } else {
        u32::try_from(value).unwrap_or(u32::MAX)
    }
}

/// A single control change on the job board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryChange {
    SearchTerm(String),
    Company(Option<String>),
    Location(Option<String>),
    EmploymentType(Option<String>),
    Category(Option<String>),
    Page(u32),
    ClearFilters,
}

impl QueryChange {
    pub fn filter(field: FilterField, value: Option<String>) -> Self {
        match field {
            FilterField::Company => Self::Company(value),
            FilterField::Location => Self::Location(value),
            FilterField::EmploymentType => Self::EmploymentType(value),
            FilterField::Category => Self::Category(value),
        }
    }
}

impl JobQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active value for a dropdown filter. An empty selection counts as unset.
    pub fn filter(&self, field: FilterField) -> Option<&str> {
        let value = match field {
            FilterField::Company => &self.company,
            FilterField::Location => &self.location,
            FilterField::EmploymentType => &self.employment_type,
            FilterField::Category => &self.category,
        };
        value.as_deref().filter(|value| !value.is_empty())
    }

    pub fn has_filters(&self) -> bool {
        !self.search_term.is_empty()
            || FilterField::ordered()
                .into_iter()
                .any(|field| self.filter(field).is_some())
    }

    /// Produces the next query state. Every change except `Page` lands on the
    /// first page in the same update.
    pub fn apply(self, change: QueryChange) -> Self {
        match change {
            QueryChange::Page(page) => Self { page, ..self },
            QueryChange::ClearFilters => clear_filters(self),
            QueryChange::SearchTerm(search_term) => Self {
                search_term,
                page: 1,
                ..self
            },
            QueryChange::Company(company) => Self {
                company,
                page: 1,
                ..self
            },
            QueryChange::Location(location) => Self {
                location,
                page: 1,
                ..self
            },
            QueryChange::EmploymentType(employment_type) => Self {
                employment_type,
                page: 1,
                ..self
            },
            QueryChange::Category(category) => Self {
                category,
                page: 1,
                ..self
            },
        }
    }
}

/// Drops the search term and every filter and returns to page 1.
pub fn clear_filters(_query: JobQuery) -> JobQuery {
    JobQuery::default()
}

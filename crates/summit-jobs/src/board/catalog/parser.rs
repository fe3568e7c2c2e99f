use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::CatalogError;
use crate::board::domain::{JobId, JobPosting};

#[derive(Debug, Deserialize)]
pub(super) struct CatalogRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    role: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    company: Option<String>,
    #[serde(default)]
    location: String,
    #[serde(rename = "type", default)]
    employment_type: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    url: String,
}

impl CatalogRow {
    /// `row` is the 1-based data row, header excluded.
    pub(super) fn into_posting(self, row: usize) -> Result<JobPosting, CatalogError> {
        let id = required(self.id, row, "id")?;
        let role = required(self.role, row, "role")?;
        let company = required(self.company, row, "company")?;

        Ok(JobPosting {
            id: JobId(id),
            role,
            company,
            location: self.location,
            employment_type: self.employment_type,
            category: self.category,
            url: self.url,
        })
    }
}

fn required(
    value: Option<String>,
    row: usize,
    field: &'static str,
) -> Result<String, CatalogError> {
    value.ok_or(CatalogError::MissingField { row, field })
}

pub(super) fn parse_rows<R: Read>(reader: R) -> Result<Vec<CatalogRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader.deserialize::<CatalogRow>().collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

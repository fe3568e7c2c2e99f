mod parser;
mod sample;

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::info;

use super::domain::{JobId, JobPosting};

pub use sample::sample_catalog;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read job catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid job catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("job catalog row {row} is missing a value for '{field}'")]
    MissingField { row: usize, field: &'static str },
    #[error("job catalog lists id '{0}' more than once")]
    DuplicateId(JobId),
}

/// Loads a job catalog from a CSV export with the headers
/// `id,role,company,location,type,category,url`.
pub struct CatalogImporter;

impl CatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<JobPosting>, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let catalog = Self::from_reader(file)?;
        info!(path = %path.display(), postings = catalog.len(), "job catalog imported");
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<JobPosting>, CatalogError> {
        let mut ids: HashSet<JobId> = HashSet::new();
        let mut catalog = Vec::new();

        for (index, row) in parser::parse_rows(reader)?.into_iter().enumerate() {
            let posting = row.into_posting(index + 1)?;
            if !ids.insert(posting.id.clone()) {
                return Err(CatalogError::DuplicateId(posting.id));
            }
            catalog.push(posting);
        }

        Ok(catalog)
    }
}

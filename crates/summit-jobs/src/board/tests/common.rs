use std::num::NonZeroUsize;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::board::domain::{JobId, JobPosting};
use crate::board::JobListingEngine;

pub(super) fn posting(id: &str, role: &str, company: &str, category: &str) -> JobPosting {
    JobPosting {
        id: JobId::from(id),
        role: role.to_string(),
        company: company.to_string(),
        location: "Remote".to_string(),
        employment_type: "Full-time".to_string(),
        category: category.to_string(),
        url: "#".to_string(),
    }
}

pub(super) fn ids(postings: &[&JobPosting]) -> Vec<String> {
    postings.iter().map(|posting| posting.id.0.clone()).collect()
}

pub(super) fn page_size(size: usize) -> NonZeroUsize {
    NonZeroUsize::new(size).expect("non-zero page size")
}

pub(super) fn sample_engine() -> Arc<JobListingEngine> {
    Arc::new(JobListingEngine::with_sample_catalog())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body readable");
    serde_json::from_slice(&body).expect("body is json")
}

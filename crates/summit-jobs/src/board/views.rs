use serde::Serialize;

use super::domain::JobPosting;
use super::engine::JobListing;
use super::query::JobQuery;

/// Serialized listing page returned to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct JobListingView {
    pub items: Vec<JobPosting>,
    pub page: u32,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_matches: usize,
    pub filters_active: bool,
}

impl JobListingView {
    pub fn from_listing(listing: &JobListing<'_>, query: &JobQuery) -> Self {
        Self {
            items: listing.items.iter().map(|&posting| posting.clone()).collect(),
            page: listing.page,
            page_size: listing.page_size,
            total_pages: listing.total_pages,
            total_matches: listing.total_items,
            filters_active: query.has_filters(),
        }
    }
}

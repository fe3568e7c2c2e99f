use serde::Serialize;
use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::{debug, info};

use super::catalog::sample_catalog;
use super::domain::{FilterField, FilterOptions, JobId, JobPosting};
use super::query::JobQuery;

/// Postings shown per page on the public job board.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(size) => size,
    None => panic!("page size must be non-zero"),
};

/// One page of an ordered result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingPage<T> {
    pub items: Vec<T>,
    /// Page actually served, after clamping the requested page.
    pub page: u32,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> ListingPage<T> {
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        (self.page as usize) < self.total_pages
    }
}

pub type JobListing<'a> = ListingPage<&'a JobPosting>;

pub fn derive_filter_options(catalog: &[JobPosting]) -> FilterOptions {
    let mut options = FilterOptions::default();
    let mut seen: [HashSet<&str>; 4] = Default::default();

    for posting in catalog {
        for (slot, field) in FilterField::ordered().into_iter().enumerate() {
            let value = posting.field(field);
            if seen[slot].insert(value) {
                options.values_mut(field).push(value.to_string());
            }
        }
    }

    options
}

/// Postings matching the search term and every active filter, in catalog
/// order. The query's page is not consulted.
pub fn filter_jobs<'a>(catalog: &'a [JobPosting], query: &JobQuery) -> Vec<&'a JobPosting> {
    let needle = query.search_term.to_lowercase();

    catalog
        .iter()
        .filter(|posting| matches_search(posting, &needle) && matches_filters(posting, query))
        .collect()
}

fn matches_search(posting: &JobPosting, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    [&posting.role, &posting.company, &posting.category]
        .into_iter()
        .any(|value| value.to_lowercase().contains(needle))
}

fn matches_filters(posting: &JobPosting, query: &JobQuery) -> bool {
    FilterField::ordered()
        .into_iter()
        .all(|field| match query.filter(field) {
            Some(expected) => posting.field(field) == expected,
            None => true,
        })
}

/// Slices `items` into the requested 1-based page.
///
/// Out-of-range pages are clamped into `1..=max(1, total_pages)`, so a stale
/// page number never renders an empty page while results exist.
pub fn paginate<T: Clone>(items: &[T], page: u32, page_size: NonZeroUsize) -> ListingPage<T> {
    let size = page_size.get();
    let total_items = items.len();
    let total_pages = total_items.div_ceil(size);
    let page = clamp_page(page, total_pages);

    let start = (page as usize - 1).saturating_mul(size).min(total_items);
    let end = start.saturating_add(size).min(total_items);

    ListingPage {
        items: items[start..end].to_vec(),
        page,
        page_size: size,
        total_items,
        total_pages,
    }
}

fn clamp_page(page: u32, total_pages: usize) -> u32 {
    let last = u32::try_from(total_pages.max(1)).unwrap_or(u32::MAX);
    page.clamp(1, last)
}

/// Read-only job board over a fixed catalog.
#[derive(Debug, Clone)]
pub struct JobListingEngine {
    catalog: Arc<[JobPosting]>,
    options: FilterOptions,
    page_size: NonZeroUsize,
}

impl JobListingEngine {
    pub fn new(catalog: Vec<JobPosting>, page_size: NonZeroUsize) -> Self {
        let options = derive_filter_options(&catalog);
        info!(
            postings = catalog.len(),
            companies = options.companies.len(),
            page_size = page_size.get(),
            "job board catalog loaded"
        );

        Self {
            catalog: catalog.into(),
            options,
            page_size,
        }
    }

    pub fn with_sample_catalog() -> Self {
        Self::new(sample_catalog(), DEFAULT_PAGE_SIZE)
    }

    pub fn catalog(&self) -> &[JobPosting] {
        &self.catalog
    }

    pub fn filter_options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn filter(&self, query: &JobQuery) -> Vec<&JobPosting> {
        filter_jobs(&self.catalog, query)
    }

    pub fn listing(&self, query: &JobQuery) -> JobListing<'_> {
        let matches = self.filter(query);
        let listing = paginate(&matches, query.page, self.page_size);
        debug!(
            search = %query.search_term,
            requested_page = query.page,
            page = listing.page,
            matches = listing.total_items,
            "job board listing derived"
        );
        listing
    }

    pub fn posting(&self, id: &JobId) -> Option<&JobPosting> {
        self.catalog.iter().find(|posting| &posting.id == id)
    }
}

//! Job board for the summit site: an immutable catalog of postings, the
//! search/filter query a visitor builds up, and the paginated listing derived
//! from the two.

pub mod catalog;
pub mod domain;
mod engine;
pub mod query;
pub mod router;
pub mod views;

#[cfg(test)]
mod tests;

pub use catalog::{sample_catalog, CatalogError, CatalogImporter};
pub use domain::{FilterField, FilterOptions, JobId, JobPosting};
pub use engine::{
    derive_filter_options, filter_jobs, paginate, JobListing, JobListingEngine, ListingPage,
    DEFAULT_PAGE_SIZE,
};
pub use query::{clear_filters, JobQuery, QueryChange};
pub use router::job_board_router;
pub use views::JobListingView;

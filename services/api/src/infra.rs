use metrics_exporter_prometheus::PrometheusHandle;
use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use summit_jobs::board::{sample_catalog, CatalogImporter, JobListingEngine};
use summit_jobs::config::JobBoardConfig;
use summit_jobs::error::AppError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds the engine from a CSV export when one is given, otherwise from the
/// built-in sample catalog.
pub(crate) fn load_engine(
    catalog_csv: Option<&Path>,
    page_size: NonZeroUsize,
) -> Result<JobListingEngine, AppError> {
    let catalog = match catalog_csv {
        Some(path) => CatalogImporter::from_path(path)?,
        None => sample_catalog(),
    };

    Ok(JobListingEngine::new(catalog, page_size))
}

pub(crate) fn engine_from_config(config: &JobBoardConfig) -> Result<JobListingEngine, AppError> {
    load_engine(config.catalog_csv.as_deref(), config.page_size)
}

pub(crate) fn parse_page_size(raw: &str) -> Result<NonZeroUsize, String> {
    summit_jobs::config::parse_page_size(raw).map_err(|err| err.to_string())
}

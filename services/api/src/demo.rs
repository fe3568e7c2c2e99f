use crate::infra::{load_engine, parse_page_size};
use clap::Args;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use summit_jobs::board::{FilterField, JobListing, JobListingEngine, JobQuery, QueryChange};
use summit_jobs::config::AppConfig;
use summit_jobs::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// CSV export to load instead of the configured catalog
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct JobsListArgs {
    #[command(flatten)]
    pub(crate) catalog: CatalogArgs,
    /// Case-insensitive search over role, company, and category
    #[arg(long, default_value = "")]
    pub(crate) search: String,
    /// Exact company name
    #[arg(long)]
    pub(crate) company: Option<String>,
    /// Exact location
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Exact employment type, e.g. "Full-time"
    #[arg(long = "type")]
    pub(crate) employment_type: Option<String>,
    /// Exact category
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Page to print (1-based)
    #[arg(long, default_value_t = 1)]
    pub(crate) page: u32,
    /// Override the configured page size
    #[arg(long, value_parser = parse_page_size)]
    pub(crate) page_size: Option<NonZeroUsize>,
}

impl JobsListArgs {
    fn query(&self) -> JobQuery {
        JobQuery {
            search_term: self.search.clone(),
            company: self.company.clone(),
            location: self.location.clone(),
            employment_type: self.employment_type.clone(),
            category: self.category.clone(),
            page: self.page,
        }
    }
}

fn engine_for(
    catalog: CatalogArgs,
    page_size: Option<NonZeroUsize>,
) -> Result<(JobListingEngine, bool), AppError> {
    let config = AppConfig::load()?;
    let catalog_csv = catalog.catalog_csv.or(config.jobs.catalog_csv);
    let imported = catalog_csv.is_some();
    let page_size = page_size.unwrap_or(config.jobs.page_size);

    let engine = load_engine(catalog_csv.as_deref(), page_size)?;
    Ok((engine, imported))
}

pub(crate) fn run_jobs_list(args: JobsListArgs) -> Result<(), AppError> {
    let query = args.query();
    let (engine, imported) = engine_for(args.catalog, args.page_size)?;

    render_source(&engine, imported);
    let listing = engine.listing(&query);
    render_listing(&query, &listing);

    Ok(())
}

pub(crate) fn run_filters(args: CatalogArgs) -> Result<(), AppError> {
    let (engine, imported) = engine_for(args, None)?;

    render_source(&engine, imported);
    render_filter_options(&engine);

    Ok(())
}

pub(crate) fn run_demo(args: CatalogArgs) -> Result<(), AppError> {
    let (engine, imported) = engine_for(args, None)?;

    println!("Job board demo");
    render_source(&engine, imported);
    render_filter_options(&engine);

    let steps = [
        ("Landing on the board", QueryChange::Page(1)),
        ("Jumping to the last page", QueryChange::Page(u32::MAX)),
        (
            "Searching for \"ai\"",
            QueryChange::SearchTerm("ai".to_string()),
        ),
        (
            "Narrowing to full-time roles",
            QueryChange::EmploymentType(Some("Full-time".to_string())),
        ),
        ("Clearing all filters", QueryChange::ClearFilters),
    ];

    let mut query = JobQuery::new();
    for (label, change) in steps {
        query = query.apply(change);
        println!("\n{label}");
        let listing = engine.listing(&query);
        render_listing(&query, &listing);
    }

    if let Some(company) = engine.filter_options().companies.first().cloned() {
        query = query.apply(QueryChange::filter(FilterField::Company, Some(company)));
        println!("\nPicking the first company from the dropdown");
        let listing = engine.listing(&query);
        render_listing(&query, &listing);
    }

    Ok(())
}

fn render_source(engine: &JobListingEngine, imported: bool) {
    if imported {
        println!("Data source: CSV catalog import");
    } else {
        println!("Data source: built-in sample catalog");
    }
    println!(
        "{} postings, {} per page",
        engine.catalog().len(),
        engine.page_size()
    );
}

fn render_filter_options(engine: &JobListingEngine) {
    let options = engine.filter_options();
    for field in FilterField::ordered() {
        let values = options.values(field);
        if values.is_empty() {
            println!("- {}: (none)", field.label());
        } else {
            println!("- {}: {}", field.label(), values.join(" | "));
        }
    }
}

fn render_listing(query: &JobQuery, listing: &JobListing<'_>) {
    let mut active = Vec::new();
    if !query.search_term.is_empty() {
        active.push(format!("search \"{}\"", query.search_term));
    }
    for field in FilterField::ordered() {
        if let Some(value) = query.filter(field) {
            active.push(format!("{} = {}", field.label(), value));
        }
    }
    if active.is_empty() {
        println!("Filters: none");
    } else {
        println!("Filters: {}", active.join(", "));
    }

    if listing.is_empty() {
        println!("No jobs match the current search and filters.");
        return;
    }

    println!(
        "Page {}/{} ({} matching postings)",
        listing.page, listing.total_pages, listing.total_items
    );
    for posting in &listing.items {
        println!(
            "- [{}] {} | {} | {} | {} | {}",
            posting.id,
            posting.role,
            posting.company,
            posting.location,
            posting.employment_type,
            posting.category
        );
    }
}

use super::common::*;
use crate::board::{
    derive_filter_options, filter_jobs, paginate, sample_catalog, FilterField, JobId,
    JobListingEngine, JobQuery, DEFAULT_PAGE_SIZE,
};

#[test]
fn unfiltered_query_returns_whole_catalog_in_order() {
    let catalog = sample_catalog();
    let matches = filter_jobs(&catalog, &JobQuery::default());

    assert_eq!(matches.len(), catalog.len());
    assert!(matches
        .iter()
        .zip(catalog.iter())
        .all(|(matched, original)| *matched == original));
}

#[test]
fn filter_is_deterministic() {
    let catalog = sample_catalog();
    let query = JobQuery {
        search_term: "engineer".to_string(),
        location: Some("Remote".to_string()),
        ..JobQuery::default()
    };

    assert_eq!(filter_jobs(&catalog, &query), filter_jobs(&catalog, &query));
}

#[test]
fn search_is_case_insensitive_over_role_company_and_category() {
    let catalog = sample_catalog();
    let query = JobQuery {
        search_term: "ai".to_string(),
        ..JobQuery::default()
    };

    let matches = filter_jobs(&catalog, &query);
    assert_eq!(ids(&matches), ["1", "2", "4", "8", "11", "12"]);
    assert!(matches
        .iter()
        .all(|posting| posting.company != "Jane Street"));

    let shouted = JobQuery {
        search_term: "AI".to_string(),
        ..JobQuery::default()
    };
    assert_eq!(filter_jobs(&catalog, &shouted), matches);
}

#[test]
fn search_ignores_location_and_type() {
    let catalog = vec![
        posting("a", "Engineer", "Acme", "Platform"),
        posting("b", "Engineer", "Acme", "Remote Work"),
    ];
    let query = JobQuery {
        search_term: "remote".to_string(),
        ..JobQuery::default()
    };

    assert_eq!(ids(&filter_jobs(&catalog, &query)), ["b"]);
}

#[test]
fn search_term_is_not_trimmed() {
    let catalog = vec![
        posting("a", "Engineer", "Acme", "Platform"),
        posting("b", "Staff Engineer", "Acme", "Platform"),
    ];
    let query = JobQuery {
        search_term: " ".to_string(),
        ..JobQuery::default()
    };

    assert_eq!(ids(&filter_jobs(&catalog, &query)), ["b"]);
}

#[test]
fn company_filter_is_exact_and_case_sensitive() {
    let catalog = sample_catalog();
    let query = JobQuery {
        company: Some("DeepMind".to_string()),
        ..JobQuery::default()
    };

    let matches = filter_jobs(&catalog, &query);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].role, "Machine Learning Engineer");

    let lowercase = JobQuery {
        company: Some("deepmind".to_string()),
        ..JobQuery::default()
    };
    assert!(filter_jobs(&catalog, &lowercase).is_empty());
}

#[test]
fn filters_combine_with_logical_and() {
    let catalog = sample_catalog();
    let query = JobQuery {
        location: Some("Remote".to_string()),
        employment_type: Some("Contract".to_string()),
        ..JobQuery::default()
    };
    assert_eq!(ids(&filter_jobs(&catalog, &query)), ["5", "8"]);

    let query = JobQuery {
        search_term: "ai".to_string(),
        employment_type: Some("Full-time".to_string()),
        ..JobQuery::default()
    };
    assert_eq!(ids(&filter_jobs(&catalog, &query)), ["1", "2", "4", "11"]);

    let query = JobQuery {
        category: Some("AI Research".to_string()),
        company: Some("Anthropic".to_string()),
        ..JobQuery::default()
    };
    assert!(filter_jobs(&catalog, &query).is_empty());
}

#[test]
fn empty_filter_values_are_ignored() {
    let catalog = sample_catalog();
    let query = JobQuery {
        company: Some(String::new()),
        category: Some(String::new()),
        ..JobQuery::default()
    };

    assert_eq!(filter_jobs(&catalog, &query).len(), catalog.len());
}

#[test]
fn filter_options_keep_first_seen_order_without_duplicates() {
    let options = derive_filter_options(&sample_catalog());

    assert_eq!(options.companies.len(), 12);
    assert_eq!(options.companies[0], "DeepMind");
    assert_eq!(
        options.locations,
        [
            "London, UK",
            "San Francisco, CA",
            "New York, NY",
            "Remote",
            "Santa Clara, CA",
            "Waltham, MA",
            "Redmond, WA",
            "Toronto, ON",
        ]
    );
    assert_eq!(
        options.values(FilterField::EmploymentType),
        ["Full-time", "Contract", "Internship", "Part-time"]
    );
    assert_eq!(options.categories.len(), 11);
    assert_eq!(
        &options.categories[..3],
        ["AI Research", "AI Safety", "Mathematics"]
    );
}

#[test]
fn repeated_company_appears_once() {
    let catalog = vec![
        posting("a", "Engineer", "Acme", "Platform"),
        posting("b", "Analyst", "Globex", "Data"),
        posting("c", "Designer", "Acme", "Design"),
    ];
    let options = derive_filter_options(&catalog);

    assert_eq!(options.companies, ["Acme", "Globex"]);
    assert_eq!(options.locations, ["Remote"]);
}

#[test]
fn empty_catalog_yields_empty_options_and_no_pages() {
    let options = derive_filter_options(&[]);
    assert!(options.is_empty());

    let page = paginate::<&str>(&[], 1, DEFAULT_PAGE_SIZE);
    assert!(page.items.is_empty());
    assert!(page.is_empty());
    assert_eq!(page.total_pages, 0);
    assert_eq!(page.page, 1);
}

#[test]
fn first_page_of_sample_catalog() {
    let engine = JobListingEngine::with_sample_catalog();
    let listing = engine.listing(&JobQuery::default());

    assert_eq!(listing.total_items, 12);
    assert_eq!(listing.total_pages, 3);
    assert_eq!(ids(&listing.items), ["1", "2", "3", "4", "5"]);
    assert!(!listing.has_previous());
    assert!(listing.has_next());
}

#[test]
fn pages_partition_the_filtered_list() {
    let items: Vec<u32> = (1..=23).collect();

    for size in 1..=7 {
        let size = page_size(size);
        let total_pages = paginate(&items, 1, size).total_pages;
        let mut seen = Vec::new();
        for page in 1..=total_pages as u32 {
            seen.extend(paginate(&items, page, size).items);
        }
        assert_eq!(seen, items, "page size {size}");
    }
}

#[test]
fn out_of_range_pages_are_clamped() {
    let engine = JobListingEngine::with_sample_catalog();
    let query = JobQuery {
        page: 99,
        ..JobQuery::default()
    };

    let listing = engine.listing(&query);
    assert_eq!(listing.page, 3);
    assert_eq!(ids(&listing.items), ["11", "12"]);
    assert!(!listing.has_next());

    let page_zero = paginate(&[1, 2, 3], 0, page_size(2));
    assert_eq!(page_zero.page, 1);
    assert_eq!(page_zero.items, [1, 2]);
}

#[test]
fn no_matches_is_an_empty_listing() {
    let engine = JobListingEngine::with_sample_catalog();
    let query = JobQuery {
        search_term: "underwater basket weaving".to_string(),
        ..JobQuery::default()
    };

    let listing = engine.listing(&query);
    assert!(listing.is_empty());
    assert!(listing.items.is_empty());
    assert_eq!(listing.total_pages, 0);
}

#[test]
fn engine_finds_postings_by_id() {
    let engine = JobListingEngine::with_sample_catalog();

    let posting = engine.posting(&JobId::from("7")).expect("posting present");
    assert_eq!(posting.company, "Hugging Face");
    assert!(engine.posting(&JobId::from("404")).is_none());
}

#[test]
fn engine_honours_custom_page_size() {
    let engine = JobListingEngine::new(sample_catalog(), page_size(4));
    let listing = engine.listing(&JobQuery {
        page: 2,
        ..JobQuery::default()
    });

    assert_eq!(listing.total_pages, 3);
    assert_eq!(ids(&listing.items), ["5", "6", "7", "8"]);
}

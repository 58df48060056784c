//! Result limits, catalog order and empty queries.

use super::common::{assert_hits_well_formed, make_catalog, positions, synthetic_catalog};
use yearsift::{search, search_entries, SearchOptions, DEFAULT_LIMIT, LEGACY_LIMIT};

fn with_limit(limit: usize) -> SearchOptions {
    SearchOptions::default().with_limit(Some(limit))
}

#[test]
fn empty_and_blank_queries_return_nothing() {
    let catalog = synthetic_catalog(30);
    for query in ["", " ", "\t\n", "   "] {
        assert!(
            search(&catalog, query, &SearchOptions::default()).is_empty(),
            "query {:?} should return nothing",
            query
        );
    }
}

#[test]
fn empty_catalog_returns_nothing() {
    assert!(search(&[], "honda", &SearchOptions::default()).is_empty());
}

#[test]
fn default_limit_is_ten() {
    let catalog = synthetic_catalog(90);
    let hits = search(&catalog, "part", &SearchOptions::default());
    assert_eq!(hits.len(), DEFAULT_LIMIT);
    assert_eq!(positions(&hits), (0..10).collect::<Vec<_>>());
}

#[test]
fn legacy_limit_is_eight() {
    let catalog = synthetic_catalog(90);
    let hits = search(&catalog, "part", &with_limit(LEGACY_LIMIT));
    assert_eq!(hits.len(), 8);
}

#[test]
fn zero_limit_falls_back_to_default() {
    let catalog = synthetic_catalog(90);
    assert_eq!(search(&catalog, "part", &with_limit(0)).len(), DEFAULT_LIMIT);
}

#[test]
fn fewer_matches_than_limit_returns_all() {
    let catalog = synthetic_catalog(90);
    let hits = search(&catalog, "honda", &with_limit(100));
    assert_eq!(hits.len(), 30);
    assert_hits_well_formed(&catalog, &hits);
}

#[test]
fn results_are_the_first_matches_in_catalog_order() {
    let catalog = make_catalog(&[
        "2003-2011 Honda Element Tail Light",
        "Universal Floor Mat",
        "2007 Honda Element Mirror",
        "2001 Honda Civic Grille",
        "2005-2008 Honda Element Bumper",
    ]);
    let hits = search(&catalog, "element", &with_limit(2));
    assert_eq!(positions(&hits), vec![0, 2]);

    let hits = search(&catalog, "element 2007", &SearchOptions::default());
    assert_eq!(positions(&hits), vec![0, 2, 4]);
}

#[test]
fn large_limit_on_large_catalog_stays_ordered() {
    let catalog = synthetic_catalog(2_000);
    let hits = search(&catalog, "ford", &with_limit(500));
    assert_eq!(hits.len(), 500);
    assert_hits_well_formed(&catalog, &hits);
}

#[test]
fn search_entries_matches_search() {
    let catalog = synthetic_catalog(60);
    let options = SearchOptions::default();
    let hits = search(&catalog, "honda 199", &options);
    let entries = search_entries(&catalog, "honda 199", &options);
    assert_eq!(entries.len(), hits.len());
    for (entry, hit) in entries.iter().zip(&hits) {
        assert_eq!(*entry, hit.entry);
    }
}

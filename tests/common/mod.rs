//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;
use yearsift::{IndexedEntry, RawCatalogEntry, SearchHit};

// Re-export canonical test utilities from yearsift::testing
pub use yearsift::testing::{
    make_catalog, make_product, make_product_with_meta, payload_json, sample_catalog,
};

/// Titles of the hits, in result order.
pub fn titles<'a>(hits: &[SearchHit<'a>]) -> Vec<&'a str> {
    hits.iter().map(|hit| hit.entry.source.title.as_str()).collect()
}

/// Catalog positions of the hits, in result order.
pub fn positions(hits: &[SearchHit<'_>]) -> Vec<usize> {
    hits.iter().map(|hit| hit.position).collect()
}

/// Write `entries` to a temporary JSON file the way the storefront exports them.
pub fn catalog_file(entries: &[RawCatalogEntry]) -> NamedTempFile {
    raw_file(&payload_json(entries))
}

/// Write arbitrary text to a temporary file.
pub fn raw_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

/// A catalog of `n` generic parts where every third title carries a year range.
pub fn synthetic_catalog(n: usize) -> Vec<IndexedEntry> {
    let titles: Vec<String> = (0..n)
        .map(|i| match i % 3 {
            0 => format!("{}-{} Honda Part {}", 1990 + i % 20, 2000 + i % 20, i),
            1 => format!("{} Ford Part {}", 1980 + i % 40, i),
            _ => format!("Universal Part {}", i),
        })
        .collect();
    let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
    make_catalog(&refs)
}

/// Check that hits reference the catalog in strictly increasing position
/// order and that each hit's entry is the one at its position.
pub fn assert_hits_well_formed(catalog: &[IndexedEntry], hits: &[SearchHit<'_>]) {
    for pair in hits.windows(2) {
        assert!(
            pair[0].position < pair[1].position,
            "hits out of catalog order: {} then {}",
            pair[0].position,
            pair[1].position
        );
    }
    for hit in hits {
        assert_eq!(
            &catalog[hit.position], hit.entry,
            "hit at position {} points at a different entry",
            hit.position
        );
    }
}

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::catalog::normalize_catalog;
use crate::types::{IndexedEntry, RawCatalogEntry};

/// Create a product with a handle derived from its position.
///
/// This is the canonical implementation used across all tests.
pub fn make_product(id: usize, title: &str) -> RawCatalogEntry {
    RawCatalogEntry {
        handle: format!("product-{}", id),
        price: format!("${}.99", 10 + id),
        ..RawCatalogEntry::titled(title)
    }
}

/// Create a product with descriptive metadata.
pub fn make_product_with_meta(
    id: usize,
    title: &str,
    kind: &str,
    vendor: &str,
    tags: &[&str],
) -> RawCatalogEntry {
    RawCatalogEntry {
        kind: Some(kind.to_string()),
        vendor: Some(vendor.to_string()),
        tags: Some(tags.iter().map(|t| t.to_string()).collect()),
        ..make_product(id, title)
    }
}

/// Build an indexed catalog from titles, in order.
pub fn make_catalog(titles: &[&str]) -> Vec<IndexedEntry> {
    normalize_catalog(
        titles
            .iter()
            .enumerate()
            .map(|(id, title)| make_product(id, title))
            .collect(),
    )
}

/// A small auto-parts catalog covering ranges, single years, reversed ranges
/// and yearless titles.
pub fn sample_catalog() -> Vec<IndexedEntry> {
    normalize_catalog(vec![
        make_product_with_meta(
            0,
            "2003-2011 Honda Element Tail Light",
            "Tail Light",
            "Depo",
            &["honda", "rear"],
        ),
        make_product_with_meta(1, "1998 Ford F-150 Side Mirror", "Mirror", "TYC", &["ford"]),
        make_product_with_meta(
            2,
            "2008/2012 Subaru WRX Hood Scoop",
            "Body",
            "Seibon",
            &["subaru", "sti"],
        ),
        make_product(3, "Universal Floor Mat Set"),
        make_product(4, "2011-2003 Honda Element Mud Flap"),
        make_product_with_meta(
            5,
            "1995-2001 Honda Civic Headlight",
            "Headlight",
            "Depo",
            &["honda", "front"],
        ),
        make_product(6, "Gasket A20045 Fits Honda Element"),
    ])
}

/// Serialize raw entries the way the storefront embeds them.
pub fn payload_json(entries: &[RawCatalogEntry]) -> String {
    serde_json::to_string(entries).unwrap_or_else(|_| "[]".to_string())
}

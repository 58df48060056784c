// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning a page payload into something searchable.
//!
//! The payload is parsed once and every entry is annotated once. Nothing here
//! is clever: the year range comes from the title, and the search text is the
//! lowercased join of the fields a shopper might type.

use crate::contracts::check_catalog_indexed;
use crate::error::Result;
use crate::types::{IndexedEntry, RawCatalogEntry};
use crate::year::extract_year_range;

/// Lookup key the storefront uses for the embedded product JSON.
pub const DEFAULT_PAYLOAD_KEY: &str = "stehlen-product-data";

/// Lowercased `title type vendor tags...`, absent fields as empty strings.
///
/// Separators are kept even when a field is missing so the layout matches
/// what the storefront script builds. A query term never contains whitespace,
/// so the extra spaces can't produce a match of their own.
pub fn search_text(entry: &RawCatalogEntry) -> String {
    let tags = entry.tags.as_deref().unwrap_or_default().join(" ");
    format!(
        "{} {} {} {}",
        entry.title,
        entry.kind.as_deref().unwrap_or_default(),
        entry.vendor.as_deref().unwrap_or_default(),
        tags
    )
    .to_lowercase()
}

/// Annotate a single entry.
pub fn normalize_entry(entry: RawCatalogEntry) -> IndexedEntry {
    IndexedEntry {
        year_range: extract_year_range(&entry.title),
        search_text: search_text(&entry),
        source: entry,
    }
}

/// Annotate a whole catalog, preserving order.
pub fn normalize_catalog(entries: Vec<RawCatalogEntry>) -> Vec<IndexedEntry> {
    let indexed: Vec<IndexedEntry> = entries.into_iter().map(normalize_entry).collect();
    check_catalog_indexed(&indexed);
    indexed
}

/// Parse the JSON payload into raw entries.
pub fn parse_catalog(payload: &str) -> Result<Vec<RawCatalogEntry>> {
    Ok(serde_json::from_str(payload)?)
}

/// Parse and normalize, failing open.
///
/// A malformed payload is logged and produces an empty catalog. The host page
/// keeps working; it just gets no results.
pub fn load_catalog(payload: &str) -> Vec<IndexedEntry> {
    match parse_catalog(payload) {
        Ok(entries) => normalize_catalog(entries),
        Err(err) => {
            tracing::warn!(error = %err, "failed to parse product data");
            Vec::new()
        }
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Walking the catalog.
//!
//! Predictive search runs on every keystroke, so the walk stops the moment it
//! has `limit` hits. A catalog of fifty thousand parts costs the same as a
//! catalog of fifty when the first ten entries match.

use crate::config::SearchOptions;
use crate::contracts::{check_hits_bounded, check_hits_in_catalog_order};
use crate::search::matcher::match_entry;
use crate::search::query::tokenize;
use crate::types::{IndexedEntry, SearchHit};

/// Search `catalog` for `query`, returning at most `options.effective_limit()`
/// hits in catalog order.
///
/// An empty or whitespace-only query returns nothing without touching the
/// catalog.
pub fn search<'a>(
    catalog: &'a [IndexedEntry],
    query: &str,
    options: &SearchOptions,
) -> Vec<SearchHit<'a>> {
    let terms = tokenize(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let limit = options.effective_limit();
    let hits: Vec<SearchHit<'a>> = catalog
        .iter()
        .enumerate()
        .filter_map(|(position, entry)| {
            #[cfg(test)]
            tests::ENTRIES_VISITED.with(|visited| visited.set(visited.get() + 1));
            match_entry(entry, &terms, options).map(|matched_year| SearchHit {
                entry,
                position,
                matched_year,
            })
        })
        .take(limit)
        .collect();

    check_hits_bounded(&hits, limit);
    check_hits_in_catalog_order(&hits);
    tracing::debug!(query, terms = terms.len(), hits = hits.len(), "search");
    hits
}

/// `search`, keeping only the matched entries.
pub fn search_entries<'a>(
    catalog: &'a [IndexedEntry],
    query: &str,
    options: &SearchOptions,
) -> Vec<&'a IndexedEntry> {
    search(catalog, query, options)
        .into_iter()
        .map(|hit| hit.entry)
        .collect()
}

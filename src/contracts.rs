//! Runtime contracts for the catalog and search invariants.
//!
//! Debug-mode assertions on the catalog and on every result list. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function              | Property                                         |
//! |--------------------------------|--------------------------------------------------|
//! | `check_entry_indexed`          | search text lowercase, year range from title     |
//! | `check_catalog_indexed`        | every entry satisfies `check_entry_indexed`      |
//! | `check_hits_bounded`           | `hits.len() <= limit`                            |
//! | `check_hits_in_catalog_order`  | hit positions strictly increase                  |

use crate::catalog::search_text;
use crate::types::{IndexedEntry, SearchHit, MAX_YEAR, MIN_YEAR};
use crate::year::extract_year_range;

// ============================================================================
// CATALOG CONTRACTS
// ============================================================================

/// Check that an entry's derived fields are what normalization would produce.
///
/// # Panics (debug builds only)
/// Panics if the search text isn't lowercase, differs from a fresh
/// recomputation, or the year range falls outside `19xx`/`20xx`.
#[inline]
pub fn check_entry_indexed(entry: &IndexedEntry) {
    debug_assert!(
        entry.search_text == entry.search_text.to_lowercase(),
        "Contract violation: search text not lowercase for '{}'",
        entry.source.title
    );
    debug_assert!(
        entry.search_text == search_text(&entry.source),
        "Contract violation: search text is not a function of its source for '{}'",
        entry.source.title
    );
    debug_assert!(
        entry.year_range == extract_year_range(&entry.source.title),
        "Contract violation: year range not derived from title '{}'",
        entry.source.title
    );
    if let Some(range) = entry.year_range {
        debug_assert!(
            (MIN_YEAR..=MAX_YEAR).contains(&range.start)
                && (MIN_YEAR..=MAX_YEAR).contains(&range.end),
            "Contract violation: year range {} outside {}..={}",
            range,
            MIN_YEAR,
            MAX_YEAR
        );
    }
}

/// Check every entry in a freshly indexed catalog.
#[inline]
pub fn check_catalog_indexed(catalog: &[IndexedEntry]) {
    #[cfg(debug_assertions)]
    for entry in catalog {
        check_entry_indexed(entry);
    }
    #[cfg(not(debug_assertions))]
    let _ = catalog;
}

// ============================================================================
// RESULT CONTRACTS
// ============================================================================

/// Check that a search never returns more than it was asked for.
#[inline]
pub fn check_hits_bounded(hits: &[SearchHit<'_>], limit: usize) {
    debug_assert!(
        hits.len() <= limit,
        "Contract violation: {} hits exceed limit {}",
        hits.len(),
        limit
    );
}

/// Check that hits come out in catalog order with no repeats.
///
/// Ranking is catalog order, so a hit list is a strictly increasing walk over
/// positions.
#[inline]
pub fn check_hits_in_catalog_order(hits: &[SearchHit<'_>]) {
    debug_assert!(
        hits.windows(2).all(|w| w[0].position < w[1].position),
        "Contract violation: hits not in strictly increasing catalog order"
    );
}

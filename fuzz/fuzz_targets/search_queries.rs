// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search over arbitrary catalogs and queries.
//!
//! Both sides are attacker-controlled in practice: the catalog comes from
//! merchant data, the query from whoever is typing. Neither may crash the
//! search, and the result invariants must hold for any combination.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use yearsift::{normalize_catalog, search, RawCatalogEntry, SearchOptions};

#[derive(Debug, Arbitrary)]
struct Input {
    titles: Vec<String>,
    vendors: Vec<String>,
    query: String,
    limit: u8,
    partial_years: bool,
}

fuzz_target!(|input: Input| {
    let raw: Vec<RawCatalogEntry> = input
        .titles
        .iter()
        .take(64)
        .enumerate()
        .map(|(i, title)| RawCatalogEntry {
            vendor: input.vendors.get(i).cloned(),
            ..RawCatalogEntry::titled(title.chars().take(200).collect::<String>())
        })
        .collect();
    let catalog = normalize_catalog(raw);
    let query: String = input.query.chars().take(200).collect();
    let options = SearchOptions {
        limit: input.limit as usize,
        partial_years: input.partial_years,
    };

    // INVARIANT 1: search never panics
    let hits = search(&catalog, &query, &options);

    // INVARIANT 2: never more than the limit
    assert!(hits.len() <= options.effective_limit());

    // INVARIANT 3: catalog order, each hit pointing at its own entry
    for pair in hits.windows(2) {
        assert!(pair[0].position < pair[1].position, "hits out of order");
    }
    for hit in &hits {
        assert_eq!(&catalog[hit.position], hit.entry);
    }

    // INVARIANT 4: a matched year lies inside the entry's range
    for hit in &hits {
        if let Some(year) = hit.matched_year {
            assert!(hit.entry.year_range.is_some_and(|r| r.contains(year)));
        }
    }

    // INVARIANT 5: blank queries return nothing
    if query.trim().is_empty() {
        assert!(hits.is_empty());
    }

    // INVARIANT 6: deterministic
    let again = search(&catalog, &query, &options);
    assert_eq!(hits, again);
});

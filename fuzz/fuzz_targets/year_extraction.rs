// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for year-range extraction.
//!
//! Titles come from merchants, so they contain anything: SKUs full of digits,
//! non-Latin scripts, stray separators. Extraction must never panic and must
//! only ever report years it can actually recognize.

#![no_main]

use libfuzzer_sys::fuzz_target;
use yearsift::{extract_year_range, MAX_YEAR, MIN_YEAR};

fuzz_target!(|title: &str| {
    let title: String = title.chars().take(500).collect();

    // INVARIANT 1: extraction never panics
    let Some(range) = extract_year_range(&title) else {
        return;
    };

    // INVARIANT 2: both ends are recognizable years
    assert!(
        (MIN_YEAR..=MAX_YEAR).contains(&range.start),
        "start {} out of bounds for {:?}",
        range.start,
        title
    );
    assert!(
        (MIN_YEAR..=MAX_YEAR).contains(&range.end),
        "end {} out of bounds for {:?}",
        range.end,
        title
    );

    // INVARIANT 3: both years appear literally in the title
    assert!(title.contains(&range.start.to_string()));
    assert!(title.contains(&range.end.to_string()));

    // INVARIANT 4: deterministic
    assert_eq!(extract_year_range(&title), Some(range));
});

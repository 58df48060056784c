// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for yearsift's year arithmetic.
//!
//! This standalone crate extracts the year-term classifiers and the range
//! checks the matcher is built on, and proves them for every possible input.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: the classifiers accept any 0-4 byte term
//! 2. **Bounds**: a parsed year term is always in 1900..=2099
//! 3. **Soundness**: a partial-year match is a year inside the range whose
//!    digits start with the term
//! 4. **Reversed ranges**: an inverted range contains nothing

pub const MIN_YEAR: u16 = 1900;
pub const MAX_YEAR: u16 = 2099;

// ============================================================================
// YEAR TERMS (mirrors src/year.rs)
// ============================================================================

/// Four ASCII digits starting with 19 or 20.
pub fn parse_year_term(term: &[u8]) -> Option<u16> {
    if term.len() != 4 || !term.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if !(term.starts_with(b"19") || term.starts_with(b"20")) {
        return None;
    }
    let mut year: u16 = 0;
    for &b in term {
        year = year * 10 + u16::from(b - b'0');
    }
    Some(year)
}

/// One to three ASCII digits.
pub fn is_partial_year_term(term: &[u8]) -> bool {
    (1..=3).contains(&term.len()) && term.iter().all(u8::is_ascii_digit)
}

/// Inclusive containment; never true when `end < start`.
pub fn contains(start: u16, end: u16, year: u16) -> bool {
    start <= year && year <= end
}

/// Whether the four decimal digits of `year` start with `prefix`.
///
/// Matches `year.to_string().starts_with(prefix)` for four-digit years,
/// without the allocation Kani can't reason about cheaply.
pub fn year_has_prefix(year: u16, prefix: &[u8]) -> bool {
    if !(1000..=9999).contains(&year) || prefix.len() > 4 {
        return false;
    }
    let digits = [
        b'0' + (year / 1000) as u8,
        b'0' + (year / 100 % 10) as u8,
        b'0' + (year / 10 % 10) as u8,
        b'0' + (year % 10) as u8,
    ];
    digits.starts_with(prefix)
}

/// First year in `start..=end` starting with `prefix`.
pub fn first_year_with_prefix(start: u16, end: u16, prefix: &[u8]) -> Option<u16> {
    (start..=end).find(|&year| year_has_prefix(year, prefix))
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    fn any_term() -> ([u8; 4], usize) {
        let bytes: [u8; 4] = kani::any();
        let len: usize = kani::any_where(|&n| n <= 4);
        (bytes, len)
    }

    /// A parsed year term is always a recognizable year.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_parse_year_term_bounds() {
        let (bytes, len) = any_term();
        if let Some(year) = parse_year_term(&bytes[..len]) {
            kani::assert(len == 4, "only four-byte terms parse");
            kani::assert(
                (MIN_YEAR..=MAX_YEAR).contains(&year),
                "parsed year must be in 1900..=2099",
            );
        }
    }

    /// Exact and partial year terms never overlap.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_term_classes_disjoint() {
        let (bytes, len) = any_term();
        let term = &bytes[..len];
        kani::assert(
            !(parse_year_term(term).is_some() && is_partial_year_term(term)),
            "a term is never both an exact and a partial year",
        );
    }

    /// An inverted range contains no year.
    #[kani::proof]
    fn verify_reversed_range_empty() {
        let start: u16 = kani::any();
        let end: u16 = kani::any_where(|&e: &u16| e < start);
        let year: u16 = kani::any();
        kani::assert(!contains(start, end, year), "reversed range must be empty");
    }

    /// A partial match lies in the range and really has the prefix.
    ///
    /// Ranges are bounded to a decade so the search loop unwinds.
    #[kani::proof]
    #[kani::unwind(12)]
    fn verify_partial_match_sound() {
        let start: u16 = kani::any_where(|&s: &u16| (MIN_YEAR..=MAX_YEAR).contains(&s));
        let width: u16 = kani::any_where(|&w: &u16| w <= 10);
        let end = start + width;
        let bytes: [u8; 3] = kani::any();
        let len: usize = kani::any_where(|&n| (1..=3).contains(&n));
        let prefix = &bytes[..len];

        if let Some(year) = first_year_with_prefix(start, end, prefix) {
            kani::assert(contains(start, end, year), "match must be inside the range");
            kani::assert(year_has_prefix(year, prefix), "match must have the prefix");
        }
    }
}

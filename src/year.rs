// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Year ranges hiding in product titles.
//!
//! Aftermarket part titles lead with model-year coverage: "2003-2011 Honda
//! Element", "1998 Ford F-150", "2008/2012 Subaru WRX". Pulling that out once
//! lets a query for "2004" find the Element even though "2004" never appears
//! in its title.
//!
//! Only `19xx` and `20xx` count as years, and only as whole words, so a
//! four-digit run buried inside a SKU like `A120045` is left alone. Word
//! boundaries are ASCII-only: "2003-2011年式" still reads as 2003-2011,
//! since `年` is not an ASCII word character.

use crate::types::YearRange;
use regex::Regex;
use std::sync::LazyLock;

/// `2003-2011`, `2003 / 2011`: two whole-word years around `-` or `/`.
static RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)((?:19|20)[0-9]{2})\s*[-/]\s*((?:19|20)[0-9]{2})(?-u:\b)")
        .expect("year range pattern is valid")
});

/// A single whole-word year.
static SINGLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)((?:19|20)[0-9]{2})(?-u:\b)").expect("single year pattern is valid")
});

/// Extract the model-year coverage from a title.
///
/// A range pattern anywhere in the title wins over a bare year; within each
/// pattern only the first occurrence is used. The range is returned as
/// written: `"2011-2003"` yields a reversed range that matches no year.
///
/// ```
/// use yearsift::{extract_year_range, YearRange};
///
/// assert_eq!(
///     extract_year_range("2003-2011 Honda Element"),
///     Some(YearRange::new(2003, 2011))
/// );
/// assert_eq!(extract_year_range("1998 Ford F-150"), Some(YearRange::single(1998)));
/// assert_eq!(extract_year_range("Universal Floor Mat"), None);
/// ```
pub fn extract_year_range(title: &str) -> Option<YearRange> {
    if let Some(caps) = RANGE_PATTERN.captures(title) {
        let start = caps.get(1)?.as_str().parse().ok()?;
        let end = caps.get(2)?.as_str().parse().ok()?;
        return Some(YearRange::new(start, end));
    }

    let caps = SINGLE_PATTERN.captures(title)?;
    let year = caps.get(1)?.as_str().parse().ok()?;
    Some(YearRange::single(year))
}

/// Parse a query term that is exactly one recognizable year.
///
/// Four ASCII digits starting with `19` or `20`; nothing else.
pub fn parse_year_term(term: &str) -> Option<u16> {
    let bytes = term.as_bytes();
    if bytes.len() != 4 || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if !(term.starts_with("19") || term.starts_with("20")) {
        return None;
    }
    term.parse().ok()
}

/// True for a term of one to three ASCII digits: the start of a year the
/// user hasn't finished typing.
pub fn is_partial_year_term(term: &str) -> bool {
    (1..=3).contains(&term.len()) && term.bytes().all(|b| b.is_ascii_digit())
}

/// First year in `range` whose decimal digits start with `prefix`.
///
/// Walks the whole range, so the cost is the range width. Vehicle coverage
/// rarely spans more than a few decades.
pub fn first_year_with_prefix(range: &YearRange, prefix: &str) -> Option<u16> {
    range
        .years()
        .find(|year| year.to_string().starts_with(prefix))
}

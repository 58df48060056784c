// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deciding whether an entry satisfies a query.
//!
//! Terms are conjunctive: every one of them has to match or the entry is out.
//! Each term gets three chances, tried in order:
//!
//! | Rule         | Term shape             | Satisfied when                          |
//! |--------------|------------------------|-----------------------------------------|
//! | Exact year   | `19xx` / `20xx`        | the year lies inside the entry's range  |
//! | Partial year | 1-3 digits             | some covered year starts with the term  |
//! | Text         | anything               | the search text contains the term       |
//!
//! A year term that misses the range still gets the text rule, so "2012" can
//! find a part whose SKU mentions 2012.

use crate::config::SearchOptions;
use crate::types::IndexedEntry;
use crate::year::{first_year_with_prefix, is_partial_year_term, parse_year_term};

/// Which rule satisfied a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermMatch {
    /// The term is a year inside the entry's range.
    ExactYear(u16),
    /// The term is the start of this covered year.
    PartialYear(u16),
    /// The term appears in the search text.
    Text,
}

impl TermMatch {
    /// The year behind a year-rule match.
    pub fn year(&self) -> Option<u16> {
        match self {
            TermMatch::ExactYear(year) | TermMatch::PartialYear(year) => Some(*year),
            TermMatch::Text => None,
        }
    }
}

/// Try the three rules against one term. `term` must already be lowercase.
pub fn match_term(entry: &IndexedEntry, term: &str, options: &SearchOptions) -> Option<TermMatch> {
    if let Some(range) = &entry.year_range {
        if let Some(year) = parse_year_term(term) {
            if range.contains(year) {
                return Some(TermMatch::ExactYear(year));
            }
        } else if options.partial_years && is_partial_year_term(term) {
            if let Some(year) = first_year_with_prefix(range, term) {
                return Some(TermMatch::PartialYear(year));
            }
        }
    }

    entry
        .search_text
        .contains(term)
        .then_some(TermMatch::Text)
}

/// Per-term rule for an entry that matches every term, `None` otherwise.
///
/// Stops at the first term that fails.
pub fn match_terms<S: AsRef<str>>(
    entry: &IndexedEntry,
    terms: &[S],
    options: &SearchOptions,
) -> Option<Vec<TermMatch>> {
    terms
        .iter()
        .map(|term| match_term(entry, term.as_ref(), options))
        .collect()
}

/// True iff every term matches the entry.
///
/// An empty term list is vacuously true; `search` never gets that far with
/// one.
pub fn matches<S: AsRef<str>>(entry: &IndexedEntry, terms: &[S], options: &SearchOptions) -> bool {
    terms
        .iter()
        .all(|term| match_term(entry, term.as_ref(), options).is_some())
}

/// Like `matches`, but also reports the first year a year rule hit.
///
/// `Some(None)` is a match made entirely through text.
pub(crate) fn match_entry<S: AsRef<str>>(
    entry: &IndexedEntry,
    terms: &[S],
    options: &SearchOptions,
) -> Option<Option<u16>> {
    let mut matched_year = None;
    for term in terms {
        let hit = match_term(entry, term.as_ref(), options)?;
        matched_year = matched_year.or(hit.year());
    }
    Some(matched_year)
}

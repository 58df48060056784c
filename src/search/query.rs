// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing.

/// Split a query into lowercase, whitespace-separated terms.
///
/// An empty or all-whitespace query yields no terms, which callers treat as
/// "no search performed" rather than "match everything".
///
/// # Example
///
/// ```
/// use yearsift::tokenize;
///
/// assert_eq!(tokenize("  2004 Honda\tElement "), vec!["2004", "honda", "element"]);
/// assert!(tokenize("   ").is_empty());
/// ```
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

//! Differential tests against a deliberately naive reference matcher.
//!
//! The oracle re-derives everything from the raw title with plain string
//! operations: no regex, no short-circuiting, no shared helpers. If the engine
//! and the oracle disagree, one of them has a bug.

use proptest::prelude::*;
use yearsift::{normalize_catalog, search, RawCatalogEntry, SearchOptions};

/// Reference year range: scan for 4-digit words starting with 19 or 20,
/// first "A-B"/"A/B" pair wins over the first lone year.
fn oracle_range(title: &str) -> Option<(u16, u16)> {
    let chars: Vec<char> = title.chars().collect();
    let is_word = |c: char| c.is_ascii_alphanumeric() || c == '_';
    let mut years: Vec<(usize, usize, u16)> = Vec::new();
    let mut i = 0;
    while i + 4 <= chars.len() {
        let window: String = chars[i..i + 4].iter().collect();
        let bounded_left = i == 0 || !is_word(chars[i - 1]);
        let bounded_right = i + 4 == chars.len() || !is_word(chars[i + 4]);
        let century_ok = window.starts_with("19") || window.starts_with("20");
        if bounded_left
            && bounded_right
            && century_ok
            && window.chars().all(|c| c.is_ascii_digit())
        {
            if let Ok(year) = window.parse() {
                years.push((i, i + 4, year));
            }
        }
        i += 1;
    }

    for pair in years.windows(2) {
        let between: String = chars[pair[0].1..pair[1].0].iter().collect();
        let sep = between.trim();
        let only_separator = between
            .chars()
            .all(|c| c.is_whitespace() || c == '-' || c == '/');
        if (sep == "-" || sep == "/") && only_separator {
            return Some((pair[0].2, pair[1].2));
        }
    }
    years.first().map(|&(_, _, year)| (year, year))
}

fn oracle_matches(raw: &RawCatalogEntry, query: &str) -> bool {
    let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
    if terms.is_empty() {
        return false;
    }
    let text = format!("{}   ", raw.title).to_lowercase();
    let range = oracle_range(&raw.title);

    terms.iter().all(|term| {
        let all_digits = term.chars().all(|c| c.is_ascii_digit());
        let by_year = match range {
            Some((start, end)) if all_digits && term.len() == 4 => term
                .parse::<u16>()
                .is_ok_and(|y| (1900..=2099).contains(&y) && start <= y && y <= end),
            Some((start, end)) if all_digits && (1..=3).contains(&term.len()) => {
                (start..=end).any(|y| y.to_string().starts_with(term.as_str()))
            }
            _ => false,
        };
        by_year || text.contains(term.as_str())
    })
}

fn title_strategy() -> impl Strategy<Value = String> {
    (
        prop::option::of((
            1990u16..2025,
            1990u16..2025,
            prop::sample::select(vec!["-", "/", " / ", " "]),
            prop::sample::select(vec!["", "年式", "er", "é"]),
        )),
        prop::collection::vec("[a-z]{2,6}|[0-9]{1,5}", 0..4),
    )
        .prop_map(|(years, words)| {
            let prefix = match years {
                Some((a, b, sep, suffix)) => format!("{}{}{}{} ", a, sep, b, suffix),
                None => String::new(),
            };
            format!("{}{}", prefix, words.join(" "))
        })
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,3}|[0-9]{1,4}|(199|200|201)[0-9]", 1..3)
        .prop_map(|terms| terms.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// With a limit larger than the catalog, the engine returns exactly the
    /// entries the oracle accepts, in order.
    #[test]
    fn prop_search_agrees_with_oracle(
        titles in prop::collection::vec(title_strategy(), 0..25),
        query in query_strategy(),
    ) {
        let raw: Vec<RawCatalogEntry> =
            titles.iter().map(|t| RawCatalogEntry::titled(t.as_str())).collect();
        let expected: Vec<usize> = raw
            .iter()
            .enumerate()
            .filter(|(_, entry)| oracle_matches(entry, &query))
            .map(|(position, _)| position)
            .collect();

        let catalog = normalize_catalog(raw);
        let options = SearchOptions::default().with_limit(Some(100));
        let actual: Vec<usize> = search(&catalog, &query, &options)
            .iter()
            .map(|h| h.position)
            .collect();

        prop_assert_eq!(actual, expected, "query {:?} over {:?}", query, titles);
    }
}

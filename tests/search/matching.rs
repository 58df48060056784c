//! Free-text matching, the rule order, and the per-term match report.

use super::common::{make_product_with_meta, sample_catalog, titles};
use yearsift::{
    match_terms, matches, normalize_entry, search, tokenize, RawCatalogEntry, SearchOptions,
    TermMatch,
};

#[test]
fn matching_is_case_insensitive() {
    let catalog = sample_catalog();
    let options = SearchOptions::default();
    let lower = search(&catalog, "honda civic", &options);
    let upper = search(&catalog, "HONDA Civic", &options);
    assert_eq!(titles(&lower), vec!["1995-2001 Honda Civic Headlight"]);
    assert_eq!(titles(&lower), titles(&upper));
}

#[test]
fn terms_match_as_substrings() {
    let catalog = sample_catalog();
    let hits = search(&catalog, "head", &SearchOptions::default());
    assert_eq!(titles(&hits), vec!["1995-2001 Honda Civic Headlight"]);
}

#[test]
fn type_vendor_and_tags_are_searched() {
    let catalog = sample_catalog();
    let options = SearchOptions::default();
    assert_eq!(
        titles(&search(&catalog, "tyc", &options)),
        vec!["1998 Ford F-150 Side Mirror"]
    );
    assert_eq!(
        titles(&search(&catalog, "rear", &options)),
        vec!["2003-2011 Honda Element Tail Light"]
    );
    assert_eq!(
        titles(&search(&catalog, "seibon body", &options)),
        vec!["2008/2012 Subaru WRX Hood Scoop"]
    );
}

#[test]
fn handle_and_price_are_not_searched() {
    let catalog = sample_catalog();
    let options = SearchOptions::default();
    assert!(search(&catalog, "product-3", &options).is_empty());
    assert!(search(&catalog, "$13.99", &options).is_empty());
}

#[test]
fn order_of_terms_does_not_matter() {
    let catalog = sample_catalog();
    let options = SearchOptions::default();
    assert_eq!(
        titles(&search(&catalog, "element 2004", &options)),
        titles(&search(&catalog, "2004 element", &options))
    );
}

#[test]
fn terms_never_straddle_field_separators() {
    // Search text is "title type vendor tags" joined with spaces; a single
    // term never contains whitespace so it can't straddle the join.
    let entry = normalize_entry(RawCatalogEntry {
        vendor: Some("Depo".to_string()),
        ..RawCatalogEntry::titled("Tail Light")
    });
    assert!(matches(&entry, &["light"], &SearchOptions::default()));
    assert!(!matches(&entry, &["lightdepo"], &SearchOptions::default()));
}

#[test]
fn match_report_names_the_rule_per_term() {
    let entry = normalize_entry(make_product_with_meta(
        0,
        "2003-2011 Honda Element Tail Light",
        "Tail Light",
        "Depo",
        &["honda"],
    ));
    let terms = tokenize("2004 200 honda");
    assert_eq!(
        match_terms(&entry, &terms, &SearchOptions::default()),
        Some(vec![
            TermMatch::ExactYear(2004),
            TermMatch::PartialYear(2003),
            TermMatch::Text,
        ])
    );
}

#[test]
fn match_report_is_none_when_any_term_fails() {
    let entry = normalize_entry(RawCatalogEntry::titled("2003-2011 Honda Element"));
    let terms = tokenize("honda civic");
    assert_eq!(match_terms(&entry, &terms, &SearchOptions::default()), None);
    assert!(!matches(&entry, &terms, &SearchOptions::default()));
}

#[test]
fn exact_year_outranks_text_for_the_same_term() {
    // "2003" is both inside the range and literally in the title; the year
    // rule is tried first.
    let entry = normalize_entry(RawCatalogEntry::titled("2003-2011 Honda Element"));
    assert_eq!(
        match_terms(&entry, &["2003"], &SearchOptions::default()),
        Some(vec![TermMatch::ExactYear(2003)])
    );
}

#[test]
fn unicode_titles_lowercase_for_matching() {
    let catalog = yearsift::normalize_catalog(vec![RawCatalogEntry::titled(
        "2010-2014 ÉCLAIRAGE Phare Avant",
    )]);
    let hits = search(&catalog, "éclairage 2012", &SearchOptions::default());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].matched_year, Some(2012));
}

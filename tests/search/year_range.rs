//! Year-range extraction and year-term matching.

use super::common::{make_catalog, sample_catalog, titles};
use yearsift::{extract_year_range, search, SearchOptions, YearRange};

// ============================================================================
// EXTRACTION
// ============================================================================

#[test]
fn hyphenated_range() {
    assert_eq!(
        extract_year_range("2003-2011 Honda Element"),
        Some(YearRange::new(2003, 2011))
    );
}

#[test]
fn slash_range_with_spaces() {
    assert_eq!(
        extract_year_range("Subaru WRX 2008 / 2012 Hood Scoop"),
        Some(YearRange::new(2008, 2012))
    );
}

#[test]
fn single_year() {
    assert_eq!(
        extract_year_range("1998 Ford F-150"),
        Some(YearRange::single(1998))
    );
}

#[test]
fn no_year_in_title() {
    assert_eq!(extract_year_range("Universal Floor Mat Set"), None);
    assert_eq!(extract_year_range("Ford F-150 Mirror"), None);
}

#[test]
fn years_outside_19xx_20xx_are_ignored() {
    assert_eq!(extract_year_range("1850-1860 Carriage Wheel"), None);
    assert_eq!(extract_year_range("2100 Concept Part"), None);
}

#[test]
fn digits_inside_longer_runs_do_not_count() {
    assert_eq!(extract_year_range("Gasket A20045 Fits Honda"), None);
    assert_eq!(extract_year_range("Part 120034"), None);
}

#[test]
fn range_followed_by_non_ascii_suffix() {
    let title = "2003-2011年式 ホンダ エレメント テールランプ";
    assert_eq!(extract_year_range(title), Some(YearRange::new(2003, 2011)));

    let catalog = make_catalog(&[title]);
    let hits = search(&catalog, "2005", &SearchOptions::default());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].matched_year, Some(2005));
}

#[test]
fn range_beats_an_earlier_single_year() {
    assert_eq!(
        extract_year_range("1999 Style Bumper for 2003-2011 Element"),
        Some(YearRange::new(2003, 2011))
    );
}

#[test]
fn first_range_wins() {
    assert_eq!(
        extract_year_range("2003-2011 Element / 2005-2010 Ridgeline"),
        Some(YearRange::new(2003, 2011))
    );
}

#[test]
fn reversed_range_is_kept_as_written() {
    let range = extract_year_range("2011-2003 Honda Element").unwrap();
    assert_eq!(range, YearRange::new(2011, 2003));
    assert!(range.is_reversed());
}

// ============================================================================
// YEAR TERMS
// ============================================================================

#[test]
fn year_inside_range_matches() {
    let catalog = make_catalog(&["2003-2011 Honda Element"]);
    let options = SearchOptions::default();
    for year in ["2003", "2004", "2011"] {
        let hits = search(&catalog, year, &options);
        assert_eq!(hits.len(), 1, "{} should match", year);
        assert_eq!(hits[0].matched_year, year.parse().ok());
    }
}

#[test]
fn year_outside_range_does_not_match() {
    let catalog = make_catalog(&["2003-2011 Honda Element"]);
    let options = SearchOptions::default();
    assert!(search(&catalog, "2002", &options).is_empty());
    assert!(search(&catalog, "2012", &options).is_empty());
}

#[test]
fn single_year_title_matches_only_that_year() {
    let catalog = make_catalog(&["1998 Ford F-150 Side Mirror"]);
    let options = SearchOptions::default();
    assert_eq!(search(&catalog, "1998", &options).len(), 1);
    assert!(search(&catalog, "1999", &options).is_empty());
}

#[test]
fn year_term_falls_back_to_text_without_range() {
    let catalog = make_catalog(&["Gasket A20045 Fits Honda Element"]);
    let hits = search(&catalog, "2004", &SearchOptions::default());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].matched_year, None);
}

#[test]
fn year_in_range_matches_even_when_absent_from_text() {
    let catalog = sample_catalog();
    let hits = search(&catalog, "2009 subaru", &SearchOptions::default());
    assert_eq!(titles(&hits), vec!["2008/2012 Subaru WRX Hood Scoop"]);
    assert_eq!(hits[0].matched_year, Some(2009));
}

#[test]
fn conjunction_requires_every_term() {
    let catalog = sample_catalog();
    let options = SearchOptions::default();
    assert!(search(&catalog, "honda 2020", &options).is_empty());
    assert!(search(&catalog, "element 1998", &options).is_empty());
}

// ============================================================================
// PARTIAL YEARS
// ============================================================================

#[test]
fn partial_year_is_a_prefix_not_a_substring() {
    let catalog = make_catalog(&["2008/2012 Subaru WRX Hood Scoop"]);
    let options = SearchOptions::default();
    let hits = search(&catalog, "20", &options);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].matched_year, Some(2008));
    assert!(search(&catalog, "9", &options).is_empty());
}

#[test]
fn partial_year_reports_first_covered_match() {
    let catalog = make_catalog(&["1995-2001 Honda Civic Headlight"]);
    let options = SearchOptions::default();
    assert_eq!(search(&catalog, "19", &options)[0].matched_year, Some(1995));
    assert_eq!(search(&catalog, "200", &options)[0].matched_year, Some(2000));
    assert_eq!(search(&catalog, "1", &options)[0].matched_year, Some(1995));
}

#[test]
fn disabling_partial_years_leaves_text_matching() {
    let catalog = make_catalog(&["1998-2012 Toyota Tacoma Bed Rail", "2003-2011 Honda Element"]);
    let on = SearchOptions::default();
    let off = SearchOptions {
        partial_years: false,
        ..SearchOptions::default()
    };

    // 2000-2009 are covered, but "200" never appears in "1998-2012".
    let hits = search(&catalog, "tacoma 200", &on);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].matched_year, Some(2000));
    assert!(search(&catalog, "tacoma 200", &off).is_empty());

    // "200" is still found as text in "2003-2011".
    let hits = search(&catalog, "honda 200", &off);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].matched_year, None);
}

#[test]
fn reversed_range_never_matches_by_year() {
    let catalog = make_catalog(&["2011-2003 Honda Element Mud Flap"]);
    let options = SearchOptions::default();
    assert!(search(&catalog, "2005", &options).is_empty());
    assert!(search(&catalog, "19", &options).is_empty());

    // The years that are literally in the title still match as text.
    let hits = search(&catalog, "2003", &options);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].matched_year, None);
}

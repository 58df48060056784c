//! Title highlighting and dropdown markup.

use super::common::sample_catalog;
use yearsift::{escape_html, highlight, render_results, search, SearchOptions};

#[test]
fn wraps_exactly_the_matched_word() {
    assert_eq!(
        highlight("2003-2011 Honda Element", "honda"),
        "2003-2011 <mark>Honda</mark> Element"
    );
}

#[test]
fn year_terms_inside_a_range_are_not_highlighted_when_absent() {
    // "2004" matched through the range; there's nothing literal to mark.
    assert_eq!(
        highlight("2003-2011 Honda Element", "2004 element"),
        "2003-2011 Honda <mark>Element</mark>"
    );
}

#[test]
fn literal_years_are_highlighted() {
    assert_eq!(
        highlight("2003-2011 Honda Element", "2011"),
        "2003-<mark>2011</mark> Honda Element"
    );
}

#[test]
fn partial_terms_highlight_inside_words() {
    assert_eq!(
        highlight("1995-2001 Honda Civic Headlight", "head"),
        "1995-2001 Honda Civic <mark>Head</mark>light"
    );
}

#[test]
fn title_is_escaped_even_without_matches() {
    assert_eq!(
        highlight(r#"Bumper "Sport" <Left> & Right"#, "civic"),
        "Bumper &quot;Sport&quot; &lt;Left&gt; &amp; Right"
    );
}

#[test]
fn terms_that_look_like_markup_stay_escaped() {
    assert_eq!(
        highlight("Lens <b> Cover", "<b>"),
        "Lens <mark>&lt;b&gt;</mark> Cover"
    );
    assert_eq!(highlight("Tom & Jerry", "amp;"), "Tom &amp; Jerry");
}

#[test]
fn escape_html_is_identity_on_plain_text() {
    assert_eq!(escape_html("2003-2011 Honda Element"), "2003-2011 Honda Element");
}

#[test]
fn dropdown_lists_hits_in_order() {
    let catalog = sample_catalog();
    let hits = search(&catalog, "honda", &SearchOptions::default());
    let html = render_results(&hits, "honda");

    let first = html.find("product-0").unwrap();
    let second = html.find("product-4").unwrap();
    let third = html.find("product-5").unwrap();
    assert!(first < second && second < third);
    assert_eq!(html.matches("cps-result-item").count(), hits.len());
    assert_eq!(html.matches("<mark>").count(), hits.len());
}

#[test]
fn dropdown_without_hits_echoes_the_query() {
    let html = render_results(&[], "2025 tesla");
    assert!(html.contains("cps-no-results"));
    assert!(html.contains("2025 tesla"));
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTML for the predictive-search dropdown.
//!
//! The host drops this markup straight into its results container, so every
//! interpolated value goes through `escape_html`. Highlighting finds matches
//! on the raw title and escapes around them: a query for "amp" can't land
//! inside `&amp;`, and a query for "mark" can't land inside a `<mark>` tag a
//! previous term inserted.

use crate::types::SearchHit;
use regex::RegexBuilder;
use std::fmt::Write;

/// Opening emphasis marker wrapped around highlighted terms.
pub const MARK_OPEN: &str = "<mark>";
/// Closing emphasis marker.
pub const MARK_CLOSE: &str = "</mark>";

/// Path prefix for product links.
pub const PRODUCT_PATH: &str = "/products/";

/// Thumbnail edge length in CSS pixels.
const THUMBNAIL_PX: u32 = 60;

/// Escape text for element content and double- or single-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape `title` and wrap every case-insensitive occurrence of each query
/// term in `<mark>`.
///
/// Terms are the raw whitespace-split query, not lowercased; matching is
/// case-insensitive and literal (regex metacharacters in a term are escaped).
/// Longer terms win where two terms would match at the same spot.
///
/// ```
/// use yearsift::highlight;
///
/// assert_eq!(
///     highlight("2003-2011 Honda Element", "honda"),
///     "2003-2011 <mark>Honda</mark> Element"
/// );
/// ```
pub fn highlight(title: &str, query: &str) -> String {
    let mut terms: Vec<&str> = query.split_whitespace().collect();
    if terms.is_empty() {
        return escape_html(title);
    }
    terms.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    terms.dedup();

    let pattern = terms
        .iter()
        .map(|term| regex::escape(term))
        .collect::<Vec<_>>()
        .join("|");
    let re = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re,
        Err(err) => {
            // Only reachable for absurdly long queries that blow the size limit.
            tracing::debug!(error = %err, "highlight pattern rejected");
            return escape_html(title);
        }
    };

    let mut out = String::with_capacity(title.len() + terms.len() * 16);
    let mut last = 0;
    for m in re.find_iter(title) {
        out.push_str(&escape_html(&title[last..m.start()]));
        out.push_str(MARK_OPEN);
        out.push_str(&escape_html(m.as_str()));
        out.push_str(MARK_CLOSE);
        last = m.end();
    }
    out.push_str(&escape_html(&title[last..]));
    out
}

/// Render the dropdown for a set of hits.
///
/// No hits renders the "no products" notice echoing the query.
pub fn render_results(hits: &[SearchHit<'_>], query: &str) -> String {
    if hits.is_empty() {
        return format!(
            r#"<div class="cps-no-results">No products found for "{}"</div>"#,
            escape_html(query)
        );
    }

    let mut html = String::from(
        r#"<div class="cps-results" data-search-results><div class="cps-results-header">Products</div><div class="cps-results-list">"#,
    );
    for (idx, hit) in hits.iter().enumerate() {
        let product = &hit.entry.source;
        // Writing into a String can't fail.
        let _ = write!(
            html,
            r#"<div class="cps-result-item" data-index="{}" role="option"><a href="{}{}" class="cps-result-link">"#,
            idx,
            PRODUCT_PATH,
            escape_html(&product.handle)
        );
        if let Some(image) = product.image.as_deref().filter(|src| !src.is_empty()) {
            let _ = write!(
                html,
                r#"<img class="cps-result-img" src="{}" alt="" loading="lazy" width="{px}" height="{px}">"#,
                escape_html(image),
                px = THUMBNAIL_PX
            );
        }
        let _ = write!(
            html,
            r#"<div class="cps-result-info"><div class="cps-result-title">{}</div><div class="cps-result-price">{}</div></div></a></div>"#,
            highlight(&product.title, query),
            escape_html(&product.price)
        );
    }
    html.push_str("</div></div>");
    html
}

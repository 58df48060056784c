// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the storefront script.
//!
//! The page script owns the DOM: it reads the JSON payload out of its
//! `<script>` element, debounces input, and writes the HTML we hand back.
//! Everything else (catalog state, matching, markup, cursor arithmetic)
//! lives here.
//!
//! The catalog is the process-wide `CatalogCache`, so every search widget
//! on the page shares one parsed copy.

use crate::cache::{CatalogCache, CatalogStatus};
use crate::config::{limit_from_number, SearchOptions};
use crate::host::{AttachRegistry, Dispatch, QueryGate, QueryTicket, SearchStrategy};
use crate::nav::{NavKey, SelectionCursor};
use crate::render::{highlight, render_results};
use crate::search::search;
use crate::types::{SearchHit, YearRange};
use crate::year::extract_year_range;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Search hit for TypeScript consumption.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResultOutput<'a> {
    title: &'a str,
    handle: &'a str,
    price: &'a str,
    image: Option<&'a str>,
    /// "2003-2011", or null for titles without a year
    year_range: Option<String>,
    matched_year: Option<u16>,
    position: usize,
}

impl<'a> From<&SearchHit<'a>> for SearchResultOutput<'a> {
    fn from(hit: &SearchHit<'a>) -> Self {
        let product = &hit.entry.source;
        Self {
            title: &product.title,
            handle: &product.handle,
            price: &product.price,
            image: product.image.as_deref(),
            year_range: hit.entry.year_range.map(|range| range.to_string()),
            matched_year: hit.matched_year,
            position: hit.position,
        }
    }
}

#[derive(Serialize)]
struct YearRangeOutput {
    start: u16,
    end: u16,
}

impl From<YearRange> for YearRangeOutput {
    fn from(range: YearRange) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

/// One search widget's view of the shared catalog.
#[wasm_bindgen]
pub struct YearsiftSearch {
    options: SearchOptions,
    strategy: SearchStrategy,
    attached: AttachRegistry,
    cursor: SelectionCursor,
    gate: QueryGate,
}

#[wasm_bindgen]
impl YearsiftSearch {
    /// Create a searcher.
    ///
    /// `options` is `{ limit?: number, partialYears?: boolean }`; missing
    /// fields take their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(options: Option<JsValue>) -> Result<YearsiftSearch, JsValue> {
        let options: SearchOptions = match options {
            Some(opts) if !opts.is_undefined() && !opts.is_null() => {
                from_value(opts).map_err(|e| e.to_string())?
            }
            _ => SearchOptions::default(),
        };
        Ok(YearsiftSearch {
            options,
            strategy: SearchStrategy::default(),
            attached: AttachRegistry::new(),
            cursor: SelectionCursor::new(),
            gate: QueryGate::new(),
        })
    }

    /// Hand over the payload text, or nothing if the element isn't on the
    /// page yet. Returns "pending", "ready" or "failed".
    ///
    /// Once the catalog is ready (or failed) further payloads are ignored.
    #[wasm_bindgen]
    pub fn load(&self, payload: Option<String>) -> String {
        let source = move || payload.clone();
        CatalogCache::global().ensure_loaded(&source).as_str().to_string()
    }

    /// Clear a parse failure so the next `load` tries again.
    #[wasm_bindgen]
    pub fn retry(&self) {
        CatalogCache::global().retry();
    }

    #[wasm_bindgen]
    pub fn status(&self) -> String {
        CatalogCache::global().status().as_str().to_string()
    }

    /// Switch between year-aware search and the theme's built-in search.
    #[wasm_bindgen(js_name = useHostDefault)]
    pub fn use_host_default(&mut self, enabled: bool) {
        self.strategy = if enabled {
            SearchStrategy::HostDefault
        } else {
            SearchStrategy::YearAware
        };
    }

    /// Matching products, in catalog order. Empty until the catalog is ready.
    ///
    /// A missing, zero or negative `limit` uses the configured one.
    #[wasm_bindgen]
    pub fn search(&self, query: &str, limit: Option<f64>) -> Result<JsValue, JsValue> {
        let options = match limit.map(limit_from_number) {
            Some(limit) if limit > 0 => self.options.with_limit(Some(limit)),
            _ => self.options,
        };
        let catalog = CatalogCache::global().catalog();
        let hits = match catalog.as_deref() {
            Some(catalog) => search(catalog, query, &options),
            None => Vec::new(),
        };
        let output: Vec<SearchResultOutput<'_>> = hits.iter().map(Into::into).collect();
        to_value(&output).map_err(|e| e.to_string().into())
    }

    /// Dropdown HTML for `query`, or `undefined` when the host should run its
    /// own behavior (blank query, host-default strategy).
    ///
    /// A catalog that failed to load renders the "no products" notice.
    /// Rendering clears the keyboard selection.
    #[wasm_bindgen]
    pub fn render(&mut self, query: &str) -> Option<String> {
        let catalog = CatalogCache::global().catalog();
        let entries = catalog.as_deref().unwrap_or(&[]);
        match self.strategy.dispatch(entries, query, &self.options) {
            Dispatch::Results(hits) => {
                self.cursor.reset();
                Some(render_results(&hits, query))
            }
            Dispatch::Delegate => None,
        }
    }

    #[wasm_bindgen]
    pub fn highlight(&self, title: &str, query: &str) -> String {
        highlight(title, query)
    }

    /// Record that the widget with `id` is hooked. False if it already was.
    #[wasm_bindgen]
    pub fn attach(&self, id: &str) -> bool {
        self.attached.attach(id)
    }

    #[wasm_bindgen]
    pub fn detach(&self, id: &str) -> bool {
        self.attached.detach(id)
    }

    /// Apply a `KeyboardEvent.key` against `count` rendered items.
    ///
    /// Returns `{ action: "moved", index }`, `{ action: "activate", index }`
    /// or `{ action: "ignored" }`.
    #[wasm_bindgen]
    pub fn navigate(&mut self, key: &str, count: usize) -> Result<JsValue, JsValue> {
        let outcome = self.cursor.handle(NavKey::from_key(key), count);
        to_value(&outcome).map_err(|e| e.to_string().into())
    }

    #[wasm_bindgen(js_name = resetSelection)]
    pub fn reset_selection(&mut self) {
        self.cursor.reset();
    }

    /// Ticket for a query about to run. Compare with `isCurrent` before
    /// rendering its results.
    #[wasm_bindgen(js_name = issueQuery)]
    pub fn issue_query(&self) -> f64 {
        // JS numbers are exact up to 2^53; no page issues that many queries.
        self.gate.issue().0 as f64
    }

    #[wasm_bindgen(js_name = isCurrent)]
    pub fn is_current(&self, ticket: f64) -> bool {
        self.gate.is_current(QueryTicket(ticket as u64))
    }
}

/// Year coverage of a product title: `{ start, end }` or `null`.
#[wasm_bindgen(js_name = extractYearRange)]
pub fn extract_year_range_js(title: &str) -> Result<JsValue, JsValue> {
    let range = extract_year_range(title).map(YearRangeOutput::from);
    to_value(&range).map_err(|e| e.to_string().into())
}

/// Whether the shared catalog is ready; for scripts that poll before
/// constructing a searcher.
#[wasm_bindgen(js_name = catalogReady)]
pub fn catalog_ready() -> bool {
    CatalogCache::global().status() == CatalogStatus::Ready
}

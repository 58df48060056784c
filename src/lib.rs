//! Year-range aware predictive search over an in-memory product catalog.
//!
//! Auto-parts titles lead with model-year coverage ("2003-2011 Honda
//! Element"). A shopper typing "2004 element" should find that part even
//! though "2004" appears nowhere in it. This crate makes years a first-class
//! search dimension next to plain substring matching.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │   year.rs   │────▶│  catalog.rs  │────▶│    cache.rs      │
//! │ (extract_   │     │ (normalize_  │     │ (CatalogCache:   │
//! │  year_range)│     │  catalog)    │     │  tri-state)      │
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!                                                   │
//!        ┌──────────────────────────────────────────┘
//!        ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                      search/                         │
//! │  query (tokenize) → matcher (match_term) → service   │
//! └─────────────────────────────────────────────────────┘
//!        │
//!        ▼
//! ┌──────────────┐  ┌────────────┐  ┌──────────────────┐
//! │  render.rs   │  │  nav.rs    │  │  host.rs         │
//! │ (highlight,  │  │ (selection │  │ (strategy,       │
//! │  dropdown)   │  │  cursor)   │  │  attach, gate)   │
//! └──────────────┘  └────────────┘  └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use yearsift::{load_catalog, search, SearchOptions};
//!
//! let catalog = load_catalog(r#"[
//!     {"t": "2003-2011 Honda Element Tail Light", "h": "tail-light", "p": "$49.99"},
//!     {"t": "1998 Ford F-150 Mirror", "h": "mirror", "p": "$20.00"}
//! ]"#);
//!
//! let hits = search(&catalog, "2004 element", &SearchOptions::default());
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].entry.source.handle, "tail-light");
//! assert_eq!(hits[0].matched_year, Some(2004));
//! ```

// Module declarations
pub mod cache;
pub mod catalog;
pub mod config;
pub mod contracts;
pub mod error;
pub mod host;
pub mod nav;
pub mod render;
pub mod search;
pub mod testing;
mod types;
mod year;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use cache::{CatalogCache, CatalogSource, CatalogState, CatalogStatus, FileSource, StaticSource};
pub use catalog::{load_catalog, normalize_catalog, normalize_entry, parse_catalog, DEFAULT_PAYLOAD_KEY};
pub use config::{limit_from_number, SearchOptions, DEFAULT_LIMIT, LEGACY_LIMIT};
pub use error::{CatalogError, Result};
pub use host::{AttachRegistry, Dispatch, QueryGate, QueryTicket, SearchStrategy};
pub use nav::{NavKey, NavOutcome, SelectionCursor};
pub use render::{escape_html, highlight, render_results};
pub use search::{match_term, match_terms, matches, search, search_entries, tokenize, TermMatch};
pub use types::{IndexedEntry, RawCatalogEntry, SearchHit, YearRange, MAX_YEAR, MIN_YEAR};
pub use year::{extract_year_range, first_year_with_prefix, is_partial_year_term, parse_year_term};

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a catalog search.
//!
//! A storefront hands us `RawCatalogEntry` records. We annotate each one
//! exactly once into an `IndexedEntry` (year range plus lowercase search
//! text), and every search after that is a read-only walk over those.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **YearRange**: both ends in `1900..=2099`. `start <= end` is expected but
//!   not enforced; a reversed range is empty and never matches a year.
//!
//! - **IndexedEntry**: `search_text` is lowercase and a pure function of the
//!   title, type, vendor and tags. `year_range` is derived from the title alone.
//!
//! - **Catalog order**: the indexed catalog keeps the payload order. That order
//!   is the only ranking there is.

use serde::{Deserialize, Serialize};

// =============================================================================
// CATALOG INPUT
// =============================================================================

/// One product as it arrives in the page payload.
///
/// The storefront emits compact keys (`t`, `h`, `p`, `img`) to keep the
/// embedded JSON small; the long names are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCatalogEntry {
    #[serde(rename = "t", alias = "title")]
    pub title: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// URL handle, forwarded to the renderer.
    #[serde(rename = "h", alias = "handle", default)]
    pub handle: String,
    /// Preformatted price string.
    #[serde(rename = "p", alias = "price", default)]
    pub price: String,
    #[serde(
        rename = "img",
        alias = "image",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
}

impl RawCatalogEntry {
    /// Entry with only a title; everything else empty.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: None,
            vendor: None,
            tags: None,
            handle: String::new(),
            price: String::new(),
            image: None,
        }
    }
}

// =============================================================================
// YEAR RANGES
// =============================================================================

/// Smallest year the extractor recognizes (`19xx`).
pub const MIN_YEAR: u16 = 1900;

/// Largest year the extractor recognizes (`20xx`).
pub const MAX_YEAR: u16 = 2099;

/// Inclusive model-year coverage parsed out of a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    pub start: u16,
    pub end: u16,
}

impl YearRange {
    pub fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// A range covering a single year.
    pub fn single(year: u16) -> Self {
        Self {
            start: year,
            end: year,
        }
    }

    /// Inclusive containment. Always false for a reversed range.
    #[inline]
    pub fn contains(&self, year: u16) -> bool {
        self.start <= year && year <= self.end
    }

    /// Every year in the range, in ascending order. Empty when reversed.
    pub fn years(&self) -> impl Iterator<Item = u16> {
        self.start..=self.end
    }

    /// True when `end < start`, i.e. the title listed the years backwards.
    pub fn is_reversed(&self) -> bool {
        self.end < self.start
    }
}

impl std::fmt::Display for YearRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

// =============================================================================
// INDEXED ENTRIES
// =============================================================================

/// A catalog entry annotated for matching. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedEntry {
    pub source: RawCatalogEntry,
    pub year_range: Option<YearRange>,
    pub search_text: String,
}

/// A matching entry, as returned to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub entry: &'a IndexedEntry,
    /// Index of the entry in the catalog.
    pub position: usize,
    /// First year satisfied by a year term, if any term matched through the
    /// year range rather than the text.
    pub matched_year: Option<u16>,
}

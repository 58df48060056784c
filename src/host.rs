// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The seams between the engine and the storefront page.
//!
//! Three small pieces the page integration leans on:
//!
//! - `SearchStrategy`: the host picks year-aware search or its own component's
//!   default search, instead of the engine patching the component.
//! - `AttachRegistry`: hooking a search widget is idempotent, so the host can
//!   re-run setup on every DOM change notification without double-binding.
//! - `QueryGate`: a ticket per query so results from a query the user has
//!   already typed past can be dropped.

use crate::config::SearchOptions;
use crate::search::search;
use crate::types::{IndexedEntry, SearchHit};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

// =============================================================================
// STRATEGY
// =============================================================================

/// Which search answers the user's typing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchStrategy {
    /// This engine: year ranges, partial years, text.
    #[default]
    YearAware,
    /// The host component's built-in search.
    HostDefault,
}

/// Outcome of dispatching a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch<'a> {
    /// Render these (possibly empty) results.
    Results(Vec<SearchHit<'a>>),
    /// Do nothing; let the host component run its own behavior.
    Delegate,
}

impl SearchStrategy {
    /// Route a query.
    ///
    /// A blank query always delegates so the host can reset its dropdown the
    /// way it normally does.
    pub fn dispatch<'a>(
        self,
        catalog: &'a [IndexedEntry],
        query: &str,
        options: &SearchOptions,
    ) -> Dispatch<'a> {
        match self {
            SearchStrategy::HostDefault => Dispatch::Delegate,
            SearchStrategy::YearAware if query.trim().is_empty() => Dispatch::Delegate,
            SearchStrategy::YearAware => Dispatch::Results(search(catalog, query, options)),
        }
    }
}

// =============================================================================
// ATTACHMENT
// =============================================================================

/// Remembers which widgets have been hooked.
#[derive(Debug, Default)]
pub struct AttachRegistry {
    attached: Mutex<HashSet<String>>,
}

impl AttachRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `target` as hooked. True only the first time; the host binds its
    /// listeners when this returns true and does nothing otherwise.
    pub fn attach(&self, target: &str) -> bool {
        let fresh = self.attached.lock().insert(target.to_string());
        if fresh {
            tracing::debug!(widget = target, "attached search widget");
        }
        fresh
    }

    pub fn is_attached(&self, target: &str) -> bool {
        self.attached.lock().contains(target)
    }

    /// Forget a widget that left the page.
    pub fn detach(&self, target: &str) -> bool {
        self.attached.lock().remove(target)
    }

    pub fn len(&self) -> usize {
        self.attached.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.attached.lock().is_empty()
    }
}

// =============================================================================
// STALE RESULTS
// =============================================================================

/// Identifies one issued query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueryTicket(pub u64);

/// Latest-query-wins bookkeeping.
#[derive(Debug, Default)]
pub struct QueryGate {
    latest: AtomicU64,
}

impl QueryGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticket for a new query; every earlier ticket becomes stale.
    pub fn issue(&self) -> QueryTicket {
        QueryTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Whether results for `ticket` should still be shown.
    pub fn is_current(&self, ticket: QueryTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }
}

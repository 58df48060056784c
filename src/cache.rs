// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The session's catalog, loaded once.
//!
//! The product payload may not be on the page when the script first runs, and
//! when it is there it may be garbage. Those are different situations: the
//! first should be retried on the next attempt, the second should stop
//! retrying and just return nothing. A nullable "loaded" flag can't tell them
//! apart, so the state is explicit:
//!
//! ```text
//!                 fetch() -> None
//!               ┌────────────────┐
//!               ▼                │
//!   ┌───────────────────┐  ok   ┌─────────────┐
//!   │   Uninitialized   │──────▶│    Ready    │  (memoized for the session)
//!   └───────────────────┘       └─────────────┘
//!        │ parse error   ▲
//!        ▼               │ retry()
//!   ┌───────────────────┐│
//!   │      Failed       │┘  searches return nothing
//!   └───────────────────┘
//! ```
//!
//! Readers clone an `Arc` out of the lock and search without holding it, so
//! concurrent searches never contend on anything but a brief read lock.

use crate::catalog::{normalize_catalog, parse_catalog};
use crate::error::{CatalogError, Result};
use crate::types::IndexedEntry;
use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

// =============================================================================
// SOURCES
// =============================================================================

/// Where the catalog payload comes from.
///
/// `Ok(None)` means "not available yet": the payload hasn't appeared, try
/// again later. An `Err` is a source that exists but can't be read.
pub trait CatalogSource {
    fn fetch(&self) -> Result<Option<String>>;
}

impl<F> CatalogSource for F
where
    F: Fn() -> Option<String>,
{
    fn fetch(&self) -> Result<Option<String>> {
        Ok(self())
    }
}

/// A payload already in hand.
#[derive(Debug, Clone)]
pub struct StaticSource(pub String);

impl CatalogSource for StaticSource {
    fn fetch(&self) -> Result<Option<String>> {
        Ok(Some(self.0.clone()))
    }
}

/// A JSON file on disk. A missing file is "not available yet".
#[derive(Debug, Clone)]
pub struct FileSource(pub PathBuf);

impl CatalogSource for FileSource {
    fn fetch(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.0) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(CatalogError::Io(format!("{}: {}", self.0.display(), err))),
        }
    }
}

// =============================================================================
// STATE
// =============================================================================

/// Where the session's catalog stands.
#[derive(Debug, Clone)]
pub enum CatalogState {
    /// Nothing loaded yet, or the source wasn't ready on the last attempt.
    Uninitialized,
    /// Normalized and memoized.
    Ready(Arc<[IndexedEntry]>),
    /// The payload was there but unusable.
    Failed(CatalogError),
}

/// Coarse status for hosts and bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogStatus {
    Pending,
    Ready,
    Failed,
}

impl CatalogStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CatalogStatus::Pending => "pending",
            CatalogStatus::Ready => "ready",
            CatalogStatus::Failed => "failed",
        }
    }
}

impl CatalogState {
    pub fn status(&self) -> CatalogStatus {
        match self {
            CatalogState::Uninitialized => CatalogStatus::Pending,
            CatalogState::Ready(_) => CatalogStatus::Ready,
            CatalogState::Failed(_) => CatalogStatus::Failed,
        }
    }
}

/// Memoized catalog with explicit load/retry.
#[derive(Debug)]
pub struct CatalogCache {
    state: RwLock<CatalogState>,
}

impl Default for CatalogCache {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogCache {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(CatalogState::Uninitialized),
        }
    }

    /// A cache that starts out ready with `catalog`.
    pub fn ready(catalog: Vec<IndexedEntry>) -> Self {
        Self {
            state: RwLock::new(CatalogState::Ready(catalog.into())),
        }
    }

    /// The process-wide cache shared by every search on the page.
    pub fn global() -> &'static CatalogCache {
        static GLOBAL: OnceLock<CatalogCache> = OnceLock::new();
        GLOBAL.get_or_init(CatalogCache::new)
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> CatalogState {
        self.state.read().clone()
    }

    pub fn status(&self) -> CatalogStatus {
        self.state.read().status()
    }

    /// The catalog if it's ready; `None` while pending or after a failure.
    pub fn catalog(&self) -> Option<Arc<[IndexedEntry]>> {
        match &*self.state.read() {
            CatalogState::Ready(catalog) => Some(Arc::clone(catalog)),
            _ => None,
        }
    }

    /// Load from `source` unless a previous attempt already settled.
    ///
    /// `Ready` and `Failed` are sticky; only `Uninitialized` consults the
    /// source. A source that isn't ready leaves the cache `Uninitialized` so
    /// the next call tries again.
    ///
    /// The source is read and parsed with no lock held, so searches keep
    /// running during a slow load and a source may itself consult the cache.
    /// If two loads race, the first one to settle wins.
    pub fn ensure_loaded(&self, source: &dyn CatalogSource) -> CatalogStatus {
        let status = self.status();
        if status != CatalogStatus::Pending {
            return status;
        }

        let Some(next) = load_state(source) else {
            return self.status();
        };

        let mut state = self.state.write();
        // Another caller may have settled it while we were loading.
        if matches!(*state, CatalogState::Uninitialized) {
            *state = next;
        }
        state.status()
    }

    /// Forget a failure so the next `ensure_loaded` tries again.
    ///
    /// A ready catalog is left alone; catalogs don't change within a session.
    pub fn retry(&self) {
        let mut state = self.state.write();
        if matches!(*state, CatalogState::Failed(_)) {
            *state = CatalogState::Uninitialized;
        }
    }

    /// Drop whatever is cached. For hosts that swap catalogs between pages.
    pub fn reset(&self) {
        *self.state.write() = CatalogState::Uninitialized;
    }
}

/// Fetch and parse; `None` when the source isn't ready yet.
fn load_state(source: &dyn CatalogSource) -> Option<CatalogState> {
    let state = match source.fetch() {
        Ok(None) => {
            tracing::debug!("catalog source not ready");
            return None;
        }
        Ok(Some(payload)) => match parse_catalog(&payload) {
            Ok(entries) => {
                let catalog = normalize_catalog(entries);
                tracing::debug!(entries = catalog.len(), "catalog ready");
                CatalogState::Ready(catalog.into())
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to parse product data");
                CatalogState::Failed(err)
            }
        },
        Err(err) => {
            tracing::warn!(error = %err, "failed to read product data");
            CatalogState::Failed(err)
        }
    };
    Some(state)
}

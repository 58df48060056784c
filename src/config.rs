// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search options and host timing.
//!
//! The two storefront integrations disagreed on the result cap (8 vs 10) and
//! on whether half-typed years should match. Both are options here, with the
//! later integration's behavior as the default.
//!
//! Options come from three places, later ones winning: `Default`, the
//! environment (`SearchOptions::from_env`), and whatever the host passes per
//! call (CLI flags, a JS options object).

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Deserializer};

/// Result cap when nothing else is configured.
pub const DEFAULT_LIMIT: usize = 10;

/// Result cap used by the original header-search integration.
pub const LEGACY_LIMIT: usize = 8;

/// Input debounce the host should apply before searching, in milliseconds.
pub const DEBOUNCE_MS: u32 = 150;

/// Delay before retrying a catalog that wasn't on the page yet.
pub const RETRY_DELAY_MS: u32 = 500;

/// Delay before re-attaching after a search dialog opens.
pub const REATTACH_DELAY_MS: u32 = 100;

const ENV_RESULT_LIMIT: &str = "YEARSIFT_RESULT_LIMIT";
const ENV_PARTIAL_YEARS: &str = "YEARSIFT_PARTIAL_YEARS";

/// Per-search knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    /// Maximum number of hits (default: 10). Zero means "use the default".
    #[serde(deserialize_with = "deserialize_limit")]
    pub limit: usize,
    /// Match 1-3 digit terms against the start of covered years (default: true)
    pub partial_years: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            partial_years: true,
        }
    }
}

impl SearchOptions {
    /// Defaults overridden by `YEARSIFT_RESULT_LIMIT` / `YEARSIFT_PARTIAL_YEARS`.
    ///
    /// Unset or blank variables fall back to the defaults; a limit that isn't
    /// a positive integer is an error rather than a silent fallback.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut options = Self::default();
        let read = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(raw) = read(ENV_RESULT_LIMIT) {
            options.limit = raw
                .parse::<usize>()
                .ok()
                .filter(|limit| *limit > 0)
                .ok_or(CatalogError::InvalidOption {
                    name: ENV_RESULT_LIMIT,
                    value: raw,
                })?;
        }
        options.partial_years = parse_enabled_default_true(read(ENV_PARTIAL_YEARS).as_deref());
        Ok(options)
    }

    /// Replace the limit when one is given.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        if let Some(limit) = limit {
            self.limit = limit;
        }
        self
    }

    /// The limit actually applied: zero falls back to `DEFAULT_LIMIT`.
    #[inline]
    pub fn effective_limit(&self) -> usize {
        if self.limit == 0 {
            DEFAULT_LIMIT
        } else {
            self.limit
        }
    }
}

/// A limit as a JS host passes it: any number, possibly negative or
/// fractional. Non-positive and non-finite values become zero, which
/// `effective_limit` turns into the default; fractions are truncated.
pub fn limit_from_number(raw: f64) -> usize {
    if raw.is_finite() && raw >= 1.0 {
        raw as usize
    } else {
        0
    }
}

fn deserialize_limit<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.map_or(0, limit_from_number))
}

fn parse_enabled_default_true(raw: Option<&str>) -> bool {
    !matches!(
        raw.map(str::to_ascii_lowercase).as_deref(),
        Some("off" | "none" | "0" | "false")
    )
}

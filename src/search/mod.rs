// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: tokenize, match, collect.
//!
//! Everything culminates here. The query becomes lowercase terms, every term
//! has to be satisfied by an entry (as a year, the start of a year, or plain
//! text), and the first `limit` entries in catalog order win. There's no
//! scoring to speak of; the catalog order the storefront chose is the ranking.

pub mod matcher;
pub mod query;
pub mod service;

pub use matcher::{match_term, match_terms, matches, TermMatch};
pub use query::tokenize;
pub use service::{search, search_entries};

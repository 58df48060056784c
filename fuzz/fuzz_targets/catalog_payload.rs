// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for payload loading.
//!
//! The payload is whatever the page embedded. Loading fails open: garbage
//! becomes an empty catalog, never a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use yearsift::{load_catalog, parse_catalog, CatalogCache, CatalogStatus, StaticSource};

fuzz_target!(|data: &[u8]| {
    let payload = String::from_utf8_lossy(data);

    // INVARIANT 1: loading never panics, and agrees with parsing
    let catalog = load_catalog(&payload);
    match parse_catalog(&payload) {
        Ok(entries) => assert_eq!(entries.len(), catalog.len()),
        Err(_) => assert!(catalog.is_empty()),
    }

    // INVARIANT 2: the cache settles on the first attempt
    let cache = CatalogCache::new();
    let status = cache.ensure_loaded(&StaticSource(payload.into_owned()));
    assert_ne!(status, CatalogStatus::Pending);
    assert_eq!(cache.status(), status);
});

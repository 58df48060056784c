// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for highlighting.
//!
//! The output goes straight into the page, so whatever the title and query,
//! the only tags in it may be the `<mark>` pairs we inserted.

#![no_main]

use libfuzzer_sys::fuzz_target;
use yearsift::highlight;

fuzz_target!(|input: (&str, &str)| {
    let (title, query) = input;
    let title: String = title.chars().take(300).collect();
    let query: String = query.chars().take(100).collect();

    // INVARIANT 1: never panics
    let html = highlight(&title, &query);

    // INVARIANT 2: balanced markers
    let opens = html.matches("<mark>").count();
    let closes = html.matches("</mark>").count();
    assert_eq!(opens, closes, "unbalanced markers for {:?} / {:?}", title, query);

    // INVARIANT 3: no other markup survives
    let stripped = html.replace("<mark>", "").replace("</mark>", "");
    assert!(!stripped.contains('<'), "unescaped '<' in {:?}", html);
    assert!(!stripped.contains('>'), "unescaped '>' in {:?}", html);
    assert!(!stripped.contains('"'), "unescaped quote in {:?}", html);
});

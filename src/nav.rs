// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Arrow-key selection over the rendered results.
//!
//! The DOM side (class toggling, scrolling, clicking the link) belongs to the
//! host. This is just the cursor arithmetic, so it can be tested without a
//! browser.

use serde::Serialize;

/// Keys the dropdown reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Down,
    Up,
    Enter,
    Other,
}

impl NavKey {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Self {
        match key {
            "ArrowDown" => NavKey::Down,
            "ArrowUp" => NavKey::Up,
            "Enter" => NavKey::Enter,
            _ => NavKey::Other,
        }
    }
}

/// What the host should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "index", rename_all = "camelCase")]
pub enum NavOutcome {
    /// Selection changed; `None` means nothing is selected. The host should
    /// swallow the event.
    Moved(Option<usize>),
    /// Follow the link of this item. The host should swallow the event.
    Activate(usize),
    /// Not ours; let the event through (Enter then submits the form).
    Ignored,
}

/// Which result, if any, is highlighted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionCursor {
    index: Option<usize>,
}

impl SelectionCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Clear the selection; call whenever new results are rendered.
    pub fn reset(&mut self) {
        self.index = None;
    }

    /// Apply a key press against a list of `item_count` results.
    pub fn handle(&mut self, key: NavKey, item_count: usize) -> NavOutcome {
        if item_count == 0 {
            return NavOutcome::Ignored;
        }
        let last = item_count - 1;

        match key {
            NavKey::Down => {
                self.index = Some(match self.index {
                    None => 0,
                    Some(i) => (i + 1).min(last),
                });
                NavOutcome::Moved(self.index)
            }
            NavKey::Up => {
                self.index = match self.index {
                    None | Some(0) => None,
                    Some(i) => Some((i - 1).min(last)),
                };
                NavOutcome::Moved(self.index)
            }
            NavKey::Enter => match self.index {
                Some(i) if i <= last => NavOutcome::Activate(i),
                _ => NavOutcome::Ignored,
            },
            NavKey::Other => NavOutcome::Ignored,
        }
    }
}

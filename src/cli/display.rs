// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the yearsift CLI.
//!
//! OneDark on dark terminals, One Light on light ones. `NO_COLOR` and
//! non-TTY stdout (pipes, files) turn styling off entirely, so piping
//! `yearsift search` into another tool gets plain text.
//!
//! # Theme detection order
//!
//! 1. `YEARSIFT_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;
use yearsift::{SearchHit, YearRange};

/// Width between the │ borders.
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(explicit: Option<&str>, colorfgbg: Option<&str>) -> Theme {
    match explicit.map(str::to_ascii_lowercase).as_deref() {
        Some("light" | "l") => return Theme::Light,
        Some("dark" | "d") => return Theme::Dark,
        _ => {}
    }

    // "fg;bg": backgrounds 7 and 9-15 are the light ones (8 is dark gray)
    let light_bg = colorfgbg
        .and_then(|value| value.rsplit(';').next())
        .and_then(|bg| bg.parse::<u8>().ok())
        .is_some_and(|bg| bg >= 7 && bg != 8);
    if light_bg {
        Theme::Light
    } else {
        Theme::Dark
    }
}

fn detect_theme() -> Theme {
    parse_theme(
        std::env::var("YEARSIFT_THEME").ok().as_deref(),
        std::env::var("COLORFGBG").ok().as_deref(),
    )
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only on a TTY, and never with `NO_COLOR` set.
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Theme color plus modifiers, or plain text when colors are off.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Border color, empty when colors are off.
fn border(color_fn: fn() -> String) -> String {
    if use_colors() {
        color_fn()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Character count excluding ANSI escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Shorten plain text to `max` characters, ending in "…" when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let edge = border(GRAY);
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        edge,
        reset(),
        content,
        " ".repeat(pad),
        edge,
        reset()
    );
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let edge = border(GRAY);
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        edge,
        reset(),
        label_part,
        edge,
        "─".repeat(remaining),
        reset()
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(GRAY), "─".repeat(BOX_WIDTH), reset());
}

/// ╔═ TITLE ══════════╗ followed by a summary line and ╚═════╝
pub fn banner(title: &str, summary: &str) {
    let edge = border(BLUE);
    println!("{}╔{}╗{}", edge, "═".repeat(BOX_WIDTH), reset());
    let colored = themed(BRIGHT_CYAN, &[BOLD], title);
    let total_pad = BOX_WIDTH.saturating_sub(visible_len(&colored));
    let left_pad = total_pad / 2;
    println!(
        "{}║{}{}{}{}{}║{}",
        edge,
        reset(),
        " ".repeat(left_pad),
        colored,
        " ".repeat(total_pad - left_pad),
        edge,
        reset()
    );
    let summary = format!(" {}", summary);
    println!(
        "{}║{}{}{}║{}",
        edge,
        reset(),
        pad_right(&summary, BOX_WIDTH),
        edge,
        reset()
    );
    println!("{}╚{}╝{}", edge, "═".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// "2003-2011" in green, reversed ranges in red, "—" when there is none.
pub fn year_range_label(range: Option<YearRange>) -> String {
    match range {
        Some(range) if range.is_reversed() => themed(RED, &[], &range.to_string()),
        Some(range) => themed(GREEN, &[], &range.to_string()),
        None => themed(GRAY, &[], "—"),
    }
}

/// How a hit matched: the year a year term landed on, or "text".
pub fn match_label(hit: &SearchHit<'_>) -> String {
    match hit.matched_year {
        Some(year) => themed(YELLOW, &[BOLD], &format!("year {}", year)),
        None => themed(GRAY, &[], "text"),
    }
}

/// Zero-padded catalog position, dimmed.
pub fn position_label(position: usize) -> String {
    themed(GRAY, &[DIM], &format!("#{:<4}", position))
}

/// Bold count, red when zero.
pub fn count_label(count: usize) -> String {
    if count == 0 {
        themed(RED, &[BOLD], "0")
    } else {
        themed(GREEN, &[BOLD], &count.to_string())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════

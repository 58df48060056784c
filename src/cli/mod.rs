// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the yearsift command-line interface.
//!
//! Four subcommands for poking at a catalog export outside the browser:
//! `search` runs a query the way the storefront would, `inspect` shows what
//! year range every title parsed to, `years` and `highlight` exercise the
//! extractor and the highlighter on ad-hoc titles.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "yearsift",
    about = "Year-range aware predictive search for product catalogs",
    version
)]
pub struct Cli {
    /// Log catalog loading and search decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a catalog JSON export and display matching products
    Search {
        /// Path to the catalog JSON (the page's product-data payload)
        file: PathBuf,

        /// Search query, e.g. "2004 element"
        query: String,

        /// Maximum number of results (default: YEARSIFT_RESULT_LIMIT or 10)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Don't match 1-3 digit terms against the start of covered years
        #[arg(long)]
        no_partial_years: bool,

        /// Print the dropdown HTML instead of a table
        #[arg(long)]
        html: bool,
    },

    /// List every catalog entry with the year range parsed from its title
    Inspect {
        /// Path to the catalog JSON
        file: PathBuf,
    },

    /// Print the year range extracted from each title
    Years {
        /// Product titles
        #[arg(required = true)]
        titles: Vec<String>,
    },

    /// Print a title with query terms wrapped in <mark>
    Highlight {
        /// Product title
        title: String,

        /// Search query
        query: String,
    },
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::Path;
use tracing::Level;
use yearsift::{
    extract_year_range, highlight, render_results, search, CatalogCache, CatalogState, FileSource,
    IndexedEntry, SearchOptions,
};

mod cli;
use cli::display::{self, BOLD};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(log_level(cli.verbose))
        .init();

    let outcome = match cli.command {
        Commands::Search {
            file,
            query,
            limit,
            no_partial_years,
            html,
        } => run_search(&file, &query, limit, no_partial_years, html),
        Commands::Inspect { file } => run_inspect(&file),
        Commands::Years { titles } => {
            run_years(&titles);
            Ok(())
        }
        Commands::Highlight { title, query } => {
            println!("{}", highlight(&title, &query));
            Ok(())
        }
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// INFO by default, DEBUG with `--verbose`.
fn log_level(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Load a catalog file through the same cache the browser build uses.
///
/// The CLI is stricter than the page: a missing file or a payload that
/// doesn't parse is an error here rather than an empty result list.
fn load(path: &Path) -> Result<std::sync::Arc<[IndexedEntry]>> {
    let cache = CatalogCache::global();
    cache.ensure_loaded(&FileSource(path.to_path_buf()));
    match cache.state() {
        CatalogState::Ready(catalog) => Ok(catalog),
        CatalogState::Uninitialized => bail!("catalog not found: {}", path.display()),
        CatalogState::Failed(err) => {
            Err(err).with_context(|| format!("failed to load catalog {}", path.display()))
        }
    }
}

fn run_search(
    path: &Path,
    query: &str,
    limit: Option<usize>,
    no_partial_years: bool,
    html: bool,
) -> Result<()> {
    let mut options = SearchOptions::from_env()
        .context("invalid search options in environment")?
        .with_limit(limit);
    if no_partial_years {
        options.partial_years = false;
    }

    let catalog = load(path)?;
    let hits = search(&catalog, query, &options);

    if html {
        println!("{}", render_results(&hits, query));
        return Ok(());
    }

    display::banner(
        &format!("SEARCH \"{}\"", display::truncate(query, 40)),
        &format!(
            "{} of {} products (limit {})",
            display::count_label(hits.len()),
            catalog.len(),
            options.effective_limit()
        ),
    );
    if hits.is_empty() {
        return Ok(());
    }

    display::section_top("RESULTS");
    for hit in &hits {
        let product = &hit.entry.source;
        display::row(&format!(
            " {} {} {} {}",
            display::position_label(hit.position),
            display::pad_right(&display::year_range_label(hit.entry.year_range), 10),
            display::pad_right(&display::match_label(hit), 10),
            display::truncate(&product.title, 50)
        ));
        if !product.price.is_empty() {
            let detail = format!("{}  /products/{}", product.price, product.handle);
            display::row(&format!("       {}", display::themed(display::GRAY, &[], &detail)));
        }
    }
    display::section_bot();
    Ok(())
}

fn run_inspect(path: &Path) -> Result<()> {
    let catalog = load(path)?;
    let with_years = catalog.iter().filter(|e| e.year_range.is_some()).count();
    let reversed = catalog
        .iter()
        .filter(|e| e.year_range.is_some_and(|r| r.is_reversed()))
        .count();

    display::banner(
        &format!("CATALOG {}", display::truncate(&path.display().to_string(), 60)),
        &format!(
            "{} entries, {} with years, {} reversed",
            display::count_label(catalog.len()),
            with_years,
            reversed
        ),
    );
    if catalog.is_empty() {
        return Ok(());
    }

    display::section_top("ENTRIES");
    display::row(&display::themed(
        display::CYAN,
        &[BOLD],
        &format!(" {:<5} {:<10} {}", "#", "YEARS", "TITLE"),
    ));
    for (position, entry) in catalog.iter().enumerate() {
        display::row(&format!(
            " {} {} {}",
            display::position_label(position),
            display::pad_right(&display::year_range_label(entry.year_range), 10),
            display::truncate(&entry.source.title, 62)
        ));
    }
    display::section_bot();
    Ok(())
}

fn run_years(titles: &[String]) {
    for title in titles {
        println!(
            "{}  {}",
            display::pad_left(&display::year_range_label(extract_year_range(title)), 9),
            title
        );
    }
}

//! Custom cargo commands for yearsift.
//!
//! Usage:
//!   cargo xtask verify          - Run full verification suite
//!   cargo xtask test            - Run all tests
//!   cargo xtask check           - Quick check (check + test + clippy)
//!   cargo xtask bench           - Run benchmarks
//!   cargo xtask wasm            - Build the browser package with wasm-pack
//!   cargo xtask fuzz <TARGET>   - Run a fuzz target for 60 seconds

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &[
    "year_extraction",
    "search_queries",
    "catalog_payload",
    "highlight_markup",
];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("wasm") => wasm()?,
        Some("fuzz") => fuzz(args.next().as_deref())?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify          Run full verification suite (tests + clippy + wasm check)
  test            Run all Rust tests
  check           Quick check (cargo check + test + clippy)
  bench           Run benchmarks
  wasm            Build the browser package into pkg/ with wasm-pack
  fuzz <TARGET>   Run a fuzz target for 60 seconds (needs cargo-fuzz, nightly)

Fuzz targets: {}
"#,
        FUZZ_TARGETS.join(", ")
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("yearsift Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Running Rust tests (debug contracts on)...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[2/4] Running release tests (contracts compiled out)...");
    run_cargo(&["test", "--quiet", "--release"])?;
    println!("✓ Release tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Checking wasm bindings...");
    run_cargo(&[
        "check",
        "--quiet",
        "--lib",
        "--features",
        "wasm",
        "--target",
        "wasm32-unknown-unknown",
    ])?;
    println!("✓ Wasm bindings compile\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Build the npm-ready package
fn wasm() -> Result<()> {
    let root = project_root()?;
    let status = Command::new("wasm-pack")
        .args(["build", "--target", "web", "--release", "--out-dir", "pkg"])
        .args(["--", "--features", "wasm"])
        .current_dir(&root)
        .status()
        .context("Failed to run wasm-pack (is it installed?)")?;

    if !status.success() {
        bail!("wasm-pack build failed");
    }

    println!("✓ Package written to {}", root.join("pkg").display());
    Ok(())
}

/// Run one fuzz target for a minute
fn fuzz(target: Option<&str>) -> Result<()> {
    let Some(target) = target else {
        bail!("missing fuzz target; one of: {}", FUZZ_TARGETS.join(", "));
    };
    if !FUZZ_TARGETS.contains(&target) {
        bail!("unknown fuzz target {:?}; one of: {}", target, FUZZ_TARGETS.join(", "));
    }

    let root = project_root()?;
    let status = Command::new("cargo")
        .args(["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"])
        .current_dir(root.join("fuzz"))
        .status()
        .context("Failed to run cargo fuzz")?;

    if !status.success() {
        bail!("fuzz target {} failed", target);
    }

    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

//! `ronl-conformance`: Validates Turtle documents against the exchange standards.
//!
//! Runs the complete conformance suite across:
//! - Turtle 1.1 syntax
//! - Required prefix declarations
//! - Absolute, well-formed IRIs
//! - Codec round trip (fixed point, decision models kept verbatim)
//!
//! **Usage:**
//! ```
//! ronl-conformance [--dir <path>] [--fixtures]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use ronl_conformance::{run_all, run_fixtures, Severity};

/// Run the Turtle conformance suite.
#[derive(Parser)]
#[command(
    name = "ronl-conformance",
    about = "Validate CPSV-AP Turtle documents against the exchange standards"
)]
struct Args {
    /// Directory searched recursively for `.ttl` files (default: current directory).
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Check the bundled reference documents instead of a directory.
    #[arg(long)]
    fixtures: bool,
}

fn main() -> Result<()> {
    ronl_clients::init_tracing();
    let args = Args::parse();

    let report = if args.fixtures {
        run_fixtures()
    } else {
        run_all(&args.dir)?
    };

    println!("Turtle Conformance Report");
    println!("=========================");
    println!();

    for result in &report.results {
        println!(
            "[{}] {} {}: {}",
            result.severity, result.validator, result.document, result.message
        );
        for detail in &result.details {
            println!("       {}", detail);
        }
    }

    let passed = report.count(Severity::Pass);
    let warned = report.count(Severity::Warning);
    let failed = report.failure_count();
    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        passed, warned, failed
    );

    if failed > 0 {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", failed);
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}

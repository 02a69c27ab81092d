//! `ronl-import`: Reads a Turtle document into an editor state.
//!
//! **Usage:**
//! ```
//! ronl-import --ttl <service.ttl> [--out <state.json>] [--config <codec.toml>]
//! ```
//!
//! Predicates the codec does not model are logged as warnings. Exits
//! non-zero if the document cannot be imported.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ronl_ttl::parse_document_with;

/// Import a Turtle document as an editor state.
#[derive(Parser)]
#[command(name = "ronl-import", about = "Import a Turtle document as an editor state (JSON)")]
struct Args {
    /// Turtle document to import.
    #[arg(long)]
    ttl: PathBuf,

    /// Output file (default: stdout).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Codec configuration (TOML).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    ronl_clients::init_tracing();
    let args = Args::parse();
    let config = ronl_clients::load_config(args.config.as_deref())?;

    let turtle = std::fs::read_to_string(&args.ttl)
        .with_context(|| format!("Failed to read {}", args.ttl.display()))?;
    let outcome = parse_document_with(&turtle, &config)
        .with_context(|| format!("Failed to import {}", args.ttl.display()))?;

    for dropped in &outcome.unrecognized {
        tracing::warn!(
            line = dropped.line,
            predicate = %dropped.predicate,
            subject = dropped.subject.as_deref().unwrap_or("-"),
            "predicate not imported"
        );
    }

    let json = serde_json::to_string_pretty(&outcome.state)?;
    match &args.out {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(
                path = %path.display(),
                dropped = outcome.unrecognized.len(),
                "wrote editor state"
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}

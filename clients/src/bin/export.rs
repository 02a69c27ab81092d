//! `ronl-export`: Writes an editor state as a Turtle document.
//!
//! **Usage:**
//! ```
//! ronl-export --state <state.json> [--out <service.ttl>] [--config <codec.toml>]
//! ```
//!
//! Writes to stdout when `--out` is omitted.

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
use ronl_ttl::{to_turtle_with, EditorState};

/// Export an editor state as Turtle.
#[derive(Parser)]
#[command(name = "ronl-export", about = "Export an editor state (JSON) as Turtle")]
struct Args {
    /// Editor state as JSON.
    #[arg(long)]
    state: PathBuf,

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

    let json = std::fs::read_to_string(&args.state)
        .with_context(|| format!("Failed to read {}", args.state.display()))?;
    let state: EditorState = serde_json::from_str(&json)
        .with_context(|| format!("Invalid editor state in {}", args.state.display()))?;

    let turtle = to_turtle_with(&state, &config);
    match &args.out {
        Some(path) => {
            std::fs::write(path, &turtle)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = turtle.len(), "wrote Turtle");
        }
        None => print!("{turtle}"),
    }
    Ok(())
}

//! Parses a Turtle document and summarizes what the codec recognized.
//!
//! Run with: `cargo run --example inspect_document -p ronl-ttl -- path/to/service.ttl`

use ronl_ttl::{parse_document, to_turtle, DmnState};

fn main() {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: inspect_document <file.ttl>");
        std::process::exit(2);
    };
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("cannot read {path}: {e}");
            std::process::exit(1);
        }
    };
    let outcome = match parse_document(&text) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let state = &outcome.state;

    println!("Service {:?}", state.service.identifier);
    println!("  Temporal rules: {}", state.temporal_rules.len());
    println!("  Parameters:     {}", state.parameters.len());
    println!("  CPRMV rules:    {}", state.cprmv_rules.len());
    println!("  Concepts:       {}", state.concepts.len());
    match &state.dmn {
        Some(DmnState::Imported(dmn)) => println!(
            "  Decision model: {} preserved lines, status {:?}",
            dmn.raw.lines().count(),
            dmn.metadata.status
        ),
        Some(DmnState::Authored(dmn)) => {
            println!("  Decision model: authored from {}", dmn.file_name);
        }
        None => println!("  Decision model: none"),
    }
    for miss in &outcome.unrecognized {
        println!("  line {:>4}: unrecognized {}", miss.line, miss.predicate);
    }

    println!();
    let regenerated = to_turtle(state);
    println!("Regenerated document ({} bytes):", regenerated.len());
    let preview_end = regenerated
        .char_indices()
        .nth(400)
        .map_or(regenerated.len(), |(i, _)| i);
    println!("{}...", &regenerated[..preview_end]);
}

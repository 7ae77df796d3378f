// src/lib.rs

pub mod cli;
pub mod config;
pub mod drawio;
pub mod errors;
pub mod layout;
pub mod logging;
pub mod parse;
pub mod resolve;

use std::fs;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{load_and_validate, LayoutConfig};
use crate::errors::ConvertError;
use crate::resolve::Task;

/// High-level entry point used by `main.rs`.
///
/// This wires together the pipeline:
/// - layout config (defaults, or `--config` TOML overrides)
/// - scan: source text -> raw task records
/// - resolve: raw records -> dated tasks
/// - layout: tasks -> pixel geometry
/// - serialize: geometry -> draw.io XML
///
/// Data flows strictly forward; no stage reads back from a downstream one.
/// Hard failures (missing input file, zero tasks) abort before any output is
/// written.
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = match &args.config {
        Some(path) => load_and_validate(path)?,
        None => LayoutConfig::default(),
    };

    if !args.input.exists() {
        return Err(ConvertError::MissingSource(args.input.clone()).into());
    }
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("reading input file at {:?}", args.input))?;

    let records = parse::scan(&text);
    debug!(records = records.len(), "collected raw task records");

    // The resolver takes the reference date explicitly so it stays
    // deterministic; only this boundary reads the clock.
    let reference_date = Local::now().date_naive();
    let tasks = resolve::resolve(&records, reference_date);

    if args.dry_run {
        print_dry_run(&tasks);
        return Ok(());
    }

    let cells = layout::layout(&tasks, &cfg)?;
    let xml = drawio::serialize(&cells)?;

    fs::write(&args.output, xml)
        .with_context(|| format!("writing output file at {:?}", args.output))?;

    info!(
        tasks = tasks.len(),
        output = %args.output.display(),
        "conversion complete"
    );
    println!("Wrote {}", args.output.display());
    Ok(())
}

/// Simple dry-run output: print the resolved task table, write nothing.
fn print_dry_run(tasks: &[Task]) {
    println!("mermaid2drawio dry-run");
    println!("tasks ({}):", tasks.len());
    for task in tasks {
        println!("  - {} ({})", task.name, task.id);
        if let Some(ref section) = task.section {
            println!("      section: {section}");
        }
        println!("      start: {}", task.start);
        println!("      duration: {}d", task.duration_days);
        println!("      end: {}", task.end());
    }

    debug!("dry-run complete (no output written)");
}

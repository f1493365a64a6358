//! # Pattern Catalog CLI
//!
//! Runs the catalogue's demos and prints their transcripts to stdout.
//!
//! - No arguments: every demo, each under a `== Title (category) ==` banner.
//! - `DEMO...`: only the named demos, in the order given.
//! - `--category`: only one group.
//! - `--list`: names and categories, one per line.
//!
//! Logs go to stderr and are controlled by `RUST_LOG`.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use pattern_catalog::catalog::{Catalog, Category};
use pattern_catalog::error::Result;
use pattern_catalog::tracing::setup_tracing;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "pattern-catalog", version, about = "Runs Gang-of-Four design pattern demos")]
struct Cli {
    /// Demos to run by catalogue name (case-insensitive). Runs all when omitted.
    demos: Vec<String>,

    /// Only run demos from this group.
    #[arg(long, value_enum)]
    category: Option<Category>,

    /// List the available demos and exit.
    #[arg(long)]
    list: bool,
}

fn main() -> ExitCode {
    setup_tracing();
    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match run(&cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Catalog run failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let catalog = Catalog::new();
    let selected = catalog.select(&cli.demos, cli.category)?;

    if cli.list {
        Catalog::write_list(selected, out)?;
    } else {
        info!(count = selected.len(), "Running demos");
        Catalog::run_all(selected, out)?;
    }
    out.flush()?;
    Ok(())
}

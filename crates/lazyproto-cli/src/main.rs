//! lazyproto CLI
//!
//! Marks schema fields whose accessors are never called with `[lazy = true]`.
//! Runs against the current directory; the schema path and scan settings come
//! from `lazyproto.toml` and `LAZYPROTO_*` environment variables.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use lazyproto_analysis::pipeline::{run, RunOptions, RunReport};
use lazyproto_core::config::LazyConfig;
use lazyproto_core::errors::PipelineError;
use lazyproto_core::tracing::init_tracing;

mod report;

use report::VerboseReporter;

#[derive(Parser)]
#[command(name = "lazyproto")]
#[command(about = "Add [lazy = true] to schema fields whose accessors are never used")]
struct Cli {
    /// Report what would change without writing the schema file.
    #[arg(long)]
    dry_run: bool,

    /// Print scan counts and one line per field decision.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let root = std::env::current_dir().context("resolving working directory")?;
    let reporter = VerboseReporter::new(cli.verbose);

    let report = match execute(&root, &cli, &reporter) {
        Ok(report) => report,
        Err(err) if err.is_schema_missing() => {
            eprintln!("Error: {err}");
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => return Err(err.into()),
    };

    println!("{}", report.summary_line());
    Ok(ExitCode::SUCCESS)
}

/// Loads the layered config for `root` and runs the pipeline against it.
fn execute(root: &Path, cli: &Cli, reporter: &VerboseReporter) -> Result<RunReport, PipelineError> {
    let config = LazyConfig::load(root)?;
    let options = RunOptions {
        dry_run: cli.dry_run,
    };
    run(root, &config, options, reporter)
}

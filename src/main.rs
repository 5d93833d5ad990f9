//! Diodyne - Diode Circuit Batch Evaluator
//!
//! Evaluates diode and diode-resistor cases from a comma-separated
//! table with a truncated Taylor expansion and a fixed Picard
//! iteration.
//!
//! # Usage
//!
//! ```bash
//! diodyne cases.csv -o results.csv
//! RUST_LOG=debug diodyne cases.csv --report
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use diodyne::{error::Result, solver::run_case, table, ApproximationResult, CircuitCase};

/// Diode circuit batch evaluator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the case table file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Write the result table to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print a human-readable report per case instead of the table
    #[arg(long)]
    report: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    // Parse the case table
    let cases = table::parse_file(&args.input)?;
    let total = cases.len();

    // Evaluate each case; malformed rows and failed cases are skipped
    let mut processed: Vec<(CircuitCase, ApproximationResult)> = Vec::new();
    let mut skipped = 0usize;
    for case in cases {
        let case = match case {
            Ok(case) => case,
            Err(err) => {
                tracing::warn!(%err, "skipping malformed row");
                skipped += 1;
                continue;
            }
        };
        match run_case(&case) {
            Ok(result) => processed.push((case, result)),
            Err(err) => {
                tracing::warn!(row = case.line, %err, "case failed; skipping");
                skipped += 1;
            }
        }
    }
    tracing::info!(total, evaluated = processed.len(), skipped, "batch finished");

    // Emit results
    if args.report {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        for (case, result) in &processed {
            diodyne::report::write_case(case, result, &mut writer)?;
        }
        writer.flush()?;
    } else if let Some(path) = &args.output {
        let mut writer = BufWriter::new(File::create(path)?);
        table::write_results(&processed, &mut writer)?;
        writer.flush()?;
    } else {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        table::write_results(&processed, &mut writer)?;
        writer.flush()?;
    }

    Ok(())
}

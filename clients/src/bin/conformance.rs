//! `vd-conformance`: validates the vehicle data catalog and its built
//! schema artifact.
//!
//! Runs the complete conformance suite across:
//! - Catalog inventory and enumeration numbering
//! - Field declarations of every record
//! - Valid and invalid sample records
//! - The built `vehicle-data.schema.json`
//!
//! **Usage:**
//! ```
//! vd-conformance [--artifacts <path>]
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
use vehicle_data_conformance::{run_all, Severity, SuitePaths};

/// Run the vehicle data conformance suite.
#[derive(Parser)]
#[command(
    name = "vd-conformance",
    about = "Validate the vehicle data catalog and its built artifacts"
)]
struct Args {
    /// Path to the built artifacts directory (default: public/).
    #[arg(long, default_value = "public")]
    artifacts: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let paths = SuitePaths {
        artifacts: args.artifacts,
    };

    let report = run_all(&paths)?;

    println!("Vehicle Data Conformance Report");
    println!("===============================");
    println!();

    for result in &report.results {
        println!("{result}");
        for detail in &result.details {
            println!("       {detail}");
        }
    }

    let passed = report.count(Severity::Pass);
    let warned = report.count(Severity::Warning);
    let failed = report.count(Severity::Failure);

    println!();
    println!("Summary: {passed} passed, {warned} warnings, {failed} failed");

    if failed > 0 {
        eprintln!("Conformance FAILED: {failed} check(s) did not pass.");
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}

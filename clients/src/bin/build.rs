//! `vd-build`: exports the vehicle data catalog schema and writes it to the
//! output directory.
//!
//! **Outputs:**
//! - `<out>/vehicle-data.schema.json`: enumerations, domains, records and field tables
//!
//! **Usage:**
//! ```
//! vd-build [--out <path>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use vehicle_data::serializer::json::{to_json, ARTIFACT_NAME};
use vehicle_data::Catalog;

/// Build the vehicle data schema artifact.
#[derive(Parser)]
#[command(name = "vd-build", about = "Build the vehicle data schema artifact")]
struct Args {
    /// Output directory for generated artifacts.
    #[arg(long, default_value = "public")]
    out: PathBuf,
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
    let out = &args.out;

    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    let catalog = Catalog::full();

    println!(
        "Vehicle data catalog v{}: {} enums, {} domains, {} records, {} fields",
        catalog.version,
        catalog.enum_count(),
        catalog.domains.len(),
        catalog.record_count(),
        catalog.field_count()
    );

    let json_path = out.join(ARTIFACT_NAME);
    let json_str = serde_json::to_string_pretty(&to_json(catalog))
        .context("Failed to serialize catalog schema to JSON")?;
    fs::write(&json_path, &json_str)
        .with_context(|| format!("Failed to write {}", json_path.display()))?;
    tracing::info!(path = %json_path.display(), bytes = json_str.len(), "schema written");
    println!("  Written: {}", json_path.display());

    Ok(())
}

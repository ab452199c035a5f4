//! `vd-inspect`: prints catalog entries from the command line.
//!
//! **Usage:**
//! ```
//! vd-inspect list
//! vd-inspect enum <Name>
//! vd-inspect record <Name>
//! vd-inspect zone <AXIS>... --driver <ZoneType>
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use vehicle_data::{Catalog, ClosedEnum, FieldSpec, Zone, ZoneType};

/// Inspect the vehicle data catalog.
#[derive(Parser)]
#[command(name = "vd-inspect", about = "Inspect vehicle data enums, records and zones")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every domain with its records.
    List,
    /// Print the members and codes of an enumeration.
    Enum {
        /// Enumeration name, e.g. `DoorOpenStatus`.
        name: String,
    },
    /// Print the field table of a record.
    Record {
        /// Record name, e.g. `Fuel`.
        name: String,
    },
    /// Build a zone and print it with its canonical form.
    Zone {
        /// Axis tokens, e.g. `Front Left`.
        #[arg(required = true)]
        axes: Vec<String>,
        /// Driver zone name.
        #[arg(long, default_value = "Front")]
        driver: String,
    },
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
    let catalog = Catalog::full();

    match args.command {
        Command::List => list(catalog),
        Command::Enum { name } => {
            let kind = catalog
                .find_enum(&name)
                .with_context(|| format!("No enumeration named {name}"))?;
            println!("{kind} ({} members)", kind.len());
            for member in kind.members() {
                let code = kind.code_of(member).unwrap_or_default();
                println!("  {code:>3}  {member}");
            }
        }
        Command::Record { name } => {
            let schema = catalog
                .find_record(&name)
                .with_context(|| format!("No record named {name}"))?;
            println!("{} [{}]", schema.name, schema.domain.label());
            println!("  {}", schema.summary());
            for field in schema.fields {
                println!("  {}", describe(field));
            }
        }
        Command::Zone { axes, driver } => {
            let driver = ZoneType::from_name(&driver)
                .with_context(|| format!("{driver} is not a ZoneType"))?;
            let zone = Zone::new(axes, driver)?;
            println!("zone:      {zone}");
            println!("canonical: {}", zone.canonical());
        }
    }

    Ok(())
}

fn list(catalog: &Catalog) {
    println!(
        "Vehicle data catalog v{} ({})",
        catalog.version, catalog.source
    );
    for module in &catalog.domains {
        println!();
        println!("{} ({} records)", module.domain.label(), module.records.len());
        for record in &module.records {
            println!("  {:<32} {}", record.name, record.summary());
        }
    }
}

fn describe(field: &FieldSpec) -> String {
    let mut line = format!("{:<28} {}", field.name, field.kind);
    if field.sequence {
        line.push_str("[]");
    }
    if field.unit.is_numeric() {
        line.push_str(&format!(" {}", field.unit.symbol()));
    }
    if let Some(bounds) = field.bounds {
        line.push_str(&format!(" {bounds}"));
    }
    if field.resettable {
        line.push_str(" (0 resets)");
    }
    line
}

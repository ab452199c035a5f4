//! Demonstrates loading the full vehicle data catalog and exporting its schema.
//!
//! Run with: `cargo run --example dump_catalog -p vehicle-data`

fn main() {
    let catalog = vehicle_data::Catalog::full();

    println!("Vehicle Data Catalog v{}", catalog.version);
    println!("  Enumerations: {}", catalog.enum_count());
    println!("  Records:      {}", catalog.record_count());
    println!("  Fields:       {}", catalog.field_count());
    println!();

    for module in &catalog.domains {
        let fields: usize = module.records.iter().map(|r| r.fields.len()).sum();
        println!(
            "  {:20} {:>2} records, {:>3} fields",
            module.domain.as_str(),
            module.records.len(),
            fields,
        );
    }

    println!();

    // Show the first 200 characters of the JSON schema.
    let schema = vehicle_data::serializer::json::to_json(catalog);
    let json_str =
        serde_json::to_string_pretty(&schema).unwrap_or_else(|e| format!("JSON error: {e}"));
    println!("JSON schema ({} bytes):", json_str.len());
    let preview_end = json_str
        .char_indices()
        .nth(200)
        .map_or(json_str.len(), |(i, _)| i);
    println!("{}...", &json_str[..preview_end]);
}

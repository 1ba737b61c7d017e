//! List command - show the entities declared in a document.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::output::print_table;
use cqlforge_schema::{load_file, resolve_document};

/// Arguments for the `list` command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// YAML schema document
    pub file: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct EntityRow {
    name: String,
    kind: &'static str,
    fields: usize,
    partition_key: Vec<String>,
    clustering: Vec<String>,
}

pub fn run(args: ListArgs) -> Result<()> {
    let document = load_file(&args.file)?;
    let schema = resolve_document(&document)?;

    let mut entities = Vec::with_capacity(schema.types.len() + schema.tables.len());
    for record in &schema.types {
        entities.push(EntityRow {
            name: record.name.clone(),
            kind: "type",
            fields: record.fields.len(),
            partition_key: Vec::new(),
            clustering: Vec::new(),
        });
    }
    for table in &schema.tables {
        entities.push(EntityRow {
            name: table.name.clone(),
            kind: "table",
            fields: table.fields.len(),
            partition_key: table.partition_key.clone(),
            clustering: table
                .clustering
                .iter()
                .map(|entry| format!("{} {}", entry.field, entry.order))
                .collect(),
        });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entities)?);
        return Ok(());
    }

    let headers: &[&str] = &["name", "kind", "fields", "partition key", "clustering"];
    let rows: Vec<Vec<String>> = entities
        .iter()
        .map(|entity| {
            vec![
                entity.name.clone(),
                entity.kind.to_string(),
                entity.fields.to_string(),
                entity.partition_key.join(", "),
                entity.clustering.join(", "),
            ]
        })
        .collect();
    print_table(headers, rows);

    Ok(())
}

//! DDL script emission.
//!
//! One `CREATE TYPE` block per user-defined type and one `CREATE TABLE`
//! block per table, in declaration order. Clustering and option clauses
//! are emitted only when present.

use cqlforge_schema::{RecordDescriptor, ResolvedSchema, TableDescriptor};
use tracing::debug;

use crate::error::CqlError;
use crate::options::serialize_option;
use crate::types::cql_type;

/// Render the complete DDL script for one resolved document.
pub fn render_ddl(schema: &ResolvedSchema) -> Result<String, CqlError> {
    let mut out = String::new();

    for record in &schema.types {
        render_type(&mut out, record)?;
        out.push('\n');
    }
    for table in &schema.tables {
        render_table(&mut out, table)?;
        out.push('\n');
    }

    debug!(
        types = schema.types.len(),
        tables = schema.tables.len(),
        "rendered DDL script"
    );
    Ok(out)
}

fn render_type(out: &mut String, record: &RecordDescriptor) -> Result<(), CqlError> {
    out.push_str(&format!("CREATE TYPE IF NOT EXISTS {} (\n", record.name));

    let mut lines = Vec::with_capacity(record.fields.len());
    for field in &record.fields {
        let path = format!("{}.{}", record.name, field.name);
        lines.push(format!("    {} {}", field.name, cql_type(&field.ty, &path)?));
    }
    out.push_str(&lines.join(",\n"));
    out.push_str("\n);\n");
    Ok(())
}

fn render_table(out: &mut String, table: &TableDescriptor) -> Result<(), CqlError> {
    out.push_str(&format!("CREATE TABLE IF NOT EXISTS {} (\n", table.name));

    let mut lines = Vec::with_capacity(table.fields.len() + 1);
    for field in &table.fields {
        let path = format!("{}.{}", table.name, field.name);
        lines.push(format!("    {} {}", field.name, cql_type(&field.ty, &path)?));
    }
    lines.push(format!("    PRIMARY KEY ({})", primary_key_clause(table)));
    out.push_str(&lines.join(",\n"));
    out.push_str("\n)");

    let mut clauses = Vec::new();
    if table.has_clustering() {
        let entries: Vec<String> = table
            .clustering
            .iter()
            .map(|entry| format!("{} {}", entry.field, entry.order))
            .collect();
        clauses.push(format!("CLUSTERING ORDER BY ({})", entries.join(", ")));
    }
    for (name, value) in &table.options {
        clauses.push(format!("{} = {}", name, serialize_option(name, value)?));
    }

    if clauses.is_empty() {
        out.push_str(";\n");
    } else {
        out.push_str(" WITH ");
        out.push_str(&clauses.join("\n  AND "));
        out.push_str(";\n");
    }
    Ok(())
}

/// The `PRIMARY KEY` column list: parenthesized partition key followed by
/// the clustering columns, if any.
fn primary_key_clause(table: &TableDescriptor) -> String {
    let partition = format!("({})", table.partition_key.join(", "));
    if table.has_clustering() {
        let clustering: Vec<&str> = table
            .clustering
            .iter()
            .map(|entry| entry.field.as_str())
            .collect();
        format!("{}, {}", partition, clustering.join(", "))
    } else {
        partition
    }
}

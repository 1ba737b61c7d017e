//! Check command - validate documents without writing output.

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use cqlforge_cql::render_ddl;
use cqlforge_java::{render_record, render_table};
use cqlforge_schema::{load_file, resolve_document};

/// Arguments for the `check` command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// YAML schema documents to validate
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let mut failures = 0usize;
    for file in &args.files {
        match check_document(file) {
            Ok((types, tables)) => {
                println!("{}: ok ({types} types, {tables} tables)", file.display());
            }
            Err(err) => {
                failures += 1;
                eprintln!("{}: {:#}", file.display(), err);
            }
        }
    }

    if failures > 0 {
        bail!("{failures} document(s) failed validation");
    }
    Ok(())
}

/// Runs the whole pipeline short of writing: projection is what surfaces
/// unrecognized primitives with their field paths, so both models are
/// built and discarded.
fn check_document(file: &Path) -> Result<(usize, usize)> {
    let document = load_file(file).context("load failed")?;
    let schema = resolve_document(&document).context("resolution failed")?;

    render_ddl(&schema).context("CQL projection failed")?;
    for record in &schema.types {
        render_record(record, &schema.package).context("Java projection failed")?;
    }
    for table in &schema.tables {
        render_table(table, &schema.package).context("Java projection failed")?;
    }

    Ok((schema.types.len(), schema.tables.len()))
}

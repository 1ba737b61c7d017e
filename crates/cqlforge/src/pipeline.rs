//! Generation pipeline: load -> resolve -> render -> write.
//!
//! Rendering and writing are separated on purpose: every artifact for a
//! document is rendered in memory before the first byte touches disk, so
//! a failing document emits nothing at all. Documents are independent;
//! a failure in one leaves earlier documents' output intact.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use cqlforge_cql::render_ddl;
use cqlforge_java::{file_name, render_record, render_table};
use cqlforge_schema::{load_file, resolve_document, ResolvedSchema};

/// One rendered output file, held in memory until the whole document has
/// rendered cleanly.
#[derive(Debug)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub contents: String,
}

/// Load, resolve, and render one document without writing anything.
///
/// Returns the full set of output files: the DDL script at `cql_path`
/// and one Java source per declared entity under the package directory.
pub fn render_document(
    file: &Path,
    cql_path: &Path,
    java_root: &Path,
) -> Result<Vec<RenderedFile>> {
    let document = load_file(file)?;
    let schema = resolve_document(&document)?;
    render_outputs(&schema, cql_path, java_root)
}

/// Generate all artifacts for one document. Returns the number of files
/// written.
pub fn generate_document(file: &Path, cql_path: &Path, java_root: &Path) -> Result<usize> {
    let outputs = render_document(file, cql_path, java_root)?;

    for output in &outputs {
        write_file(&output.path, &output.contents)?;
    }

    info!(
        document = %file.display(),
        files = outputs.len(),
        "generated"
    );
    Ok(outputs.len())
}

fn render_outputs(
    schema: &ResolvedSchema,
    cql_path: &Path,
    java_root: &Path,
) -> Result<Vec<RenderedFile>> {
    let mut outputs = Vec::with_capacity(1 + schema.types.len() + schema.tables.len());

    outputs.push(RenderedFile {
        path: cql_path.to_path_buf(),
        contents: render_ddl(schema)?,
    });

    let package_dir = package_dir(java_root, &schema.package);
    for record in &schema.types {
        outputs.push(RenderedFile {
            path: package_dir.join(file_name(&record.name)),
            contents: render_record(record, &schema.package)?,
        });
    }
    for table in &schema.tables {
        outputs.push(RenderedFile {
            path: package_dir.join(file_name(&table.name)),
            contents: render_table(table, &schema.package)?,
        });
    }

    Ok(outputs)
}

/// Package dots become path separators under the Java root.
pub fn package_dir(java_root: &Path, package: &str) -> PathBuf {
    let mut dir = java_root.to_path_buf();
    for part in package.split('.') {
        dir.push(part);
    }
    dir
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

//! Generate command - render CQL DDL and Java sources.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use cqlforge::generate_document;

/// Arguments for the `generate` command
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// YAML schema documents to process, in order
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output path for the generated CQL script
    #[arg(short = 'c', long, default_value = "./create-script.cql")]
    pub cql: PathBuf,

    /// Root directory for generated Java sources; package directories
    /// are created underneath
    #[arg(short = 'j', long, default_value = ".")]
    pub java: PathBuf,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    for file in &args.files {
        generate_document(file, &args.cql, &args.java)
            .with_context(|| format!("Failed to generate from {}", file.display()))?;
    }
    Ok(())
}

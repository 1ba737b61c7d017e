//! cqlforge - Unified CLI
//!
//! Reads ordered YAML schema documents describing Cassandra types and
//! tables and emits a CQL create script plus one immutable Java class
//! per declared entity.

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser, Debug)]
#[command(
    name = "cqlforge",
    about = "Generate CQL DDL and Java row mappings from YAML schema documents"
)]
struct Cli {
    /// Enable verbose logging (debug to the console)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the CQL script and Java sources for each document
    Generate(cli::generate::GenerateArgs),

    /// Validate documents and project both models without writing output
    Check(cli::check::CheckArgs),

    /// List the entities declared in a document
    List(cli::list::ListArgs),
}

fn command_wants_json(command: &Commands) -> bool {
    match command {
        Commands::List(args) => args.json,
        _ => false,
    }
}

fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate(args) => cli::generate::run(args),
        Commands::Check(args) => cli::check::run(args),
        Commands::List(args) => cli::list::run(args),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "cqlforge=debug,cqlforge_schema=debug,cqlforge_cql=debug,cqlforge_java=debug"
    } else {
        "cqlforge=info,cqlforge_schema=info,cqlforge_cql=info,cqlforge_java=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // Keep stdout clean for machine output.
    let writer = if command_wants_json(&cli.command) {
        BoxMakeWriter::new(std::io::stderr)
    } else {
        BoxMakeWriter::new(std::io::stdout)
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .init();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:?}");
            ExitCode::from(1)
        }
    }
}

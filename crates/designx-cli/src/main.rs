//! DesignX CLI
//!
//! Command-line interface for DesignX

use clap::{Parser, Subcommand};
use designx_core::logging_facility::{init, Profile};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "designx")]
#[command(about = "DesignX - Form designer handle resolution and orchestration", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Read-only queries against a tree dump
    Inspect(commands::inspect::InspectArgs),
    /// Identifier snapshots (capture, diff)
    Snapshot(commands::snapshot::SnapshotArgs),
    /// Apply a batch of designer commands to a tree dump
    Apply(commands::apply::ApplyArgs),
    /// CRUD form planning and parallel creation
    Crud(commands::crud::CrudArgs),
}

fn main() {
    let cli = Cli::parse();
    init(Profile::for_cli(cli.json_logs));

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Inspect(args) => commands::inspect::execute(args, config),
        Commands::Snapshot(args) => commands::snapshot::execute(args, config),
        Commands::Apply(args) => commands::apply::execute(args, config),
        Commands::Crud(args) => commands::crud::execute(args, config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

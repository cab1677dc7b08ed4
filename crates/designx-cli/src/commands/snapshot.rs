//! Snapshot commands: capture identifiers from a tree, diff two captures

use super::{emit, load_tree, CliResult};
use clap::{Args, Subcommand, ValueEnum};
use designx_core::diff::{compute_diff, render_human_summary};
use designx_core::{capture_snapshot, DesignerSurface, ResolverConfig, Snapshot};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct SnapshotArgs {
    #[command(subcommand)]
    pub command: SnapshotCommand,
}

#[derive(Debug, Subcommand)]
pub enum SnapshotCommand {
    /// Capture the identifiers of every component in a tree dump
    Capture(CaptureArgs),
    /// Show what appeared between two captures
    Diff(DiffArgs),
}

#[derive(Debug, Args)]
pub struct CaptureArgs {
    #[arg(long)]
    pub tree: PathBuf,

    /// Write the snapshot here instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DiffFormat {
    Json,
    Markdown,
}

#[derive(Debug, Args)]
pub struct DiffArgs {
    #[arg(long)]
    pub before: PathBuf,

    #[arg(long)]
    pub after: PathBuf,

    #[arg(long, value_enum, default_value = "json")]
    pub format: DiffFormat,
}

pub fn execute(args: SnapshotArgs, config: Option<&Path>) -> CliResult {
    match args.command {
        SnapshotCommand::Capture(a) => execute_capture(a, config),
        SnapshotCommand::Diff(a) => execute_diff(a),
    }
}

fn execute_capture(args: CaptureArgs, config: Option<&Path>) -> CliResult {
    let resolver = ResolverConfig::load(config)?;
    let tree = load_tree(&args.tree)?;
    let snapshot = capture_snapshot(&tree, tree.component_nodes(), resolver.identifier_depth);
    emit(args.out.as_deref(), &serde_json::to_string_pretty(&snapshot)?)
}

fn read_snapshot(path: &Path) -> Result<Snapshot, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read snapshot {}: {}", path.display(), e))?;
    Ok(serde_json::from_str(&json)?)
}

fn execute_diff(args: DiffArgs) -> CliResult {
    let before = read_snapshot(&args.before)?;
    let after = read_snapshot(&args.after)?;
    let diff = compute_diff(&before, &after);
    match args.format {
        DiffFormat::Json => {
            let report = serde_json::json!({ "created": diff.created(), "diff": diff });
            emit(None, &serde_json::to_string_pretty(&report)?)
        }
        DiffFormat::Markdown => emit(None, &render_human_summary(&diff)),
    }
}

//! Apply command: run a designer command batch against a tree dump

use super::{emit, load_tree, CliResult};
use clap::Args;
use designx_core::{DesignerSession, ResolverConfig};
use designx_engine::{apply_designer_commands, DesignerCommand};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Tree dump to start from
    #[arg(long)]
    pub tree: PathBuf,

    /// JSON array of designer commands
    #[arg(long)]
    pub commands: PathBuf,

    /// Write the resulting tree dump here
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn execute(args: ApplyArgs, config: Option<&Path>) -> CliResult {
    let resolver = ResolverConfig::load(config)?;
    let mut tree = load_tree(&args.tree)?;
    let script = std::fs::read_to_string(&args.commands)
        .map_err(|e| format!("cannot read commands {}: {}", args.commands.display(), e))?;
    let cmds: Vec<DesignerCommand> = serde_json::from_str(&script)?;
    let total = cmds.len();

    let mut session = DesignerSession::new(resolver);
    let outcomes = apply_designer_commands(cmds, &mut session, &mut tree);
    emit(None, &serde_json::to_string_pretty(&outcomes)?)?;

    if let Some(out) = args.out.as_deref() {
        emit(Some(out), &tree.to_json()?)?;
    }

    let failed = outcomes.iter().filter(|o| !o.success).count();
    if failed > 0 {
        return Err(format!("{} of {} commands failed", failed, total).into());
    }
    Ok(())
}

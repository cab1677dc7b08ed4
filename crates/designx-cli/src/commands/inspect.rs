//! Inspect command: components, containers and the designer capability

use super::{emit, load_tree, CliResult};
use clap::{Args, Subcommand};
use designx_core::ops::{list_components, list_containers, locate_designer};
use designx_core::{DesignerSession, ResolverConfig};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct InspectArgs {
    #[command(subcommand)]
    pub command: InspectCommand,
}

#[derive(Debug, Subcommand)]
pub enum InspectCommand {
    /// List visible components with their id, type and container
    Components(TreeArgs),
    /// List visible drop containers
    Containers(TreeArgs),
    /// Locate the designer capability from the canvas
    Capability(TreeArgs),
}

#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Tree dump (JSON)
    #[arg(long)]
    pub tree: PathBuf,
}

pub fn execute(args: InspectArgs, config: Option<&Path>) -> CliResult {
    let resolver = ResolverConfig::load(config)?;
    match args.command {
        InspectCommand::Components(a) => {
            let tree = load_tree(&a.tree)?;
            emit(
                None,
                &serde_json::to_string_pretty(&list_components(&tree, &resolver))?,
            )
        }
        InspectCommand::Containers(a) => {
            let tree = load_tree(&a.tree)?;
            emit(
                None,
                &serde_json::to_string_pretty(&list_containers(&tree, &resolver))?,
            )
        }
        InspectCommand::Capability(a) => {
            let tree = load_tree(&a.tree)?;
            let mut session = DesignerSession::new(resolver);
            let outcome = locate_designer(&mut session, &tree);
            emit(None, &serde_json::to_string_pretty(&outcome)?)?;
            if !outcome.success {
                return Err(outcome.error.unwrap_or_default().into());
            }
            Ok(())
        }
    }
}

//! Subcommand implementations and the file helpers they share.

pub mod apply;
pub mod crud;
pub mod inspect;
pub mod snapshot;

use designx_core::tree::MemoryTree;
use std::path::Path;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Read a tree dump from disk
pub fn load_tree(path: &Path) -> Result<MemoryTree, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read tree dump {}: {}", path.display(), e))?;
    Ok(MemoryTree::from_json(&json)?)
}

/// Write `json` to `out`, or print it when no file is given
pub fn emit(out: Option<&Path>, json: &str) -> CliResult {
    match out {
        Some(path) => {
            std::fs::write(path, json)
                .map_err(|e| format!("cannot write {}: {}", path.display(), e))?;
        }
        None => println!("{}", json),
    }
    Ok(())
}

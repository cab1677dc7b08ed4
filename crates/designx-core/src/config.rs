//! Configuration loading.
//!
//! Settings come from an optional TOML file overlaid with `DESIGNX__*`
//! environment variables (`DESIGNX__RESOLVER__IDENTIFIER_DEPTH=12`).
//! Each crate owns one section of the file and deserializes it with
//! [`load_section`]; missing keys fall back to the section's defaults.

use crate::errors::{DesignXError, Result};
use config::{Config, Environment, File, FileFormat};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENV_PREFIX: &str = "DESIGNX";

/// Depth bounds and canvas selection used by handle resolution
///
/// Bounds are inclusive: a walk with bound `n` inspects the start node and
/// `n` ancestors, so the identifier default of 9 covers 10 nodes and the
/// container default of 14 covers 15.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Bound for the walk from the canvas up to the designer capability
    pub capability_depth: usize,
    /// Bound for component identifier walks (snapshots, listings)
    pub identifier_depth: usize,
    /// Bound for container identifier walks
    pub container_depth: usize,
    /// Container index tried when no container qualifies as the canvas
    pub canvas_fallback_index: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            capability_depth: 15,
            identifier_depth: 9,
            container_depth: 14,
            canvas_fallback_index: 4,
        }
    }
}

impl ResolverConfig {
    /// Load the `[resolver]` section
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the file is unreadable or a value has the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        load_section(path, "resolver")
    }
}

/// Deserialize one section of the layered configuration
///
/// An absent file path means "environment only". An absent section yields
/// `T::default()`.
///
/// # Errors
///
/// Returns `InvalidConfig` if the sources cannot be read or the section
/// does not deserialize into `T`.
pub fn load_section<T>(path: Option<&Path>, section: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let mut builder = Config::builder();
    if let Some(path) = path {
        let path_str = path.to_str().ok_or_else(|| DesignXError::InvalidConfig {
            reason: format!("config path is not valid UTF-8: {}", path.display()),
        })?;
        builder = builder.add_source(File::new(path_str, FileFormat::Toml));
    }
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build().map_err(|e| DesignXError::InvalidConfig {
        reason: e.to_string(),
    })?;

    match config.get::<T>(section) {
        Ok(value) => Ok(value),
        Err(config::ConfigError::NotFound(_)) => Ok(T::default()),
        Err(e) => Err(DesignXError::InvalidConfig {
            reason: format!("[{}]: {}", section, e),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ResolverConfig::default();
        assert_eq!(config.capability_depth, 15);
        assert_eq!(config.identifier_depth, 9);
        assert_eq!(config.container_depth, 14);
        assert_eq!(config.canvas_fallback_index, 4);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[resolver]\nidentifier_depth = 3").unwrap();

        let config = ResolverConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.identifier_depth, 3);
        assert_eq!(config.capability_depth, 15);
    }

    #[test]
    fn test_missing_section_is_default() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[engine]\nmodule = \"Shesha.Demo\"").unwrap();

        let config = ResolverConfig::load(Some(file.path())).unwrap();

        assert_eq!(config, ResolverConfig::default());
    }

    #[test]
    fn test_wrong_type_is_invalid_config() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[resolver]\nidentifier_depth = \"deep\"").unwrap();

        let err = ResolverConfig::load(Some(file.path())).unwrap_err();

        assert!(matches!(err, DesignXError::InvalidConfig { .. }));
    }
}

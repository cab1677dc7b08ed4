//! Engine configuration: the `[engine]` section.

use designx_core::config::load_section;
use designx_core::Result;
use designx_core_types::Sensitive;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_MODEL_NAMESPACE: &str = "Shesha.Domain";

/// Login for the external designer application
///
/// Read by browser-driving `FormCreator`s outside this crate.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub username: String,
    pub password: Sensitive<String>,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: Sensitive::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Where the external designer application is served; for
    /// browser-driving `FormCreator`s, unused by the offline drafter
    pub base_url: String,
    /// Module new forms are created in
    pub module: String,
    /// Namespace prefixed to an entity name to form its model type
    pub model_namespace: String,
    /// Upper bound for creating one form
    pub timeout_ms: u64,
    pub credentials: Credentials,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            module: String::new(),
            model_namespace: DEFAULT_MODEL_NAMESPACE.to_string(),
            timeout_ms: 60_000,
            credentials: Credentials::default(),
        }
    }
}

impl EngineConfig {
    /// Load the `[engine]` section
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the file is unreadable or a value has the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        load_section(path, "engine")
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_password_is_redacted_in_debug() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[engine]\nmodule = \"Shesha.Booking\"\n[engine.credentials]\nusername = \"ops\"\npassword = \"hunter2\""
        )
        .unwrap();

        let config = EngineConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.module, "Shesha.Booking");
        assert_eq!(config.credentials.username, "ops");
        assert_eq!(config.credentials.password.expose(), "hunter2");
        assert!(!format!("{:?}", config).contains("hunter2"));
    }
}

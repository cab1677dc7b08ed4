//! Correlation types for designer sessions
//!
//! Every orchestration session gets its own `SessionId`, which ends up as a
//! structured log field so the output of parallel sessions can be told
//! apart.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of one orchestration session (one isolated external tree)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a fresh SessionId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Use a caller-chosen label, e.g. the template a worker is building
    pub fn labeled(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Context carried by a session through its operations
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub session_id: SessionId,
}

impl SessionContext {
    /// Create a context for a fresh session
    pub fn new() -> Self {
        Self {
            session_id: SessionId::new(),
        }
    }

    /// Create a context bound to an existing session
    pub fn for_session(session_id: SessionId) -> Self {
        Self { session_id }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_generation() {
        let id1 = SessionId::new();
        let id2 = SessionId::new();

        assert_ne!(id1, id2);
        assert!(!id1.as_str().is_empty());
    }

    #[test]
    fn test_labeled_session_id_keeps_label() {
        let id = SessionId::labeled("table");
        assert_eq!(id.as_str(), "table");
        assert_eq!(format!("{}", id), "table");
    }

    #[test]
    fn test_context_for_session_keeps_id() {
        let id = SessionId::labeled("details");
        let ctx = SessionContext::for_session(id.clone());
        assert_eq!(ctx.session_id, id);
    }

    #[test]
    fn test_serialization() {
        let id = SessionId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: SessionId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}

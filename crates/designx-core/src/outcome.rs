//! Result values returned at operation boundaries.
//!
//! Operations never propagate errors to their caller. Failures become an
//! `OperationOutcome` with `success == false`, so a batch of operations
//! can collect partial results without aborting its siblings.

use crate::errors::ExError;
use crate::model::Identifier;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Set when the operation succeeded only partially
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<Identifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_methods: Option<Vec<String>>,
}

impl OperationOutcome {
    pub fn succeeded(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn failed(err: &ExError) -> Self {
        Self {
            success: false,
            error: Some(err.message().to_string()),
            error_code: Some(err.code().to_string()),
            ..Self::default()
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }

    pub fn with_component_id(mut self, id: Identifier) -> Self {
        self.component_id = Some(id);
        self
    }

    pub fn with_methods(mut self, methods: Vec<String>) -> Self {
        self.available_methods = Some(methods);
        self
    }

    /// Succeeded, but with something the caller should look at
    pub fn has_warning(&self) -> bool {
        self.success && self.warning.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExErrorKind;

    #[test]
    fn test_failed_carries_code_and_message() {
        let err = ExError::new(ExErrorKind::PreconditionMissing).with_message("no designer");
        let outcome = OperationOutcome::failed(&err);

        assert!(!outcome.success);
        assert_eq!(outcome.error.as_deref(), Some("no designer"));
        assert_eq!(outcome.error_code.as_deref(), Some("ERR_PRECONDITION_MISSING"));
    }

    #[test]
    fn test_json_shape_omits_absent_fields() {
        let outcome = OperationOutcome::succeeded("Added button to root at index 0")
            .with_warning("could not determine id");
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["success"], serde_json::json!(true));
        assert!(json.get("componentId").is_none());
        assert!(json.get("warning").is_some());
        assert!(outcome.has_warning());
    }
}

//! Designer operations.
//!
//! Each operation is a boundary: it logs start/end, and any failure comes
//! back as a failed [`OperationOutcome`] instead of an error.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::diff::{diff_all, diff_new};
use crate::errors::{DesignXError, ExError, Result};
use crate::model::Identifier;
use crate::outcome::OperationOutcome;
use crate::resolver::{find_capability, Capability};
use crate::session::DesignerSession;
use crate::snapshot::capture_snapshot;
use crate::surface::{DesignerCall, DesignerSurface, DESIGNER_CAPABILITY, ROOT_CONTAINER};
use crate::{log_op_end, log_op_error, log_op_start};
use designx_core_types::SessionId;

/// Warning reported when a styled add cannot tell which component it created
pub const UNRESOLVED_ID_WARNING: &str =
    "Component added but could not find ID to apply styles. Apply styles manually.";

/// Where and what to add
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddComponentRequest {
    pub component_type: String,
    /// Defaults to the root container
    #[serde(default)]
    pub container_id: Option<String>,
    /// Defaults to the top (0)
    #[serde(default)]
    pub index: Option<usize>,
}

impl AddComponentRequest {
    pub fn new(component_type: impl Into<String>) -> Self {
        Self {
            component_type: component_type.into(),
            container_id: None,
            index: None,
        }
    }

    pub fn in_container(mut self, container_id: impl Into<String>) -> Self {
        self.container_id = Some(container_id.into());
        self
    }

    pub fn at(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    fn container(&self) -> &str {
        self.container_id
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(ROOT_CONTAINER)
    }

    fn position(&self) -> usize {
        self.index.unwrap_or(0)
    }

    fn to_call(&self) -> Result<DesignerCall> {
        if self.component_type.trim().is_empty() {
            return Err(DesignXError::MissingArgument {
                field: "componentType".to_string(),
            });
        }
        Ok(DesignerCall::AddComponent {
            container_id: self.container().to_string(),
            component_type: self.component_type.clone(),
            index: self.position(),
        })
    }

    fn describe(&self) -> String {
        format!(
            "Added {} to {} at index {}",
            self.component_type,
            self.container(),
            self.position()
        )
    }
}

/// An add followed by styling of the created component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyledComponentRequest {
    #[serde(flatten)]
    pub add: AddComponentRequest,
    #[serde(default)]
    pub label: Option<String>,
    /// Hex color such as `#D9F7BE`
    #[serde(default)]
    pub background_color: Option<String>,
}

impl StyledComponentRequest {
    fn label(&self) -> Option<&str> {
        self.label.as_deref().filter(|l| !l.is_empty())
    }

    fn background_color(&self) -> Option<&str> {
        self.background_color.as_deref().filter(|c| !c.is_empty())
    }

    /// Settings to apply; empty when nothing was asked for
    fn settings(&self) -> Map<String, Value> {
        let mut settings = Map::new();
        if let Some(label) = self.label() {
            settings.insert("label".to_string(), json!(label));
        }
        if let Some(color) = self.background_color() {
            settings.insert(
                "background".to_string(),
                json!({"type": "color", "color": color}),
            );
        }
        settings
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}

/// Run `f` as an operation boundary
fn boundary<F>(op: &'static str, session_id: &SessionId, f: F) -> OperationOutcome
where
    F: FnOnce() -> Result<OperationOutcome>,
{
    let started = Instant::now();
    log_op_start!(op, session_id = session_id.as_str());
    match f() {
        Ok(outcome) => {
            log_op_end!(
                op,
                duration_ms = elapsed_ms(started),
                session_id = session_id.as_str(),
                success = outcome.success,
            );
            outcome
        }
        Err(err) => {
            let ex_err = ExError::from(err)
                .with_op(op)
                .with_session_id(session_id.clone());
            log_op_error!(
                op,
                ex_err.clone(),
                duration_ms = elapsed_ms(started),
                session_id = session_id.as_str(),
            );
            OperationOutcome::failed(&ex_err)
        }
    }
}

/// Locate the designer by walking up from the canvas and bind it to the session
///
/// The canvas is the first visible container with drag-and-drop attached;
/// failing that, the container at the configured fallback index.
pub fn locate_designer<S>(session: &mut DesignerSession<S::Handle>, surface: &S) -> OperationOutcome
where
    S: DesignerSurface,
{
    let session_id = session.session_id().clone();
    boundary("locate_designer", &session_id, || {
        let config = session.config().clone();
        let containers = surface.container_nodes();
        let canvas = containers
            .iter()
            .copied()
            .find(|c| surface.is_canvas(*c) && surface.is_visible(*c))
            .or_else(|| containers.get(config.canvas_fallback_index).copied())
            .ok_or(DesignXError::CanvasNotFound)?;

        let capability = Capability::method(DESIGNER_CAPABILITY);
        let found = find_capability(
            surface,
            canvas,
            |bag| capability.provides(bag),
            config.capability_depth,
        )
        .ok_or(DesignXError::CapabilityNotFound)?;

        let handle = surface
            .bind_designer(&found)
            .filter(|h| h.supports(DESIGNER_CAPABILITY))
            .ok_or_else(|| DesignXError::CapabilityNotCallable {
                method: DESIGNER_CAPABILITY.to_string(),
            })?;
        tracing::debug!(
            session_id = session_id.as_str(),
            depth = found.depth,
            source = ?found.source,
            "designer located"
        );

        let methods = handle.methods().to_vec();
        session.register(handle);
        Ok(
            OperationOutcome::succeeded(format!("formDesigner context bound to session {}", session_id))
                .with_methods(methods),
        )
    })
}

/// Add a component through the bound designer
pub fn add_component<S>(
    session: &DesignerSession<S::Handle>,
    surface: &mut S,
    request: &AddComponentRequest,
) -> OperationOutcome
where
    S: DesignerSurface,
{
    boundary("add_component", session.session_id(), || {
        let designer = session.require_designer("addComponent")?;
        let call = request.to_call()?;
        surface.invoke(designer, call)?;
        Ok(OperationOutcome::succeeded(request.describe()))
    })
}

/// Add a component, find out which one was created, and style it
///
/// The created component is identified by diffing component-id snapshots
/// taken before and after the add. If no new id shows up the add still
/// counts as a success, with a warning that styles were not applied.
pub fn add_styled_component<S>(
    session: &DesignerSession<S::Handle>,
    surface: &mut S,
    request: &StyledComponentRequest,
) -> OperationOutcome
where
    S: DesignerSurface,
{
    boundary("add_styled_component", session.session_id(), || {
        let designer = session.require_designer("addComponent")?;
        let call = request.add.to_call()?;
        let depth = session.config().identifier_depth;

        let before = capture_snapshot(&*surface, surface.component_nodes(), depth);
        surface.invoke(designer, call)?;
        let after = capture_snapshot(&*surface, surface.component_nodes(), depth);

        let new_ids = diff_all(&before, &after);
        if new_ids.len() > 1 {
            tracing::warn!(
                session_id = session.session_id().as_str(),
                new_ids = new_ids.len(),
                "more than one component appeared; styling the last one"
            );
        }
        let Some(component_id) = diff_new(&before, &after) else {
            return Ok(OperationOutcome::succeeded(request.add.describe())
                .with_warning(UNRESOLVED_ID_WARNING));
        };

        let settings = request.settings();
        if !settings.is_empty() {
            let designer = session.require_designer("updateComponent")?;
            surface.invoke(
                designer,
                DesignerCall::UpdateComponent {
                    component_id: component_id.clone(),
                    settings: Value::Object(settings),
                },
            )?;
        }

        Ok(OperationOutcome::succeeded(format!(
            "Added {} with label \"{}\" and background \"{}\"",
            request.add.component_type,
            request.label().unwrap_or("default"),
            request.background_color().unwrap_or("none"),
        ))
        .with_component_id(component_id))
    })
}

fn required_id(raw: &str) -> Result<Identifier> {
    Identifier::new(raw.trim()).ok_or_else(|| DesignXError::MissingArgument {
        field: "componentId".to_string(),
    })
}

/// Delete a component by id
pub fn delete_component<S>(
    session: &DesignerSession<S::Handle>,
    surface: &mut S,
    component_id: &str,
) -> OperationOutcome
where
    S: DesignerSurface,
{
    boundary("delete_component", session.session_id(), || {
        let designer = session.require_designer("deleteComponent")?;
        let component_id = required_id(component_id)?;
        surface.invoke(
            designer,
            DesignerCall::DeleteComponent {
                component_id: component_id.clone(),
            },
        )?;
        Ok(OperationOutcome::succeeded(format!("Deleted component {}", component_id))
            .with_component_id(component_id))
    })
}

/// Merge settings into a component
pub fn update_component<S>(
    session: &DesignerSession<S::Handle>,
    surface: &mut S,
    component_id: &str,
    settings: Value,
) -> OperationOutcome
where
    S: DesignerSurface,
{
    boundary("update_component", session.session_id(), || {
        let designer = session.require_designer("updateComponent")?;
        let component_id = required_id(component_id)?;
        surface.invoke(
            designer,
            DesignerCall::UpdateComponent {
                component_id: component_id.clone(),
                settings,
            },
        )?;
        Ok(OperationOutcome::succeeded(format!("Updated component {}", component_id))
            .with_component_id(component_id))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResolverConfig;
    use crate::model::NodeTree;
    use crate::tree::memory::fixtures::designer_page;
    use crate::tree::MemoryTree;

    fn located() -> (DesignerSession<crate::tree::NodeId>, MemoryTree) {
        let tree = designer_page();
        let mut session = DesignerSession::new(ResolverConfig::default());
        let outcome = locate_designer(&mut session, &tree);
        assert!(outcome.success, "{:?}", outcome);
        (session, tree)
    }

    #[test]
    fn test_locate_reports_methods() {
        let (session, _) = located();
        let methods = session.designer().unwrap().methods();
        assert_eq!(
            methods,
            &["addComponent", "deleteComponent", "updateComponent"]
        );
    }

    #[test]
    fn test_add_defaults_to_root_top() {
        let (session, mut tree) = located();
        let outcome = add_component(&session, &mut tree, &AddComponentRequest::new("button"));

        assert!(outcome.success);
        assert_eq!(
            outcome.message.as_deref(),
            Some("Added button to root at index 0")
        );
        let first = tree.component_nodes()[0];
        assert_eq!(tree.props(first)["type"], json!("button"));
    }

    #[test]
    fn test_add_requires_type() {
        let (session, mut tree) = located();
        let outcome = add_component(&session, &mut tree, &AddComponentRequest::new(""));

        assert!(!outcome.success);
        assert_eq!(outcome.error.as_deref(), Some("componentType is required"));
        assert_eq!(outcome.error_code.as_deref(), Some("ERR_INVALID_INPUT"));
    }

    #[test]
    fn test_styled_request_settings_skip_empty_values() {
        let request = StyledComponentRequest {
            add: AddComponentRequest::new("textField"),
            label: Some(String::new()),
            background_color: Some("#BAE7FF".to_string()),
        };
        let settings = request.settings();
        assert!(!settings.contains_key("label"));
        assert_eq!(
            settings["background"],
            json!({"type": "color", "color": "#BAE7FF"})
        );
    }

    #[test]
    fn test_delete_requires_id() {
        let (session, mut tree) = located();
        let outcome = delete_component(&session, &mut tree, "  ");

        assert!(!outcome.success);
        assert_eq!(outcome.error.as_deref(), Some("componentId is required"));
    }
}

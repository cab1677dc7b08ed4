//! Designer command dispatch.

use designx_core::ops::{self, AddComponentRequest, StyledComponentRequest};
use designx_core::{DesignerSession, DesignerSurface, OperationOutcome};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A designer operation, as scripted by callers
///
/// Serialized with a `command` tag so batches can be read from JSON:
///
/// ```json
/// [{"command": "locate"},
///  {"command": "add_styled_component", "componentType": "textField",
///   "label": "Name", "backgroundColor": "#D9F7BE"}]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum DesignerCommand {
    /// Locate the designer and bind it to the session
    Locate,
    AddComponent(AddComponentRequest),
    AddStyledComponent(StyledComponentRequest),
    #[serde(rename_all = "camelCase")]
    DeleteComponent { component_id: String },
    #[serde(rename_all = "camelCase")]
    UpdateComponent { component_id: String, settings: Value },
}

impl DesignerCommand {
    pub fn name(&self) -> &'static str {
        match self {
            DesignerCommand::Locate => "locate",
            DesignerCommand::AddComponent(_) => "add_component",
            DesignerCommand::AddStyledComponent(_) => "add_styled_component",
            DesignerCommand::DeleteComponent { .. } => "delete_component",
            DesignerCommand::UpdateComponent { .. } => "update_component",
        }
    }
}

/// Apply a designer command to a session and its surface
pub fn apply_designer_command<S>(
    cmd: DesignerCommand,
    session: &mut DesignerSession<S::Handle>,
    surface: &mut S,
) -> OperationOutcome
where
    S: DesignerSurface,
{
    match cmd {
        DesignerCommand::Locate => ops::locate_designer(session, &*surface),
        DesignerCommand::AddComponent(request) => ops::add_component(session, surface, &request),
        DesignerCommand::AddStyledComponent(request) => {
            ops::add_styled_component(session, surface, &request)
        }
        DesignerCommand::DeleteComponent { component_id } => {
            ops::delete_component(session, surface, &component_id)
        }
        DesignerCommand::UpdateComponent {
            component_id,
            settings,
        } => ops::update_component(session, surface, &component_id, settings),
    }
}

/// Apply commands in order
///
/// Every command runs; a failure is recorded in its outcome and does not
/// stop the rest of the batch.
pub fn apply_designer_commands<S, I>(
    cmds: I,
    session: &mut DesignerSession<S::Handle>,
    surface: &mut S,
) -> Vec<OperationOutcome>
where
    S: DesignerSurface,
    I: IntoIterator<Item = DesignerCommand>,
{
    cmds.into_iter()
        .map(|cmd| apply_designer_command(cmd, session, surface))
        .collect()
}

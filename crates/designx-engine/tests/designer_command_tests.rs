#![allow(clippy::unwrap_used, clippy::expect_used)]

use designx_core::ops::{list_components, AddComponentRequest};
use designx_core::tree::MemoryTree;
use designx_core::{DesignerSession, ResolverConfig};
use designx_engine::{apply_designer_command, apply_designer_commands, DesignerCommand};
use serde_json::json;

#[test]
fn test_batch_continues_past_failures() {
    let mut tree = MemoryTree::blank_form();
    let mut session = DesignerSession::new(ResolverConfig::default());
    let cmds = vec![
        DesignerCommand::AddComponent(AddComponentRequest::new("button")),
        DesignerCommand::Locate,
        DesignerCommand::AddComponent(AddComponentRequest::new("button")),
        DesignerCommand::AddComponent(AddComponentRequest::new("textField").in_container("nowhere")),
        DesignerCommand::AddComponent(AddComponentRequest::new("textField").at(1)),
    ];

    let outcomes = apply_designer_commands(cmds, &mut session, &mut tree);

    let successes: Vec<_> = outcomes.iter().map(|o| o.success).collect();
    assert_eq!(successes, vec![false, true, true, false, true]);
    assert_eq!(
        outcomes[0].error_code.as_deref(),
        Some("ERR_PRECONDITION_MISSING")
    );
    assert_eq!(outcomes[3].error_code.as_deref(), Some("ERR_NOT_FOUND"));

    let types: Vec<_> = list_components(&tree, session.config())
        .into_iter()
        .filter_map(|c| c.component_type)
        .collect();
    assert_eq!(types, vec!["button", "textField"]);
}

#[test]
fn test_styled_add_then_update_via_commands() {
    let mut tree = MemoryTree::blank_form();
    let mut session = DesignerSession::new(ResolverConfig::default());
    assert!(apply_designer_command(DesignerCommand::Locate, &mut session, &mut tree).success);

    let cmd: DesignerCommand = serde_json::from_value(json!({
        "command": "add_styled_component",
        "componentType": "textField",
        "label": "Email",
        "backgroundColor": "#FFF1B8"
    }))
    .unwrap();
    let added = apply_designer_command(cmd, &mut session, &mut tree);
    let id = added.component_id.clone().unwrap();

    let updated = apply_designer_command(
        DesignerCommand::UpdateComponent {
            component_id: id.to_string(),
            settings: json!({"hidden": true}),
        },
        &mut session,
        &mut tree,
    );
    assert!(updated.success);

    let deleted = apply_designer_command(
        DesignerCommand::DeleteComponent {
            component_id: id.to_string(),
        },
        &mut session,
        &mut tree,
    );
    assert!(deleted.success);
    assert!(list_components(&tree, session.config()).is_empty());
}

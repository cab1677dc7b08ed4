//! Form creation against an in-memory designer.
//!
//! `DraftFormCreator` opens a blank form in a [`MemoryTree`], locates its
//! designer and lays down the template's starter component, all through
//! the regular designer commands. The artifact is a [`FormDraft`].

use async_trait::async_trait;
use designx_core::errors::DesignXError;
use designx_core::ops::{AddComponentRequest, StyledComponentRequest};
use designx_core::tree::{MemoryTree, TreeDump};
use designx_core::{DesignerSession, ResolverConfig, Result};
use designx_core_types::SessionContext;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::crud::FormSpec;
use super::crud_run::FormCreator;
use super::designer_command::{apply_designer_command, DesignerCommand};

/// A form built offline: its spec plus the resulting tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormDraft {
    pub form: FormSpec,
    pub tree: TreeDump,
}

#[derive(Debug, Clone, Default)]
pub struct DraftFormCreator {
    config: ResolverConfig,
}

impl DraftFormCreator {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    fn steps(spec: &FormSpec) -> Vec<DesignerCommand> {
        vec![
            DesignerCommand::Locate,
            DesignerCommand::AddStyledComponent(StyledComponentRequest {
                add: AddComponentRequest::new(spec.kind.starter_component()),
                label: Some(spec.form_label.clone()),
                background_color: None,
            }),
        ]
    }
}

#[async_trait]
impl FormCreator for DraftFormCreator {
    async fn create_form(&mut self, spec: &FormSpec, context: &SessionContext) -> Result<Value> {
        let mut tree = MemoryTree::blank_form();
        let mut session = DesignerSession::with_context(context.clone(), self.config.clone());

        for cmd in Self::steps(spec) {
            let name = cmd.name();
            let outcome = apply_designer_command(cmd, &mut session, &mut tree);
            if !outcome.success {
                return Err(DesignXError::InvocationFailed {
                    method: name.to_string(),
                    reason: outcome.error.unwrap_or_default(),
                });
            }
        }

        let draft = FormDraft {
            form: spec.clone(),
            tree: tree.dump(),
        };
        Ok(serde_json::to_value(draft)?)
    }
}

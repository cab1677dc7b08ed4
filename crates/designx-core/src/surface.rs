//! The seam between DesignX and the external form designer.
//!
//! A [`DesignerSurface`] is one session's view of the external system: its
//! component tree, the structural queries that yield start nodes, and the
//! ability to perform designer calls through a bound [`DesignerHandle`].

use crate::errors::Result;
use crate::model::{props, Identifier, NodeTree};
use crate::resolver::{Capability, CapabilityMatch};
use serde_json::Value;

/// Method whose presence identifies the designer object
pub const DESIGNER_CAPABILITY: &str = "addComponent";

/// Container id used when a caller names none
pub const ROOT_CONTAINER: &str = "root";

/// A call into the external designer
#[derive(Debug, Clone, PartialEq)]
pub enum DesignerCall {
    AddComponent {
        container_id: String,
        component_type: String,
        index: usize,
    },
    DeleteComponent {
        component_id: Identifier,
    },
    UpdateComponent {
        component_id: Identifier,
        settings: Value,
    },
}

impl DesignerCall {
    /// Name of the designer method this call needs
    pub fn method(&self) -> &'static str {
        match self {
            DesignerCall::AddComponent { .. } => "addComponent",
            DesignerCall::DeleteComponent { .. } => "deleteComponent",
            DesignerCall::UpdateComponent { .. } => "updateComponent",
        }
    }
}

/// A designer capability bound for use within one session
#[derive(Debug, Clone, PartialEq)]
pub struct DesignerHandle<H> {
    /// Where the tree walk found it; `None` when registered directly
    anchor: Option<CapabilityMatch<H>>,
    methods: Vec<String>,
}

impl<H> DesignerHandle<H> {
    /// A handle registered directly by the external system
    pub fn registered(methods: Vec<String>) -> Self {
        Self {
            anchor: None,
            methods,
        }
    }

    /// A handle located by walking the tree
    pub fn located(anchor: CapabilityMatch<H>, methods: Vec<String>) -> Self {
        Self {
            anchor: Some(anchor),
            methods,
        }
    }

    pub fn anchor(&self) -> Option<&CapabilityMatch<H>> {
        self.anchor.as_ref()
    }

    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    pub fn supports(&self, method: &str) -> bool {
        self.methods.iter().any(|m| m == method)
    }
}

/// One session's view of the external form designer
pub trait DesignerSurface: NodeTree {
    /// Every component node, in document order
    fn component_nodes(&self) -> Vec<Self::Handle>;

    /// Every drop container node, hidden ones included, in document order
    fn container_nodes(&self) -> Vec<Self::Handle>;

    /// Whether the node currently occupies space on screen
    fn is_visible(&self, node: Self::Handle) -> bool;

    /// Whether drag-and-drop is attached to the container
    fn is_canvas(&self, node: Self::Handle) -> bool;

    /// Turn a located capability into a callable handle
    ///
    /// The default reads the callable members of the object that matched.
    fn bind_designer(
        &self,
        found: &CapabilityMatch<Self::Handle>,
    ) -> Option<DesignerHandle<Self::Handle>>
    where
        Self: Sized,
    {
        let bag = found.bag(self)?;
        let target = Capability::method(DESIGNER_CAPABILITY).target(bag)?;
        Some(DesignerHandle::located(*found, props::method_names(target)))
    }

    /// Perform a designer call
    ///
    /// # Errors
    ///
    /// Returns `ContainerNotFound`/`ComponentNotFound` when the call names
    /// something the designer does not know, `InvocationFailed` when the
    /// designer rejects it.
    fn invoke(&mut self, designer: &DesignerHandle<Self::Handle>, call: DesignerCall)
        -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_methods() {
        let id = Identifier::new("c1").unwrap();
        assert_eq!(
            DesignerCall::DeleteComponent {
                component_id: id.clone()
            }
            .method(),
            "deleteComponent"
        );
        assert_eq!(
            DesignerCall::UpdateComponent {
                component_id: id,
                settings: Value::Null
            }
            .method(),
            "updateComponent"
        );
    }

    #[test]
    fn test_registered_handle_has_no_anchor() {
        let handle: DesignerHandle<usize> =
            DesignerHandle::registered(vec!["addComponent".to_string()]);
        assert!(handle.anchor().is_none());
        assert!(handle.supports("addComponent"));
        assert!(!handle.supports("deleteComponent"));
    }
}

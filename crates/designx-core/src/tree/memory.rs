//! Arena-backed in-memory tree.
//!
//! `MemoryTree` stands in for a live designer page: it is loaded from a
//! JSON dump for offline inspection and it carries a working designer, so
//! sessions can be exercised end to end without a browser.
//!
//! Dump format:
//!
//! ```json
//! {"nodes": [
//!   {"props": {"value": {"addComponent": "function"}}},
//!   {"parent": 0, "classes": ["sha-components-container-inner"],
//!    "sortable": true, "props": {"containerId": "root"}}
//! ]}
//! ```
//!
//! A node's `parent` must be an earlier node. `visible` defaults to true.

use crate::errors::{DesignXError, Result};
use crate::model::props::METHOD_MARKER;
use crate::model::{Identifier, NodeTree};
use crate::surface::{DesignerCall, DesignerHandle, DesignerSurface, ROOT_CONTAINER};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Class carried by component nodes
pub const COMPONENT_CLASS: &str = "sha-component";
/// Class carried by drop container nodes
pub const CONTAINER_CLASS: &str = "sha-components-container-inner";

/// Component types that own a drop container of their own
const CONTAINER_COMPONENT_TYPES: &[&str] = &["collapsiblePanel", "panel", "columns", "tabs"];

/// Position of a node in the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

fn default_visible() -> bool {
    true
}

/// One node as stored in a dump
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<NodeId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub sortable: bool,
    #[serde(default)]
    pub props: Value,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<Value>,
    /// Detached from the document by a delete
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub detached: bool,
}

impl MemoryNode {
    fn new(parent: Option<NodeId>, props: Value) -> Self {
        Self {
            parent,
            classes: Vec::new(),
            visible: true,
            sortable: false,
            props,
            dependencies: Vec::new(),
            detached: false,
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Serialized form of a [`MemoryTree`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeDump {
    pub nodes: Vec<MemoryNode>,
}

/// In-memory tree with a built-in designer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "TreeDump", into = "TreeDump")]
pub struct MemoryTree {
    nodes: Vec<MemoryNode>,
    children: Vec<Vec<NodeId>>,
}

impl TryFrom<TreeDump> for MemoryTree {
    type Error = DesignXError;

    fn try_from(dump: TreeDump) -> Result<Self> {
        let mut tree = MemoryTree {
            children: vec![Vec::new(); dump.nodes.len()],
            nodes: Vec::with_capacity(dump.nodes.len()),
        };
        for (index, node) in dump.nodes.into_iter().enumerate() {
            if let Some(parent) = node.parent {
                if parent.0 >= index {
                    return Err(DesignXError::InvalidTreeDump {
                        reason: format!(
                            "node {} names parent {}, which is not an earlier node",
                            index, parent.0
                        ),
                    });
                }
                if !node.detached {
                    tree.children[parent.0].push(NodeId(index));
                }
            }
            tree.nodes.push(node);
        }
        Ok(tree)
    }
}

impl From<MemoryTree> for TreeDump {
    fn from(tree: MemoryTree) -> Self {
        tree.dump()
    }
}

impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty form open in the designer
    ///
    /// The designer provider sits at the top, with the `root` canvas below it.
    pub fn blank_form() -> Self {
        let mut tree = Self::new();
        let provider = tree.add_root(serde_json::json!({
            "value": {
                "addComponent": METHOD_MARKER,
                "deleteComponent": METHOD_MARKER,
                "updateComponent": METHOD_MARKER,
                "formMode": "designer"
            }
        }));
        let canvas = tree.add_child(provider, serde_json::json!({ "containerId": ROOT_CONTAINER }));
        tree.add_class(canvas, CONTAINER_CLASS);
        tree.set_sortable(canvas, true);
        tree
    }

    /// Parse a JSON dump
    ///
    /// # Errors
    ///
    /// Returns `Serialization` for malformed JSON and `InvalidTreeDump`
    /// for a dump whose parent links do not form a tree.
    pub fn from_json(json: &str) -> Result<Self> {
        let dump: TreeDump = serde_json::from_str(json)?;
        MemoryTree::try_from(dump)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.dump())?)
    }

    /// Attached nodes renumbered in document order
    ///
    /// Renumbering keeps sibling order across a reload, since a loaded
    /// dump lists each node's children in node order. Detached nodes are
    /// dropped.
    pub fn dump(&self) -> TreeDump {
        let order = self.document_order();
        let mut renumbered = vec![None; self.nodes.len()];
        for (new, old) in order.iter().enumerate() {
            renumbered[old.0] = Some(NodeId(new));
        }
        let nodes = order
            .iter()
            .map(|old| {
                let mut node = self.nodes[old.0].clone();
                node.parent = node.parent.and_then(|p| renumbered[p.0]);
                node
            })
            .collect();
        TreeDump { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&MemoryNode> {
        self.nodes.get(id.0)
    }

    fn push(&mut self, node: MemoryNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.children.push(Vec::new());
        id
    }

    /// Add a parentless node
    pub fn add_root(&mut self, props: Value) -> NodeId {
        self.push(MemoryNode::new(None, props))
    }

    /// Append a child as the parent's last child
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not a node of this tree.
    pub fn add_child(&mut self, parent: NodeId, props: Value) -> NodeId {
        assert!(parent.0 < self.nodes.len(), "unknown parent {:?}", parent);
        let id = self.push(MemoryNode::new(Some(parent), props));
        self.children[parent.0].push(id);
        id
    }

    fn insert_child(&mut self, parent: NodeId, position: usize, node: MemoryNode) -> NodeId {
        let id = self.push(node);
        let siblings = &mut self.children[parent.0];
        let position = position.min(siblings.len());
        siblings.insert(position, id);
        id
    }

    pub fn add_dependency(&mut self, node: NodeId, value: Value) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.dependencies.push(value);
        }
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.classes.push(class.to_string());
        }
    }

    pub fn set_visible(&mut self, node: NodeId, visible: bool) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.visible = visible;
        }
    }

    pub fn set_sortable(&mut self, node: NodeId, sortable: bool) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.sortable = sortable;
        }
    }

    /// All attached nodes in document (pre-)order
    pub fn document_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.parent.is_none() && !n.detached)
            .map(|(i, _)| NodeId(i))
            .rev()
            .collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.children[id.0].iter().rev().copied());
        }
        order
    }

    /// Attached nodes carrying `class`, in document order
    pub fn select(&self, class: &str) -> Vec<NodeId> {
        self.document_order()
            .into_iter()
            .filter(|id| self.nodes[id.0].has_class(class))
            .collect()
    }

    fn find_container(&self, container_id: &str) -> Option<NodeId> {
        self.select(CONTAINER_CLASS)
            .into_iter()
            .find(|id| self.nodes[id.0].props.get("containerId").and_then(Value::as_str) == Some(container_id))
    }

    fn find_component(&self, component_id: &Identifier) -> Option<NodeId> {
        self.select(COMPONENT_CLASS).into_iter().find(|id| {
            self.nodes[id.0]
                .props
                .get("id")
                .and_then(Identifier::from_value)
                .as_ref()
                == Some(component_id)
        })
    }

    fn add_component(&mut self, container_id: &str, component_type: &str, index: usize) -> Result<()> {
        let container = self
            .find_container(container_id)
            .ok_or_else(|| DesignXError::ContainerNotFound {
                container_id: container_id.to_string(),
            })?;

        let id = Uuid::now_v7().to_string();
        let mut component = MemoryNode::new(
            Some(container),
            serde_json::json!({
                "id": id,
                "type": component_type,
                "containerId": container_id,
            }),
        );
        component.classes.push(COMPONENT_CLASS.to_string());
        let component = self.insert_child(container, index, component);

        if CONTAINER_COMPONENT_TYPES.contains(&component_type) {
            let mut nested = MemoryNode::new(
                Some(component),
                serde_json::json!({
                    "containerId": format!("{}_content", id),
                    "componentType": component_type,
                }),
            );
            nested.classes.push(CONTAINER_CLASS.to_string());
            nested.sortable = true;
            self.insert_child(component, 0, nested);
        }
        Ok(())
    }

    fn delete_component(&mut self, component_id: &Identifier) -> Result<()> {
        let node = self
            .find_component(component_id)
            .ok_or_else(|| DesignXError::ComponentNotFound {
                component_id: component_id.to_string(),
            })?;
        if let Some(parent) = self.nodes[node.0].parent {
            self.children[parent.0].retain(|c| *c != node);
        }
        self.nodes[node.0].detached = true;
        Ok(())
    }

    fn update_component(&mut self, component_id: &Identifier, settings: &Value) -> Result<()> {
        let node = self
            .find_component(component_id)
            .ok_or_else(|| DesignXError::ComponentNotFound {
                component_id: component_id.to_string(),
            })?;
        let settings = settings
            .as_object()
            .ok_or_else(|| DesignXError::InvocationFailed {
                method: "updateComponent".to_string(),
                reason: "settings must be an object".to_string(),
            })?;

        let props = &mut self.nodes[node.0].props;
        if !props.is_object() {
            *props = Value::Object(Map::new());
        }
        if let Some(obj) = props.as_object_mut() {
            for (key, value) in settings {
                obj.insert(key.clone(), value.clone());
            }
        }
        Ok(())
    }
}

impl NodeTree for MemoryTree {
    type Handle = NodeId;

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.parent)
    }

    fn props(&self, node: NodeId) -> &Value {
        static NULL: Value = Value::Null;
        self.nodes.get(node.0).map(|n| &n.props).unwrap_or(&NULL)
    }

    fn dependencies(&self, node: NodeId) -> Vec<&Value> {
        self.nodes
            .get(node.0)
            .map(|n| n.dependencies.iter().collect())
            .unwrap_or_default()
    }
}

impl DesignerSurface for MemoryTree {
    fn component_nodes(&self) -> Vec<NodeId> {
        self.select(COMPONENT_CLASS)
    }

    fn container_nodes(&self) -> Vec<NodeId> {
        self.select(CONTAINER_CLASS)
    }

    fn is_visible(&self, node: NodeId) -> bool {
        self.nodes.get(node.0).is_some_and(|n| n.visible && !n.detached)
    }

    fn is_canvas(&self, node: NodeId) -> bool {
        self.nodes.get(node.0).is_some_and(|n| n.sortable)
    }

    fn invoke(&mut self, designer: &DesignerHandle<NodeId>, call: DesignerCall) -> Result<()> {
        if !designer.supports(call.method()) {
            return Err(DesignXError::InvocationFailed {
                method: call.method().to_string(),
                reason: "designer does not expose this method".to_string(),
            });
        }
        match call {
            DesignerCall::AddComponent {
                container_id,
                component_type,
                index,
            } => self.add_component(&container_id, &component_type, index),
            DesignerCall::DeleteComponent { component_id } => self.delete_component(&component_id),
            DesignerCall::UpdateComponent {
                component_id,
                settings,
            } => self.update_component(&component_id, &settings),
        }
    }
}

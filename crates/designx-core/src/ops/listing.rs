//! Read-only views of what is on the canvas.

use serde::{Deserialize, Serialize};

use crate::config::ResolverConfig;
use crate::model::NodeTree;
use crate::resolver::fields::{is_present, scalar_text};
use crate::resolver::{extract_fields, Ancestors, FieldSpec};
use crate::surface::{DesignerSurface, ROOT_CONTAINER};

/// A visible component and what its ancestor path says about it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentInfo {
    /// Position among all component nodes, hidden ones included
    pub index: usize,
    pub component_id: Option<String>,
    pub component_type: Option<String>,
    pub container_id: Option<String>,
}

/// A visible drop container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerInfo {
    /// Position among all container nodes, hidden ones included
    pub index: usize,
    pub container_id: Option<String>,
    /// Last `componentType` seen on the way up to the `containerId` node
    pub parent_component_type: Option<String>,
    pub is_root: bool,
}

/// List visible components in document order
pub fn list_components<S: DesignerSurface>(surface: &S, config: &ResolverConfig) -> Vec<ComponentInfo> {
    let fields = [FieldSpec::Id, FieldSpec::Type, FieldSpec::ContainerId];
    surface
        .component_nodes()
        .into_iter()
        .enumerate()
        .filter(|(_, node)| surface.is_visible(*node))
        .map(|(index, node)| {
            let set = extract_fields(surface, node, &fields, config.identifier_depth);
            ComponentInfo {
                index,
                component_id: set.text(&FieldSpec::Id),
                component_type: set.text(&FieldSpec::Type),
                container_id: set.text(&FieldSpec::ContainerId),
            }
        })
        .collect()
}

/// Container id and owning component type of a container node
///
/// The walk stops at the first node carrying a `containerId`. The
/// component type is the last one seen up to and including that node.
fn container_owner<T: NodeTree>(
    tree: &T,
    node: T::Handle,
    max_depth: usize,
) -> (Option<String>, Option<String>) {
    let mut component_type = None;
    for (_, current) in Ancestors::new(tree, node, max_depth) {
        let bag = tree.props(current);
        let read = |spec: FieldSpec| {
            bag.get(spec.key())
                .filter(|v| is_present(v))
                .and_then(scalar_text)
        };
        if let Some(kind) = read(FieldSpec::ComponentType) {
            component_type = Some(kind);
        }
        if let Some(container_id) = read(FieldSpec::ContainerId) {
            return (Some(container_id), component_type);
        }
    }
    (None, component_type)
}

/// List visible containers in document order
pub fn list_containers<S: DesignerSurface>(surface: &S, config: &ResolverConfig) -> Vec<ContainerInfo> {
    surface
        .container_nodes()
        .into_iter()
        .enumerate()
        .filter(|(_, node)| surface.is_visible(*node))
        .map(|(index, node)| {
            let (container_id, parent_component_type) =
                container_owner(surface, node, config.container_depth);
            ContainerInfo {
                index,
                is_root: container_id.as_deref() == Some(ROOT_CONTAINER),
                container_id,
                parent_component_type,
            }
        })
        .collect()
}

//! Orchestration operations over a [`DesignerSurface`](crate::surface::DesignerSurface).
//!
//! Mutating operations take the session and the surface separately: the
//! session holds the bound designer handle, the surface is both the tree the
//! resolver reads and the target the designer calls mutate.

pub mod designer_ops;
pub mod listing;

pub use designer_ops::{
    add_component, add_styled_component, delete_component, locate_designer, update_component,
    AddComponentRequest, StyledComponentRequest, UNRESOLVED_ID_WARNING,
};
pub use listing::{list_components, list_containers, ComponentInfo, ContainerInfo};

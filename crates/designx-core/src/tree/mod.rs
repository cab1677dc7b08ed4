//! Tree implementations owned by this crate.

pub mod memory;

pub use memory::{MemoryNode, MemoryTree, NodeId, TreeDump, COMPONENT_CLASS, CONTAINER_CLASS};

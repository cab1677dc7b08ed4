pub mod identifier;
pub mod node;
pub mod props;

pub use identifier::Identifier;
pub use node::NodeTree;

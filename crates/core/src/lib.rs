pub mod attributes;
pub mod node;
pub mod simple;
pub mod testkit;

pub use attributes::{AttributeMap, Attributes};
pub use node::{Children, Node, NodeKind};
pub use simple::{SimpleNode, SimpleNodeBuilder};

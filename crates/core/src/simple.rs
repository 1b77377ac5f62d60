//! Simple in-memory tree implementing [`Node`], used by tests and by callers
//! that assemble trees programmatically.
//!
//! Nodes live in a shared arena laid out in document order, so the
//! document-order neighbours of a node are the adjacent arena slots.
//!
//! ```
//! use nodesift_core::simple::{elem, text};
//! use nodesift_core::Node;
//!
//! // <a><b>t1</b><c>t2</c></a>
//! let a = elem("a").child(elem("b").child(text("t1"))).child(elem("c").child(text("t2"))).build();
//! let b = a.first_child().unwrap();
//! assert_eq!(b.next_sibling().unwrap().tag_name(), Some("c"));
//! assert_eq!(b.parent(), Some(a));
//! ```
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::attributes::{AttributeMap, Attributes};
use crate::node::{Node, NodeKind};

#[derive(Debug)]
struct NodeData {
    kind: NodeKind,
    name: Option<String>,
    attributes: Option<AttributeMap>,
    text: Option<String>,
    parent: Option<usize>,
    first_child: Option<usize>,
    last_child: Option<usize>,
    prev_sibling: Option<usize>,
    next_sibling: Option<usize>,
}

#[derive(Debug)]
struct Arena {
    nodes: Vec<NodeData>,
}

/// Handle to a node of an arena-backed tree. Cloning is cheap.
#[derive(Clone)]
pub struct SimpleNode {
    arena: Arc<Arena>,
    index: usize,
}

impl SimpleNode {
    fn data(&self) -> &NodeData {
        &self.arena.nodes[self.index]
    }

    fn at(&self, index: Option<usize>) -> Option<SimpleNode> {
        index.map(|index| SimpleNode { arena: Arc::clone(&self.arena), index })
    }

    /// The topmost node of the tree this node belongs to.
    pub fn root(&self) -> SimpleNode {
        SimpleNode { arena: Arc::clone(&self.arena), index: 0 }
    }

    /// Position of this node in document order, starting at 0 for the root.
    pub fn position(&self) -> usize {
        self.index
    }
}

impl PartialEq for SimpleNode {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.arena, &other.arena) && self.index == other.index
    }
}

impl Eq for SimpleNode {}

impl Hash for SimpleNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.arena).hash(state);
        self.index.hash(state);
    }
}

impl fmt::Debug for SimpleNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data();
        let mut s = f.debug_struct("SimpleNode");
        s.field("kind", &data.kind).field("position", &self.index);
        if let Some(name) = &data.name {
            s.field("name", name);
        }
        if let Some(attributes) = data.attributes.as_ref().filter(|a| !a.is_empty()) {
            s.field("attributes", attributes);
        }
        if let Some(text) = &data.text {
            s.field("text", text);
        }
        s.finish()
    }
}

impl Node for SimpleNode {
    fn kind(&self) -> NodeKind {
        self.data().kind
    }

    fn tag_name(&self) -> Option<&str> {
        match self.data().kind {
            NodeKind::Element => self.data().name.as_deref(),
            _ => None,
        }
    }

    fn attributes(&self) -> Option<&dyn Attributes> {
        self.data().attributes.as_ref().map(|attributes| attributes as &dyn Attributes)
    }

    fn text_content(&self) -> Option<&str> {
        self.data().text.as_deref()
    }

    fn parent(&self) -> Option<Self> {
        self.at(self.data().parent)
    }

    fn first_child(&self) -> Option<Self> {
        self.at(self.data().first_child)
    }

    fn last_child(&self) -> Option<Self> {
        self.at(self.data().last_child)
    }

    fn prev_sibling(&self) -> Option<Self> {
        self.at(self.data().prev_sibling)
    }

    fn next_sibling(&self) -> Option<Self> {
        self.at(self.data().next_sibling)
    }

    fn preceding_in_document(&self) -> Option<Self> {
        self.at(self.index.checked_sub(1))
    }

    fn following_in_document(&self) -> Option<Self> {
        let next = self.index + 1;
        self.at((next < self.arena.nodes.len()).then_some(next))
    }
}

/// Describes a node and its subtree before it is frozen into an arena.
#[derive(Clone, Debug)]
pub struct SimpleNodeBuilder {
    kind: NodeKind,
    name: Option<String>,
    attributes: AttributeMap,
    text: Option<String>,
    children: Vec<SimpleNodeBuilder>,
}

impl SimpleNodeBuilder {
    fn new(kind: NodeKind, name: Option<String>, text: Option<String>) -> Self {
        Self { kind, name, attributes: AttributeMap::new(), text, children: Vec::new() }
    }

    /// Adds an attribute; the name is lower-cased, a repeated name overwrites the value.
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        debug_assert!(self.kind == NodeKind::Element, "attributes only apply to elements");
        self.attributes.insert(name, value);
        self
    }

    pub fn child(mut self, child: SimpleNodeBuilder) -> Self {
        debug_assert!(
            matches!(self.kind, NodeKind::Element | NodeKind::Document),
            "only elements and documents have children"
        );
        self.children.push(child);
        self
    }

    pub fn children<I: IntoIterator<Item = SimpleNodeBuilder>>(mut self, children: I) -> Self {
        for child in children {
            self = self.child(child);
        }
        self
    }

    /// Freezes the description into a tree and returns its root node.
    pub fn build(self) -> SimpleNode {
        let mut nodes = Vec::new();
        let root = flatten(self, None, &mut nodes);
        SimpleNode { arena: Arc::new(Arena { nodes }), index: root }
    }
}

/// Appends `builder` and its subtree in pre-order, wiring up all links.
fn flatten(builder: SimpleNodeBuilder, parent: Option<usize>, nodes: &mut Vec<NodeData>) -> usize {
    let SimpleNodeBuilder { kind, name, attributes, text, children } = builder;
    let index = nodes.len();
    nodes.push(NodeData {
        kind,
        name,
        attributes: (kind == NodeKind::Element).then_some(attributes),
        text,
        parent,
        first_child: None,
        last_child: None,
        prev_sibling: None,
        next_sibling: None,
    });
    let mut previous: Option<usize> = None;
    for child in children {
        let child_index = flatten(child, Some(index), nodes);
        nodes[child_index].prev_sibling = previous;
        match previous {
            Some(prev) => nodes[prev].next_sibling = Some(child_index),
            None => nodes[index].first_child = Some(child_index),
        }
        previous = Some(child_index);
    }
    nodes[index].last_child = previous;
    index
}

pub fn doc() -> SimpleNodeBuilder {
    SimpleNodeBuilder::new(NodeKind::Document, None, None)
}

/// Element builder; the tag name is lower-cased.
pub fn elem(name: &str) -> SimpleNodeBuilder {
    SimpleNodeBuilder::new(NodeKind::Element, Some(name.to_lowercase()), None)
}

pub fn text(content: &str) -> SimpleNodeBuilder {
    SimpleNodeBuilder::new(NodeKind::Text, None, Some(content.to_owned()))
}

pub fn comment(content: &str) -> SimpleNodeBuilder {
    SimpleNodeBuilder::new(NodeKind::Comment, None, Some(content.to_owned()))
}

use crate::attributes::Attributes;
use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    Element,
    Text,
    Comment,
}

/// Read-only view of a node inside a parsed markup tree.
///
/// Implementations are cheap handles into a tree owned elsewhere. Equality
/// must compare node identity, not content: two attribute-identical elements
/// at different positions are different nodes.
///
/// Only the sibling/parent links are required. The document-order
/// neighbours default to a walk over those links; trees that store their
/// nodes in pre-order can answer them directly.
pub trait Node: Clone + Eq + fmt::Debug + Send + Sync {
    fn kind(&self) -> NodeKind;

    /// Tag name of an element, `None` for every other kind.
    fn tag_name(&self) -> Option<&str>;

    /// Attribute map of an element, `None` for every other kind.
    fn attributes(&self) -> Option<&dyn Attributes>;

    /// Character data of a text or comment node.
    fn text_content(&self) -> Option<&str>;

    fn parent(&self) -> Option<Self>;
    fn first_child(&self) -> Option<Self>;
    fn last_child(&self) -> Option<Self>;
    fn prev_sibling(&self) -> Option<Self>;
    fn next_sibling(&self) -> Option<Self>;

    /// The node right before this one in document (pre-order) order: the
    /// deepest last descendant of the previous sibling, or else the parent.
    fn preceding_in_document(&self) -> Option<Self> {
        let Some(mut node) = self.prev_sibling() else {
            return self.parent();
        };
        while let Some(last) = node.last_child() {
            node = last;
        }
        Some(node)
    }

    /// The node right after this one in document (pre-order) order.
    fn following_in_document(&self) -> Option<Self> {
        if let Some(child) = self.first_child() {
            return Some(child);
        }
        let mut current = self.clone();
        loop {
            if let Some(next) = current.next_sibling() {
                return Some(next);
            }
            current = current.parent()?;
        }
    }

    fn is_element(&self) -> bool {
        self.kind() == NodeKind::Element
    }

    fn is_text(&self) -> bool {
        self.kind() == NodeKind::Text
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes()?.get(name)
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    fn children(&self) -> Children<Self> {
        Children { next: self.first_child() }
    }
}

/// Iterator over the direct children of a node, left to right.
#[derive(Clone, Debug)]
pub struct Children<N> {
    next: Option<N>,
}

impl<N: Node> Iterator for Children<N> {
    type Item = N;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.next_sibling();
        Some(current)
    }
}

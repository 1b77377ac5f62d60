use nodesift_core::Node;

use crate::class::class_matches;
use crate::value::MatchValue;

/// Whether a filter inspects element tags/attributes or text content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Attribute,
    Text,
}

/// A read-only yes/no test on a node. Filters are combined by conjunction.
pub trait Filter<N>: Send + Sync {
    fn kind(&self) -> FilterKind;

    fn matches(&self, node: &N) -> bool;

    fn is_attribute(&self) -> bool {
        self.kind() == FilterKind::Attribute
    }
}

/// Filters that inspect an element's tag name or attributes.
pub trait AttributeFilter<N>: Filter<N> {}

/// Filters that inspect the content of text nodes.
pub trait TextFilter<N>: Filter<N> {}

/// Matches one named attribute against a [`MatchValue`].
#[derive(Clone, Debug)]
pub struct Attr<N> {
    name: String,
    value: MatchValue<N>,
}

impl<N> Attr<N> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &MatchValue<N> {
        &self.value
    }
}

/// Attribute filter; the name is case-insensitive.
///
/// `MatchValue::Any` matches whenever the attribute is present, whatever its
/// value. Filtering on `class` uses class token semantics.
pub fn attr<N>(name: &str, value: impl Into<MatchValue<N>>) -> Attr<N> {
    Attr { name: name.to_ascii_lowercase(), value: value.into() }
}

/// Shorthand for `attr("id", value)`.
pub fn id<N>(value: impl Into<MatchValue<N>>) -> Attr<N> {
    attr("id", value)
}

impl<N: Node> Filter<N> for Attr<N> {
    fn kind(&self) -> FilterKind {
        FilterKind::Attribute
    }

    fn matches(&self, node: &N) -> bool {
        if self.name == "class" {
            return class_matches(node, &self.value);
        }
        attribute_matches(node, &self.name, &self.value)
    }
}

impl<N: Node> AttributeFilter<N> for Attr<N> {}

/// Plain attribute semantics: an absent attribute never matches and the
/// value is not consulted, so predicates only run for present attributes.
pub(crate) fn attribute_matches<N: Node>(node: &N, name: &str, value: &MatchValue<N>) -> bool {
    match node.attribute(name) {
        Some(actual) => value.test(actual, node),
        None => false,
    }
}

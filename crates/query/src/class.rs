//! Filters for the whitespace-separated `class` attribute.

use nodesift_core::Node;

use crate::filter::{AttributeFilter, Filter, FilterKind, attribute_matches};
use crate::value::MatchValue;

const CLASS: &str = "class";

/// Matches when the node carries every class token of the filter value.
#[derive(Clone, Debug)]
pub struct Class<N> {
    value: MatchValue<N>,
}

/// Class filter with token-set semantics.
///
/// A literal such as `"body strikeout"` matches any node whose class list
/// contains both tokens, in any order. A set matches when at least one member
/// is contained this way. Patterns, predicates and `Any` see the raw class
/// string instead.
pub fn class<N>(value: impl Into<MatchValue<N>>) -> Class<N> {
    Class { value: value.into() }
}

impl<N: Node> Filter<N> for Class<N> {
    fn kind(&self) -> FilterKind {
        FilterKind::Attribute
    }

    fn matches(&self, node: &N) -> bool {
        class_matches(node, &self.value)
    }
}

impl<N: Node> AttributeFilter<N> for Class<N> {}

pub(crate) fn class_matches<N: Node>(node: &N, value: &MatchValue<N>) -> bool {
    match value {
        MatchValue::Literal(wanted) => {
            node.attribute(CLASS).is_some_and(|actual| contains_tokens(actual, wanted))
        }
        MatchValue::Set(options) => node
            .attribute(CLASS)
            .is_some_and(|actual| options.iter().any(|wanted| contains_tokens(actual, wanted))),
        other => attribute_matches(node, CLASS, other),
    }
}

fn contains_tokens(actual: &str, wanted: &str) -> bool {
    let actual: Vec<&str> = actual.split_whitespace().collect();
    wanted.split_whitespace().all(|token| actual.contains(&token))
}

/// Matches when the node's class tokens equal the filter's, in the same order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassStrict {
    tokens: Vec<String>,
}

/// Strict class filter: `"body strikeout"` matches `class="body  strikeout"`
/// but not `class="strikeout body"`.
pub fn class_strict(classes: &str) -> ClassStrict {
    ClassStrict { tokens: classes.split_whitespace().map(str::to_owned).collect() }
}

impl<N: Node> Filter<N> for ClassStrict {
    fn kind(&self) -> FilterKind {
        FilterKind::Attribute
    }

    fn matches(&self, node: &N) -> bool {
        node.attribute(CLASS)
            .is_some_and(|actual| actual.split_whitespace().eq(self.tokens.iter().map(String::as_str)))
    }
}

impl<N: Node> AttributeFilter<N> for ClassStrict {}

use nodesift_core::Node;

use crate::filter::{Filter, FilterKind, TextFilter};
use crate::value::MatchValue;

/// Matches the content of text nodes, exactly as written.
#[derive(Clone, Debug)]
pub struct Text<N> {
    value: MatchValue<N>,
}

/// Text filter. Literals, sets and patterns compare the raw content (no
/// trimming, no case folding); `MatchValue::Any` matches non-empty text.
pub fn text<N>(value: impl Into<MatchValue<N>>) -> Text<N> {
    Text { value: value.into() }
}

/// Alias of [`text`].
pub fn string<N>(value: impl Into<MatchValue<N>>) -> Text<N> {
    text(value)
}

impl<N: Node> Filter<N> for Text<N> {
    fn kind(&self) -> FilterKind {
        FilterKind::Text
    }

    fn matches(&self, node: &N) -> bool {
        if !node.is_text() {
            return false;
        }
        let content = node.text_content().unwrap_or_default();
        match &self.value {
            MatchValue::Any => !content.is_empty(),
            value => value.test(content, node),
        }
    }
}

impl<N: Node> TextFilter<N> for Text<N> {}

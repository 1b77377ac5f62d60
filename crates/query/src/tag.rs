use nodesift_core::Node;

use crate::filter::{AttributeFilter, Filter, FilterKind};
use crate::value::MatchValue;

/// Matches an element's tag name.
///
/// Literals and sets compare case-insensitively; patterns and predicates get
/// the tag name as stored in the tree. An empty literal or empty set puts the
/// filter in the *ignored* state: it constrains nothing and does not force
/// element search.
#[derive(Clone, Debug)]
pub struct TagFilter<N> {
    value: MatchValue<N>,
}

impl<N> TagFilter<N> {
    pub fn new(value: impl Into<MatchValue<N>>) -> Self {
        Self { value: value.into() }
    }

    pub fn ignore(&self) -> bool {
        self.value.is_empty()
    }

    pub fn value(&self) -> &MatchValue<N> {
        &self.value
    }
}

impl<N: Node> TagFilter<N> {
    pub fn matches(&self, node: &N) -> bool {
        let Some(name) = node.tag_name() else {
            return false;
        };
        match &self.value {
            MatchValue::Literal(wanted) => same_tag(wanted, name),
            MatchValue::Set(options) => options.iter().any(|wanted| same_tag(wanted, name)),
            value => value.test(name, node),
        }
    }
}

fn same_tag(wanted: &str, name: &str) -> bool {
    wanted == name || wanted.to_lowercase() == name.to_lowercase()
}

impl<N: Node> Filter<N> for TagFilter<N> {
    fn kind(&self) -> FilterKind {
        FilterKind::Attribute
    }

    fn matches(&self, node: &N) -> bool {
        TagFilter::matches(self, node)
    }
}

impl<N: Node> AttributeFilter<N> for TagFilter<N> {}

pub fn tag<N>(value: impl Into<MatchValue<N>>) -> TagFilter<N> {
    TagFilter::new(value)
}

/// Matches any of the given tag names.
pub fn tags_of<N, I, S>(names: I) -> TagFilter<N>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    TagFilter::new(MatchValue::set(names))
}

/// Matches every element.
pub fn tag_any<N>() -> TagFilter<N> {
    TagFilter::new(MatchValue::Any)
}

/// Ready-made filters for frequently queried tags.
pub mod tags {
    use super::{TagFilter, tag};

    macro_rules! common_tags {
        ($($func:ident => $name:literal),* $(,)?) => {
            $(
                #[doc = concat!("Matches `<", $name, ">` elements.")]
                pub fn $func<N>() -> TagFilter<N> {
                    tag($name)
                }
            )*
        };
    }

    common_tags! {
        a => "a",
        b => "b",
        body => "body",
        div => "div",
        head => "head",
        i => "i",
        img => "img",
        li => "li",
        p => "p",
        span => "span",
        table => "table",
        td => "td",
        th => "th",
        title => "title",
        tr => "tr",
        ul => "ul",
    }
}

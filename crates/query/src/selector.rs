use core::fmt;
use std::sync::Arc;

use nodesift_core::Node;

use crate::filter::Filter;
use crate::finder::{Finder, TraversalMethod};
use crate::tag::TagFilter;

/// The tag filter and the filter conjunction of one query.
///
/// ```
/// use nodesift_core::testkit::dormouse;
/// use nodesift_query::{Selector, TraversalMethod, class, id, tags};
///
/// let soup = dormouse();
/// let selector = Selector::tag(tags::a()).with(class("sister")).with(id("link2"));
/// let lacie = selector.first(&soup, TraversalMethod::Descendants).unwrap();
/// assert_eq!(lacie.attribute("href"), Some("http://example.com/lacie"));
/// # use nodesift_core::Node;
/// ```
pub struct Selector<N> {
    tag: Option<TagFilter<N>>,
    filters: Vec<Arc<dyn Filter<N>>>,
}

impl<N: Node + 'static> Selector<N> {
    /// No tag constraint and no filters yet.
    pub fn any() -> Self {
        Self { tag: None, filters: Vec::new() }
    }

    pub fn tag(tag: TagFilter<N>) -> Self {
        Self { tag: Some(tag), filters: Vec::new() }
    }

    /// Adds a filter; a node must pass every filter to be selected.
    pub fn with<F: Filter<N> + 'static>(mut self, filter: F) -> Self {
        self.filters.push(Arc::new(filter));
        self
    }

    pub fn tag_filter(&self) -> Option<&TagFilter<N>> {
        self.tag.as_ref()
    }

    pub fn filters(&self) -> impl Iterator<Item = &dyn Filter<N>> {
        self.filters.iter().map(|filter| filter.as_ref() as &dyn Filter<N>)
    }

    /// Text nodes are searched when no usable tag filter is present and at
    /// least one filter looks at text content; everything else searches
    /// elements.
    pub fn searches_text(&self) -> bool {
        self.tag.as_ref().is_none_or(TagFilter::ignore)
            && !self.filters.iter().all(|filter| filter.is_attribute())
    }

    /// Tag filter (unless ignored) and every filter accept `node`.
    pub fn accepts(&self, node: &N) -> bool {
        self.tag.as_ref().filter(|tag| !tag.ignore()).is_none_or(|tag| tag.matches(node))
            && self.filters.iter().all(|filter| filter.matches(node))
    }

    pub fn first(&self, from: &N, method: TraversalMethod) -> Option<N> {
        from.find(method, self)
    }

    pub fn up_to(&self, from: &N, method: TraversalMethod, limit: usize) -> Vec<N> {
        from.find_up_to(method, limit, self)
    }

    pub fn all(&self, from: &N, method: TraversalMethod) -> Vec<N> {
        from.find_all(method, self)
    }
}

impl<N: Node + 'static> From<TagFilter<N>> for Selector<N> {
    fn from(tag: TagFilter<N>) -> Self {
        Selector::tag(tag)
    }
}

impl<N: Clone> Clone for Selector<N> {
    fn clone(&self) -> Self {
        Self { tag: self.tag.clone(), filters: self.filters.clone() }
    }
}

impl<N> fmt::Debug for Selector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selector")
            .field("tag", &self.tag.as_ref().map(TagFilter::value))
            .field("filters", &self.filters.len())
            .finish()
    }
}

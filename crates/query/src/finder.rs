//! Traversal engine: walks the tree from a start node and collects the
//! nodes accepted by a [`Selector`].

use nodesift_core::Node;
use tracing::{debug, trace};

use crate::filter::TextFilter;
use crate::selector::Selector;

/// Direction and extent of a search, relative to the start node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalMethod {
    /// Every node below the start node, in document order.
    Descendants,
    /// The immediate children of the start node, left to right.
    DirectChildren,
    Parent,
    PrevSibling,
    NextSibling,
    /// The node right before the start node in document order.
    PrecedingInDocument,
    /// The node right after the start node in document order.
    FollowingInDocument,
    /// Parent, grandparent, ... up to the root.
    Ancestors,
    /// Previous siblings, nearest first.
    PrevSiblings,
    /// Next siblings, nearest first.
    NextSiblings,
    /// Every node before the start node, walking document order backwards.
    AllPrecedingInDocument,
    /// Every node after the start node in document order.
    AllFollowingInDocument,
}

impl TraversalMethod {
    /// Methods naming exactly one candidate node.
    pub fn is_single_hop(self) -> bool {
        matches!(
            self,
            TraversalMethod::Parent
                | TraversalMethod::PrevSibling
                | TraversalMethod::NextSibling
                | TraversalMethod::PrecedingInDocument
                | TraversalMethod::FollowingInDocument
        )
    }

    /// Methods repeating a single hop until the chain ends.
    pub fn is_chained(self) -> bool {
        matches!(
            self,
            TraversalMethod::Ancestors
                | TraversalMethod::PrevSiblings
                | TraversalMethod::NextSiblings
                | TraversalMethod::AllPrecedingInDocument
                | TraversalMethod::AllFollowingInDocument
        )
    }

    fn hop<N: Node>(self) -> Option<fn(&N) -> Option<N>> {
        match self {
            TraversalMethod::Parent | TraversalMethod::Ancestors => Some(N::parent),
            TraversalMethod::PrevSibling | TraversalMethod::PrevSiblings => Some(N::prev_sibling),
            TraversalMethod::NextSibling | TraversalMethod::NextSiblings => Some(N::next_sibling),
            TraversalMethod::PrecedingInDocument | TraversalMethod::AllPrecedingInDocument => {
                Some(N::preceding_in_document)
            }
            TraversalMethod::FollowingInDocument | TraversalMethod::AllFollowingInDocument => {
                Some(N::following_in_document)
            }
            TraversalMethod::Descendants | TraversalMethod::DirectChildren => None,
        }
    }
}

/// Node search from `self`. Results never include the start node and come
/// back in traversal order.
pub trait Finder: Node + 'static {
    fn find(&self, method: TraversalMethod, selector: &Selector<Self>) -> Option<Self>;

    /// At most `limit` results; `0` returns nothing without walking the tree.
    fn find_up_to(&self, method: TraversalMethod, limit: usize, selector: &Selector<Self>) -> Vec<Self>;

    fn find_all(&self, method: TraversalMethod, selector: &Selector<Self>) -> Vec<Self>;

    /// Like [`Finder::find`] but over text nodes only.
    fn find_text<F: TextFilter<Self> + 'static>(&self, method: TraversalMethod, filter: F) -> Option<Self>;

    fn find_text_up_to<F: TextFilter<Self> + 'static>(
        &self,
        method: TraversalMethod,
        limit: usize,
        filter: F,
    ) -> Vec<Self>;

    fn find_all_text<F: TextFilter<Self> + 'static>(&self, method: TraversalMethod, filter: F) -> Vec<Self>;
}

impl<N: Node + 'static> Finder for N {
    fn find(&self, method: TraversalMethod, selector: &Selector<Self>) -> Option<Self> {
        search(self, method, selector, false, Some(1)).pop()
    }

    fn find_up_to(&self, method: TraversalMethod, limit: usize, selector: &Selector<Self>) -> Vec<Self> {
        if limit == 0 {
            return Vec::new();
        }
        search(self, method, selector, false, Some(limit))
    }

    fn find_all(&self, method: TraversalMethod, selector: &Selector<Self>) -> Vec<Self> {
        search(self, method, selector, false, None)
    }

    fn find_text<F: TextFilter<Self> + 'static>(&self, method: TraversalMethod, filter: F) -> Option<Self> {
        search(self, method, &Selector::any().with(filter), true, Some(1)).pop()
    }

    fn find_text_up_to<F: TextFilter<Self> + 'static>(
        &self,
        method: TraversalMethod,
        limit: usize,
        filter: F,
    ) -> Vec<Self> {
        if limit == 0 {
            return Vec::new();
        }
        search(self, method, &Selector::any().with(filter), true, Some(limit))
    }

    fn find_all_text<F: TextFilter<Self> + 'static>(&self, method: TraversalMethod, filter: F) -> Vec<Self> {
        search(self, method, &Selector::any().with(filter), true, None)
    }
}

fn search<N: Node + 'static>(
    start: &N,
    method: TraversalMethod,
    selector: &Selector<N>,
    text: bool,
    limit: Option<usize>,
) -> Vec<N> {
    let text_mode = text || selector.searches_text();
    trace!(?method, ?limit, text_mode, "node search started");
    let mut collector = Collector { start, selector, text_mode, limit, found: Vec::new(), done: false };
    collector.walk(method);
    debug!(?method, found = collector.found.len(), stopped_early = collector.done, "node search finished");
    collector.found
}

/// Per-call accumulator: the start node, the result buffer and the flag that
/// ends the walk once the limit is reached.
struct Collector<'q, N: Node + 'static> {
    start: &'q N,
    selector: &'q Selector<N>,
    text_mode: bool,
    limit: Option<usize>,
    found: Vec<N>,
    done: bool,
}

impl<N: Node + 'static> Collector<'_, N> {
    fn walk(&mut self, method: TraversalMethod) {
        let start = self.start;
        match method {
            TraversalMethod::Descendants => self.descend(start),
            TraversalMethod::DirectChildren => {
                for child in start.children() {
                    if self.done {
                        break;
                    }
                    self.visit(&child);
                }
            }
            _ => {
                let Some(hop) = method.hop::<N>() else {
                    return;
                };
                let mut next = hop(start);
                while let Some(node) = next {
                    if self.done {
                        break;
                    }
                    self.visit(&node);
                    next = if method.is_single_hop() { None } else { hop(&node) };
                }
            }
        }
    }

    fn descend(&mut self, node: &N) {
        for child in node.children() {
            if self.done {
                return;
            }
            self.visit(&child);
            self.descend(&child);
        }
    }

    fn visit(&mut self, node: &N) {
        if self.done || node == self.start || !self.eligible(node) || !self.selector.accepts(node) {
            return;
        }
        self.found.push(node.clone());
        if self.limit == Some(self.found.len()) {
            self.done = true;
        }
    }

    fn eligible(&self, node: &N) -> bool {
        if self.text_mode { node.is_text() } else { node.is_element() }
    }
}

//! Locate nodes in a parsed markup tree by composing a tag filter, attribute,
//! class and text filters, and a traversal method.
//!
//! ```
//! use nodesift_core::testkit::dormouse;
//! use nodesift_query::{Finder, MatchValue, Selector, TraversalMethod, class, tags, text};
//!
//! let soup = dormouse();
//! let links = soup.find_all(TraversalMethod::Descendants, &Selector::tag(tags::a()).with(class("sister")));
//! assert_eq!(links.len(), 3);
//!
//! let lacie = soup.find_text(TraversalMethod::Descendants, text("Lacie")).unwrap();
//! let anchor = lacie.find(TraversalMethod::Parent, &tags::a().into()).unwrap();
//! assert_eq!(anchor.attribute("id"), Some("link2"));
//!
//! let after = anchor.find_all_text(TraversalMethod::AllFollowingInDocument, text(MatchValue::Any));
//! assert_eq!(after.len(), 7);
//! # use nodesift_core::Node;
//! ```
pub mod class;
pub mod error;
pub mod filter;
pub mod finder;
pub mod selector;
pub mod tag;
pub mod text;
pub mod value;

pub use class::{Class, ClassStrict, class, class_strict};
pub use error::QueryError;
pub use filter::{Attr, AttributeFilter, Filter, FilterKind, TextFilter, attr, id};
pub use finder::{Finder, TraversalMethod};
pub use selector::Selector;
pub use tag::{TagFilter, tag, tag_any, tags, tags_of};
pub use text::{Text, string, text};
pub use value::{MatchValue, Predicate};

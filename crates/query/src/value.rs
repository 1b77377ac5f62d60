//! The closed set of ways a filter can express the value it expects.

use core::fmt;
use std::sync::Arc;

use fancy_regex::Regex;
use tracing::warn;

use crate::error::QueryError;

/// Caller-supplied test receiving the raw candidate string and the node under test.
pub type Predicate<N> = Arc<dyn Fn(&str, &N) -> bool + Send + Sync>;

/// Expected value of a tag, attribute, class or text filter.
///
/// Each kind is tested by exactly one rule in [`MatchValue::test`]; there is no
/// coercion between kinds. Filters may refine the rule for their domain: tag
/// filters compare literals case-insensitively, attribute filters read `Any`
/// as "the attribute exists", text filters read `Any` as "the text is not
/// empty".
pub enum MatchValue<N> {
    Literal(String),
    Set(Vec<String>),
    Pattern(Regex),
    Predicate(Predicate<N>),
    Any,
}

impl<N> MatchValue<N> {
    pub fn literal(value: impl Into<String>) -> Self {
        MatchValue::Literal(value.into())
    }

    pub fn set<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MatchValue::Set(values.into_iter().map(Into::into).collect())
    }

    /// Compiles `expression` into a pattern value.
    pub fn pattern(expression: &str) -> Result<Self, QueryError> {
        Regex::new(expression).map(MatchValue::Pattern).map_err(|source| {
            QueryError::InvalidPattern { pattern: expression.to_owned(), source: Box::new(source) }
        })
    }

    pub fn regex(regex: Regex) -> Self {
        MatchValue::Pattern(regex)
    }

    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&str, &N) -> bool + Send + Sync + 'static,
    {
        MatchValue::Predicate(Arc::new(predicate))
    }

    /// True for an empty literal or an empty set.
    pub fn is_empty(&self) -> bool {
        match self {
            MatchValue::Literal(value) => value.is_empty(),
            MatchValue::Set(values) => values.is_empty(),
            MatchValue::Pattern(_) | MatchValue::Predicate(_) | MatchValue::Any => false,
        }
    }

    pub fn test(&self, candidate: &str, node: &N) -> bool {
        match self {
            MatchValue::Literal(value) => candidate == value,
            MatchValue::Set(values) => values.iter().any(|value| value == candidate),
            MatchValue::Pattern(regex) => pattern_matches(regex, candidate),
            MatchValue::Predicate(predicate) => predicate(candidate, node),
            MatchValue::Any => true,
        }
    }
}

/// Runs `regex` against `candidate`; an evaluation failure counts as no match.
pub(crate) fn pattern_matches(regex: &Regex, candidate: &str) -> bool {
    match regex.is_match(candidate) {
        Ok(matched) => matched,
        Err(err) => {
            warn!(pattern = regex.as_str(), %err, "pattern evaluation failed, treating as no match");
            false
        }
    }
}

impl<N> Clone for MatchValue<N> {
    fn clone(&self) -> Self {
        match self {
            MatchValue::Literal(value) => MatchValue::Literal(value.clone()),
            MatchValue::Set(values) => MatchValue::Set(values.clone()),
            MatchValue::Pattern(regex) => MatchValue::Pattern(regex.clone()),
            MatchValue::Predicate(predicate) => MatchValue::Predicate(Arc::clone(predicate)),
            MatchValue::Any => MatchValue::Any,
        }
    }
}

impl<N> fmt::Debug for MatchValue<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchValue::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            MatchValue::Set(values) => f.debug_tuple("Set").field(values).finish(),
            MatchValue::Pattern(regex) => f.debug_tuple("Pattern").field(&regex.as_str()).finish(),
            MatchValue::Predicate(_) => f.write_str("Predicate(..)"),
            MatchValue::Any => f.write_str("Any"),
        }
    }
}

impl<N> From<&str> for MatchValue<N> {
    fn from(value: &str) -> Self {
        MatchValue::literal(value)
    }
}

impl<N> From<String> for MatchValue<N> {
    fn from(value: String) -> Self {
        MatchValue::Literal(value)
    }
}

impl<N> From<Vec<String>> for MatchValue<N> {
    fn from(values: Vec<String>) -> Self {
        MatchValue::Set(values)
    }
}

impl<N> From<Vec<&str>> for MatchValue<N> {
    fn from(values: Vec<&str>) -> Self {
        MatchValue::set(values)
    }
}

impl<N> From<&[&str]> for MatchValue<N> {
    fn from(values: &[&str]) -> Self {
        MatchValue::set(values.iter().copied())
    }
}

impl<N, const K: usize> From<[&str; K]> for MatchValue<N> {
    fn from(values: [&str; K]) -> Self {
        MatchValue::set(values)
    }
}

impl<N> From<Regex> for MatchValue<N> {
    fn from(regex: Regex) -> Self {
        MatchValue::Pattern(regex)
    }
}

//! Read-only access to the attributes of an element node.

/// Key/value view over an element's attributes.
///
/// Attribute names are case-insensitive; implementations must resolve `get`
/// regardless of the case used by the caller.
pub trait Attributes {
    /// Returns the value stored for `name`, if the attribute is present.
    fn get(&self, name: &str) -> Option<&str>;

    /// Iterates over all `(name, value)` pairs.
    fn iter(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_>;

    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    fn len(&self) -> usize {
        self.iter().count()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Insertion-ordered attribute storage with unique, lower-cased keys.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeMap {
    entries: Vec<(String, String)>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `name`, returning the previous value if the key was
    /// already present. The key keeps its original position.
    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<String>) -> Option<String> {
        let name = name.as_ref().to_ascii_lowercase();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Attributes for AttributeMap {
    fn get(&self, name: &str) -> Option<&str> {
        AttributeMap::get(self, name)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        Box::new(AttributeMap::iter(self))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = AttributeMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

impl<'a> IntoIterator for &'a AttributeMap {
    type Item = (&'a str, &'a str);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

//! Ordered attribute name/value maps returned by bulk reads.

use std::fmt;

use tabula_foundation::{AttrName, Value};

/// Attribute values in schema order.
///
/// Equality is order-sensitive: two maps are equal only if they list the same
/// attributes in the same order with equal values.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    entries: Vec<(AttrName, Value)>,
}

impl AttributeMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn push(&mut self, name: AttrName, value: Value) {
        self.entries.push((name, value));
    }

    /// Gets a value by attribute name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, v)| v)
    }

    /// Returns true if the map has an entry for `name`.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&AttrName, &Value)> {
        self.entries.iter().map(|(n, v)| (n, v))
    }

    /// Returns an iterator over names in order.
    pub fn keys(&self) -> impl Iterator<Item = &AttrName> {
        self.entries.iter().map(|(n, _)| n)
    }

    /// Returns an iterator over values in order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl fmt::Debug for AttributeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> FromIterator<(K, V)> for AttributeMap
where
    K: Into<AttrName>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for AttributeMap {
    type Item = (AttrName, Value);
    type IntoIter = std::vec::IntoIter<(AttrName, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

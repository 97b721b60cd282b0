//! Per-instance attribute storage.
//!
//! An [`AttributeStore`] holds two maps:
//! - `raw`: the last value written to each attribute, already coerced
//! - `cache`: the last materialized value of each attribute
//!
//! A name missing from `raw` was never written (or was reset by a blank write
//! under `default_blank`). A name missing from `cache` is materialized on the
//! next read. Writes always drop the cache entry of the name they touch.

use tabula_foundation::{AttrName, LtMap, Value};

/// Raw values and materialized cache of one instance.
///
/// Both maps are persistent, so cloning a store is O(1) and the clone keeps
/// every default already memoized.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeStore {
    raw: LtMap<AttrName, Value>,
    cache: LtMap<AttrName, Value>,
}

impl AttributeStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the raw value written to an attribute.
    #[must_use]
    pub fn raw(&self, name: &str) -> Option<&Value> {
        self.raw.get(name)
    }

    /// Gets the cached materialized value of an attribute.
    #[must_use]
    pub fn cached(&self, name: &str) -> Option<&Value> {
        self.cache.get(name)
    }

    /// Returns true if the attribute holds a written value.
    #[must_use]
    pub fn is_written(&self, name: &str) -> bool {
        self.raw.contains_key(name)
    }

    /// Returns true if the attribute has a cached value.
    #[must_use]
    pub fn is_cached(&self, name: &str) -> bool {
        self.cache.contains_key(name)
    }

    /// Stores a raw value and drops the attribute's cache entry.
    pub fn store(&mut self, name: AttrName, value: Value) {
        self.cache.remove(name.as_str());
        self.raw.insert(name, value);
    }

    /// Drops both the raw value and the cache entry of an attribute.
    pub fn clear(&mut self, name: &str) {
        self.raw.remove(name);
        self.cache.remove(name);
    }

    /// Caches a materialized value.
    pub fn cache(&mut self, name: AttrName, value: Value) {
        self.cache.insert(name, value);
    }

    /// Drops every cache entry, keeping raw values.
    pub fn invalidate_all(&mut self) {
        self.cache.clear();
    }

    /// Returns the number of written attributes.
    #[must_use]
    pub fn written_len(&self) -> usize {
        self.raw.len()
    }

    /// Returns the number of cached attributes.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Returns true if nothing has been written or cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty() && self.cache.is_empty()
    }
}

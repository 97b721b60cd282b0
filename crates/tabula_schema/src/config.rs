//! Configuration shared by a schema and every schema derived from it.

use std::fmt;
use std::sync::Arc;

use tabula_foundation::{CoercerRegistry, Value};

/// Predicate deciding whether a value counts as blank.
pub type BlankPredicate = fn(&Value) -> bool;

/// Configuration for an attribute schema.
///
/// Controls which coercers are available, what counts as blank, and how
/// strictly type tags are checked at declaration time.
#[derive(Clone)]
pub struct SchemaConfig {
    /// Coercers used for every typed attribute.
    pub coercers: Arc<CoercerRegistry>,

    /// Blankness predicate for `default_blank` and `present_attributes`.
    pub blank: BlankPredicate,

    /// Reject type tags with no registered coercer (false = store raw).
    pub strict_types: bool,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            coercers: CoercerRegistry::standard(),
            blank: Value::is_blank,
            strict_types: true,
        }
    }
}

impl SchemaConfig {
    /// Creates the default configuration: built-in coercers, strict types.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that accepts unregistered type tags.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            strict_types: false,
            ..Self::default()
        }
    }

    /// Builder method to set the coercer registry.
    #[must_use]
    pub fn with_coercers(mut self, coercers: Arc<CoercerRegistry>) -> Self {
        self.coercers = coercers;
        self
    }

    /// Builder method to set the blankness predicate.
    #[must_use]
    pub fn with_blank(mut self, blank: BlankPredicate) -> Self {
        self.blank = blank;
        self
    }

    /// Builder method to enable/disable strict type tags.
    #[must_use]
    pub fn with_strict_types(mut self, strict: bool) -> Self {
        self.strict_types = strict;
        self
    }
}

impl fmt::Debug for SchemaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaConfig")
            .field("coercers", &self.coercers)
            .field("strict_types", &self.strict_types)
            .finish_non_exhaustive()
    }
}

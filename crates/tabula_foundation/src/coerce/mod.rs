//! Type coercion: turning raw input into an attribute's canonical type.
//!
//! A [`CoercerRegistry`] maps each [`TypeTag`] to a [`Coercer`]. Coercions
//! are organized by category:
//! - `scalar`: string, integer, float, boolean, array
//! - `temporal`: date, datetime
//!
//! Coercion never fails loudly. Input a coercer cannot interpret yields
//! [`Value::Nil`], and the attribute simply holds no value.

mod scalar;
mod temporal;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::Error;
use crate::types::TypeTag;
use crate::value::Value;
use crate::Result;

/// Capability that converts raw values into one canonical type.
pub trait Coercer: Send + Sync {
    /// Returns true if `value` is already in canonical form.
    ///
    /// Canonical values are stored without calling [`Coercer::coerce`].
    fn is_canonical(&self, value: &Value) -> bool;

    /// Converts a non-nil, non-canonical value.
    ///
    /// Returns `None` when the input has no canonical representation.
    fn coerce(&self, value: &Value) -> Option<Value>;
}

/// Coercer built from plain function pointers.
#[derive(Clone, Copy)]
pub struct FnCoercer {
    /// Coercer name for debugging.
    pub name: &'static str,
    /// Canonical-form check.
    pub canonical: fn(&Value) -> bool,
    /// Conversion function.
    pub cast: fn(&Value) -> Option<Value>,
}

impl FnCoercer {
    /// Creates a coercer from a canonical-form check and a conversion.
    #[must_use]
    pub const fn new(
        name: &'static str,
        canonical: fn(&Value) -> bool,
        cast: fn(&Value) -> Option<Value>,
    ) -> Self {
        Self {
            name,
            canonical,
            cast,
        }
    }
}

impl Coercer for FnCoercer {
    fn is_canonical(&self, value: &Value) -> bool {
        (self.canonical)(value)
    }

    fn coerce(&self, value: &Value) -> Option<Value> {
        (self.cast)(value)
    }
}

impl fmt::Debug for FnCoercer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FnCoercer({})", self.name)
    }
}

/// The built-in coercions, keyed by their tags.
const BUILTINS: &[(TypeTag, FnCoercer)] = &[
    (
        TypeTag::STRING,
        FnCoercer::new("string", scalar::is_string, scalar::to_string),
    ),
    (
        TypeTag::INTEGER,
        FnCoercer::new("integer", scalar::is_integer, scalar::to_integer),
    ),
    (
        TypeTag::FLOAT,
        FnCoercer::new("float", scalar::is_float, scalar::to_float),
    ),
    (
        TypeTag::BOOLEAN,
        FnCoercer::new("boolean", scalar::is_boolean, scalar::to_boolean),
    ),
    (
        TypeTag::ARRAY,
        FnCoercer::new("array", scalar::is_array, scalar::to_array),
    ),
    (
        TypeTag::DATE,
        FnCoercer::new("date", temporal::is_date, temporal::to_date),
    ),
    (
        TypeTag::DATETIME,
        FnCoercer::new("datetime", temporal::is_datetime, temporal::to_datetime),
    ),
];

static STANDARD: Lazy<Arc<CoercerRegistry>> =
    Lazy::new(|| Arc::new(CoercerRegistry::with_builtins()));

/// Capability map from type tag to coercer.
///
/// Registries are built once and then shared read-only behind an `Arc`.
/// Registration is open: adding a tag never touches the existing ones.
#[derive(Clone, Default)]
pub struct CoercerRegistry {
    coercers: HashMap<TypeTag, Arc<dyn Coercer>>,
}

impl CoercerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in coercions.
    #[must_use]
    pub fn with_builtins() -> Self {
        let coercers = BUILTINS
            .iter()
            .map(|(tag, coercer)| (tag.clone(), Arc::new(*coercer) as Arc<dyn Coercer>))
            .collect();
        Self { coercers }
    }

    /// Returns the process-wide registry of built-in coercions.
    ///
    /// Built on first use and shared by every schema that does not bring
    /// its own registry.
    #[must_use]
    pub fn standard() -> Arc<Self> {
        Arc::clone(&STANDARD)
    }

    /// Registers a coercer for a new tag.
    ///
    /// # Errors
    ///
    /// Returns an error if a coercer is already registered for `tag`.
    pub fn register(&mut self, tag: TypeTag, coercer: impl Coercer + 'static) -> Result<()> {
        if self.coercers.contains_key(&tag) {
            return Err(Error::duplicate_type(tag));
        }
        self.coercers.insert(tag, Arc::new(coercer));
        Ok(())
    }

    /// Registers a coercer, replacing any existing one for `tag`.
    ///
    /// Returns true if a coercer was replaced.
    pub fn replace(&mut self, tag: TypeTag, coercer: impl Coercer + 'static) -> bool {
        self.coercers.insert(tag, Arc::new(coercer)).is_some()
    }

    /// Returns true if a coercer is registered for `tag`.
    #[must_use]
    pub fn contains(&self, tag: &TypeTag) -> bool {
        self.coercers.contains_key(tag)
    }

    /// Gets the coercer registered for `tag`.
    #[must_use]
    pub fn get(&self, tag: &TypeTag) -> Option<&Arc<dyn Coercer>> {
        self.coercers.get(tag)
    }

    /// Returns the registered tags in sorted order.
    #[must_use]
    pub fn tags(&self) -> Vec<&TypeTag> {
        let mut tags: Vec<_> = self.coercers.keys().collect();
        tags.sort();
        tags
    }

    /// Coerces `value` to the canonical type named by `tag`.
    ///
    /// - No tag: `value` is returned unchanged.
    /// - `nil` or an already canonical value: returned unchanged, the
    ///   coercer's conversion is not invoked.
    /// - A tag with no registered coercer: returned unchanged.
    /// - Input the coercer cannot interpret: `nil`.
    #[must_use]
    pub fn cast(&self, tag: Option<&TypeTag>, value: Value) -> Value {
        let Some(tag) = tag else {
            return value;
        };
        if value.is_nil() {
            return value;
        }
        let Some(coercer) = self.coercers.get(tag) else {
            debug!(type_tag = %tag, "no coercer registered; keeping raw value");
            return value;
        };
        if coercer.is_canonical(&value) {
            return value;
        }
        if let Some(coerced) = coercer.coerce(&value) {
            coerced
        } else {
            debug!(type_tag = %tag, kind = value.kind(), %value, "value has no canonical form");
            Value::Nil
        }
    }
}

impl fmt::Debug for CoercerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoercerRegistry")
            .field("tags", &self.tags())
            .finish()
    }
}

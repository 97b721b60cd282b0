//! The object-level attribute API.
//!
//! [`Attributable`] composes a host's schema, its [`AttributeStore`], and the
//! schema's coercers into reads, writes, and bulk operations. A host only
//! supplies access to its schema and store; every operation is provided.
//!
//! # Reads
//!
//! 1. A cached value is returned as is.
//! 2. A written value is returned and cached, unless the attribute is
//!    `default_blank` and the value is blank.
//! 3. Otherwise the default is produced, coerced to the declared type,
//!    cached, and returned. This happens once per instance: later reads hit
//!    the cache even when the default is non-deterministic.
//!
//! Reads never touch the raw values, so reading an unset attribute does not
//! make it look written.
//!
//! # Writes
//!
//! The value is coerced to the declared type. Under `default_blank` a blank
//! result clears the attribute so the default shows through again; any other
//! result becomes the raw value. Either way the attribute's cache entry is
//! dropped.

use std::sync::Arc;

use tabula_foundation::{AttrName, Error, LtVec, Result, Value};
use tabula_schema::{AccessorKind, AttributeDefinition, AttributeSchema};
use tracing::{trace, warn};

use crate::map::AttributeMap;
use crate::store::AttributeStore;

/// Creates the empty attribute store for a new instance of `schema`.
#[must_use]
pub fn initialize_attributes<T>(schema: &AttributeSchema<T>) -> AttributeStore {
    trace!(schema = schema.name(), "initializing attribute store");
    AttributeStore::new()
}

/// A host object carrying declared attributes.
pub trait Attributable: Sized {
    /// Returns the schema of this instance's class.
    fn attribute_schema(&self) -> &Arc<AttributeSchema<Self>>;

    /// Returns the instance's attribute store.
    fn attribute_store(&self) -> &AttributeStore;

    /// Returns the instance's attribute store mutably.
    fn attribute_store_mut(&mut self) -> &mut AttributeStore;

    /// Reads the materialized value of an attribute.
    ///
    /// # Errors
    ///
    /// Returns an error if no attribute named `name` is declared.
    fn read_attribute(&mut self, name: &str) -> Result<Value> {
        let schema = Arc::clone(self.attribute_schema());
        let definition = schema.require(name)?;
        Ok(read_definition(self, &schema, definition))
    }

    /// Writes an attribute, coercing the value to its declared type.
    ///
    /// # Errors
    ///
    /// Returns an error if no attribute named `name` is declared.
    fn write_attribute(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let schema = Arc::clone(self.attribute_schema());
        let definition = schema.require(name)?;
        write_definition(self.attribute_store_mut(), &schema, definition, value.into());
        Ok(())
    }

    /// Writes several attributes at once.
    ///
    /// Every key is checked before anything is written: if one is unknown,
    /// nothing is applied.
    ///
    /// # Errors
    ///
    /// Returns an unknown attribute error for the first undeclared key.
    fn write_attributes<I, K, V>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let schema = Arc::clone(self.attribute_schema());
        let mut staged = Vec::new();
        for (key, value) in pairs {
            let key = key.as_ref();
            let definition = schema.require(key).map_err(|err| {
                warn!(
                    schema = schema.name(),
                    attribute = key,
                    "rejecting bulk write with unknown attribute"
                );
                err.with_frame("write_attributes")
            })?;
            staged.push((definition, value.into()));
        }

        let store = self.attribute_store_mut();
        for (definition, value) in staged {
            write_definition(store, &schema, definition, value);
        }
        Ok(())
    }

    /// Returns every attribute in schema order, materializing defaults.
    fn attributes(&mut self) -> AttributeMap {
        let schema = Arc::clone(self.attribute_schema());
        let mut map = AttributeMap::new();
        for definition in schema.definitions() {
            let value = read_definition(self, &schema, definition);
            map.push(definition.name().clone(), value);
        }
        map
    }

    /// Returns the non-blank attributes in schema order.
    fn present_attributes(&mut self) -> AttributeMap {
        let schema = Arc::clone(self.attribute_schema());
        self.attributes()
            .into_iter()
            .filter(|(_, value)| !schema.is_blank(value))
            .collect()
    }

    /// Drops an attribute's written and cached values.
    ///
    /// The next read produces the default again.
    ///
    /// # Errors
    ///
    /// Returns an error if no attribute named `name` is declared.
    fn reset_attribute(&mut self, name: &str) -> Result<()> {
        let schema = Arc::clone(self.attribute_schema());
        let definition = schema.require(name)?;
        self.attribute_store_mut()
            .clear(definition.name().as_str());
        Ok(())
    }

    /// Returns true if an attribute with this name is declared.
    fn has_attribute(&self, name: &str) -> bool {
        self.attribute_schema().contains(name)
    }

    /// Returns true if the attribute currently holds a written value.
    fn is_attribute_written(&self, name: &str) -> bool {
        self.attribute_store().is_written(name)
    }

    /// Returns the declared attribute names in schema order.
    fn attribute_names(&self) -> Vec<AttrName> {
        self.attribute_schema().attribute_names().cloned().collect()
    }

    /// Returns the allowed-value set (`in`) of an attribute.
    fn enum_values(&self, name: &str) -> Option<LtVec<Value>> {
        self.attribute_schema().enum_values(name).cloned()
    }

    /// Dispatches a reader (`foo`) or writer (`foo=`) by method name.
    ///
    /// Readers take no arguments and return the materialized value. Writers
    /// take one argument and return it unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if no such accessor exists or the argument count is
    /// wrong.
    fn call_accessor(&mut self, method: &str, args: &[Value]) -> Result<Value> {
        let accessor = self
            .attribute_schema()
            .accessor(method)
            .ok_or_else(|| Error::undefined_accessor(method))?;

        match (accessor.kind, args) {
            (AccessorKind::Reader, []) => self.read_attribute(accessor.attribute.as_str()),
            (AccessorKind::Writer, [value]) => {
                self.write_attribute(accessor.attribute.as_str(), value.clone())?;
                Ok(value.clone())
            }
            _ => Err(Error::arity_mismatch(
                accessor.arity().to_string(),
                args.len(),
            )),
        }
    }
}

fn read_definition<T: Attributable>(
    instance: &mut T,
    schema: &AttributeSchema<T>,
    definition: &AttributeDefinition<T>,
) -> Value {
    let name = definition.name();
    if let Some(value) = instance.attribute_store().cached(name.as_str()) {
        trace!(attribute = %name, "attribute cache hit");
        return value.clone();
    }

    let value = materialize(instance, schema, definition);
    instance
        .attribute_store_mut()
        .cache(name.clone(), value.clone());
    value
}

fn materialize<T: Attributable>(
    instance: &T,
    schema: &AttributeSchema<T>,
    definition: &AttributeDefinition<T>,
) -> Value {
    if let Some(raw) = instance.attribute_store().raw(definition.name().as_str()) {
        if !(definition.is_default_blank() && schema.is_blank(raw)) {
            return raw.clone();
        }
    }

    trace!(attribute = %definition.name(), "materializing default");
    let default = definition.resolve_default(instance);
    schema.cast(definition, default)
}

fn write_definition<T>(
    store: &mut AttributeStore,
    schema: &AttributeSchema<T>,
    definition: &AttributeDefinition<T>,
    value: Value,
) {
    let value = schema.cast(definition, value);
    if definition.is_default_blank() && schema.is_blank(&value) {
        store.clear(definition.name().as_str());
    } else {
        store.store(definition.name().clone(), value);
    }
}

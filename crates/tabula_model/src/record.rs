//! A ready-made attribute host.

use std::fmt;
use std::sync::Arc;

use tabula_foundation::{Result, Value};
use tabula_schema::AttributeSchema;

use crate::attributable::{Attributable, initialize_attributes};
use crate::store::AttributeStore;

/// Schema type for [`Record`] hosts.
pub type RecordSchema<C = ()> = AttributeSchema<Record<C>>;

/// An object whose state is its declared attributes plus a host context.
///
/// `C` is whatever non-attribute state the host needs; instance defaults
/// receive the whole record and can read it through [`Record::context`].
pub struct Record<C = ()> {
    schema: Arc<RecordSchema<C>>,
    attributes: AttributeStore,
    context: C,
}

impl<C> Record<C> {
    /// Creates a record with no attribute written.
    #[must_use]
    pub fn new(schema: &Arc<RecordSchema<C>>, context: C) -> Self {
        Self {
            attributes: initialize_attributes(schema),
            schema: Arc::clone(schema),
            context,
        }
    }

    /// Creates a record and bulk-writes `pairs` into it.
    ///
    /// # Errors
    ///
    /// Returns an unknown attribute error if any key is undeclared.
    pub fn with_attributes<I, K, V>(
        schema: &Arc<RecordSchema<C>>,
        context: C,
        pairs: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut record = Self::new(schema, context);
        record.write_attributes(pairs)?;
        Ok(record)
    }

    /// Returns the record's schema.
    #[must_use]
    pub fn schema(&self) -> &Arc<RecordSchema<C>> {
        &self.schema
    }

    /// Returns the host context.
    #[must_use]
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Returns the host context mutably.
    ///
    /// Defaults already cached are not recomputed when the context changes.
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }
}

impl<C> Attributable for Record<C> {
    fn attribute_schema(&self) -> &Arc<AttributeSchema<Self>> {
        &self.schema
    }

    fn attribute_store(&self) -> &AttributeStore {
        &self.attributes
    }

    fn attribute_store_mut(&mut self) -> &mut AttributeStore {
        &mut self.attributes
    }
}

impl<C: Clone> Clone for Record<C> {
    fn clone(&self) -> Self {
        Self {
            schema: Arc::clone(&self.schema),
            attributes: self.attributes.clone(),
            context: self.context.clone(),
        }
    }
}

impl<C: fmt::Debug> fmt::Debug for Record<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("schema", &self.schema.name())
            .field("attributes", &self.attributes)
            .field("context", &self.context)
            .finish()
    }
}

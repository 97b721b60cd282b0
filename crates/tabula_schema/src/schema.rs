//! Attribute schemas and their composition across a class hierarchy.
//!
//! A schema is the ordered table of attribute definitions for one model
//! class. A derived class starts from a value copy of its parent's table
//! and appends its own declarations, so siblings never see each other's
//! additions and the parent never sees either.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tabula_foundation::{AttrName, Error, ErrorContext, LtVec, Result, Value};
use tracing::debug;

use crate::accessor::Accessor;
use crate::config::SchemaConfig;
use crate::definition::AttributeDefinition;

/// Ordered attribute definitions of one model class.
///
/// `T` is the host type whose instances carry these attributes.
pub struct AttributeSchema<T> {
    /// Class name, for diagnostics.
    name: Arc<str>,
    /// Names of the classes this one was derived from, outermost first.
    ancestry: Vec<Arc<str>>,
    /// Definitions in declaration order, ancestors first.
    definitions: Vec<AttributeDefinition<T>>,
    /// Map from attribute name to its index in `definitions`.
    index: HashMap<AttrName, usize>,
    config: SchemaConfig,
}

impl<T> AttributeSchema<T> {
    /// Creates an empty schema with the default configuration.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self::with_config(name, SchemaConfig::default())
    }

    /// Creates an empty schema with the given configuration.
    #[must_use]
    pub fn with_config(name: impl AsRef<str>, config: SchemaConfig) -> Self {
        Self {
            name: Arc::from(name.as_ref()),
            ancestry: Vec::new(),
            definitions: Vec::new(),
            index: HashMap::new(),
            config,
        }
    }

    /// Creates a schema for a class derived from `parent`.
    ///
    /// The parent's definitions and configuration are copied by value;
    /// later declarations on either side are invisible to the other.
    #[must_use]
    pub fn inherit(parent: &Self, name: impl AsRef<str>) -> Self {
        let mut ancestry = parent.ancestry.clone();
        ancestry.push(Arc::clone(&parent.name));
        Self {
            name: Arc::from(name.as_ref()),
            ancestry,
            definitions: parent.definitions.clone(),
            index: parent.index.clone(),
            config: parent.config.clone(),
        }
    }

    /// Declares an attribute, or overrides an existing one in place.
    ///
    /// A redeclared name keeps the position of its first declaration.
    ///
    /// # Errors
    ///
    /// Returns an error if strict types are on and the attribute's type tag
    /// has no registered coercer. The schema is unchanged in that case.
    pub fn attribute(&mut self, definition: AttributeDefinition<T>) -> Result<()> {
        if let Some(tag) = definition.ty() {
            if self.config.strict_types && !self.config.coercers.contains(tag) {
                return Err(Error::unknown_type(tag.clone()).with_context(
                    ErrorContext::new()
                        .with_schema(self.name.as_ref())
                        .with_attribute(definition.name().as_str()),
                ));
            }
        }

        if let Some(&pos) = self.index.get(definition.name()) {
            debug!(
                schema = %self.name,
                attribute = %definition.name(),
                "redeclaring attribute in place"
            );
            self.definitions[pos] = definition;
        } else {
            self.index
                .insert(definition.name().clone(), self.definitions.len());
            self.definitions.push(definition);
        }
        Ok(())
    }

    /// Declares an attribute, consuming and returning the schema.
    ///
    /// # Errors
    ///
    /// See [`AttributeSchema::attribute`].
    pub fn with_attribute(mut self, definition: AttributeDefinition<T>) -> Result<Self> {
        self.attribute(definition)?;
        Ok(self)
    }

    /// Returns the class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the names of the classes this schema derives from, outermost first.
    #[must_use]
    pub fn ancestry(&self) -> &[Arc<str>] {
        &self.ancestry
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SchemaConfig {
        &self.config
    }

    /// Returns the definitions in schema order.
    #[must_use]
    pub fn definitions(&self) -> &[AttributeDefinition<T>] {
        &self.definitions
    }

    /// Returns the definition for an attribute.
    #[must_use]
    pub fn definition(&self, name: &str) -> Option<&AttributeDefinition<T>> {
        self.index.get(name).map(|&pos| &self.definitions[pos])
    }

    /// Returns the definition for an attribute, or an unknown attribute error.
    ///
    /// # Errors
    ///
    /// Returns an error if no attribute named `name` is declared.
    pub fn require(&self, name: &str) -> Result<&AttributeDefinition<T>> {
        self.definition(name).ok_or_else(|| {
            Error::unknown_attribute(name).with_context(
                ErrorContext::new()
                    .with_schema(self.name.as_ref())
                    .with_attribute(name),
            )
        })
    }

    /// Returns true if an attribute with this name is declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the attribute names in schema order.
    pub fn attribute_names(&self) -> impl Iterator<Item = &AttrName> {
        self.definitions.iter().map(AttributeDefinition::name)
    }

    /// Returns the number of declared attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns true if no attributes are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Returns the allowed-value set (`in`) of an attribute.
    #[must_use]
    pub fn enum_values(&self, name: &str) -> Option<&LtVec<Value>> {
        self.definition(name)?.allowed_values()
    }

    /// Returns the accessor table: a reader and a writer per attribute, in
    /// schema order.
    #[must_use]
    pub fn accessors(&self) -> Vec<Accessor> {
        self.attribute_names()
            .flat_map(|name| [Accessor::reader(name.clone()), Accessor::writer(name.clone())])
            .collect()
    }

    /// Resolves a method name (`foo` or `foo=`) against the accessor table.
    #[must_use]
    pub fn accessor(&self, method: &str) -> Option<Accessor> {
        Accessor::parse(method).filter(|accessor| self.contains(accessor.attribute.as_str()))
    }

    /// Returns true if the accessor table has a method with this name.
    #[must_use]
    pub fn responds_to(&self, method: &str) -> bool {
        self.accessor(method).is_some()
    }

    /// Returns true if `value` is blank under this schema's predicate.
    #[must_use]
    pub fn is_blank(&self, value: &Value) -> bool {
        (self.config.blank)(value)
    }

    /// Coerces `value` to the declared type of `definition`.
    #[must_use]
    pub fn cast(&self, definition: &AttributeDefinition<T>, value: Value) -> Value {
        self.config.coercers.cast(definition.ty(), value)
    }
}

impl<T> Clone for AttributeSchema<T> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            ancestry: self.ancestry.clone(),
            definitions: self.definitions.clone(),
            index: self.index.clone(),
            config: self.config.clone(),
        }
    }
}

impl<T> fmt::Debug for AttributeSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeSchema")
            .field("name", &self.name)
            .field("ancestry", &self.ancestry)
            .field("definitions", &self.definitions)
            .finish_non_exhaustive()
    }
}

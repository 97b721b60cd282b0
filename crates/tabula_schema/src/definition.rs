//! Attribute definitions and default specifications.

use std::fmt;
use std::sync::Arc;

use tabula_foundation::{AttrName, Error, LtVec, Result, TypeTag, Value};

/// Default computed without any input.
pub type ComputedDefault = Arc<dyn Fn() -> Value + Send + Sync>;

/// Default computed from the owning instance.
pub type InstanceDefault<T> = Arc<dyn Fn(&T) -> Value + Send + Sync>;

/// How an attribute's default value is produced.
///
/// `T` is the host type that owns the attribute store; only
/// [`DefaultSpec::WithInstance`] ever sees it.
pub enum DefaultSpec<T> {
    /// No default: an unset attribute reads as nil.
    None,
    /// A fixed value.
    Static(Value),
    /// Computed by a zero-argument function.
    Computed(ComputedDefault),
    /// Computed from the owning instance.
    WithInstance(InstanceDefault<T>),
}

impl<T> DefaultSpec<T> {
    /// Returns true if there is no default.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns true if producing the default needs an instance.
    #[must_use]
    pub const fn needs_instance(&self) -> bool {
        matches!(self, Self::WithInstance(_))
    }
}

impl<T> Clone for DefaultSpec<T> {
    fn clone(&self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Static(value) => Self::Static(value.clone()),
            Self::Computed(f) => Self::Computed(Arc::clone(f)),
            Self::WithInstance(f) => Self::WithInstance(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for DefaultSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Static(value) => write!(f, "Static({value:?})"),
            Self::Computed(_) => write!(f, "Computed(<fn>)"),
            Self::WithInstance(_) => write!(f, "WithInstance(<fn>)"),
        }
    }
}

/// Immutable descriptor of one attribute.
///
/// Built with the `with_*` methods and handed to
/// [`AttributeSchema::attribute`](crate::AttributeSchema::attribute).
pub struct AttributeDefinition<T> {
    name: AttrName,
    ty: Option<TypeTag>,
    default: DefaultSpec<T>,
    default_blank: bool,
    allowed_values: Option<LtVec<Value>>,
}

impl<T> AttributeDefinition<T> {
    /// Creates an untyped attribute with no default.
    #[must_use]
    pub fn new(name: impl Into<AttrName>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            default: DefaultSpec::None,
            default_blank: false,
            allowed_values: None,
        }
    }

    /// Sets the type tag values are coerced to.
    #[must_use]
    pub fn with_type(mut self, ty: impl Into<TypeTag>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Sets a static default.
    #[must_use]
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = DefaultSpec::Static(value.into());
        self
    }

    /// Sets a default computed by a zero-argument function.
    #[must_use]
    pub fn with_computed_default<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        self.default = DefaultSpec::Computed(Arc::new(f));
        self
    }

    /// Sets a default computed from the owning instance.
    #[must_use]
    pub fn with_instance_default<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> Value + Send + Sync + 'static,
    {
        self.default = DefaultSpec::WithInstance(Arc::new(f));
        self
    }

    /// Sets the default specification directly.
    #[must_use]
    pub fn with_default_spec(mut self, default: DefaultSpec<T>) -> Self {
        self.default = default;
        self
    }

    /// Treats blank writes as absent, so the default shows through.
    #[must_use]
    pub fn with_default_blank(mut self, default_blank: bool) -> Self {
        self.default_blank = default_blank;
        self
    }

    /// Sets the allowed-value set (`in`).
    ///
    /// The set is exposed through `enum_values` only. Writes outside it are
    /// stored as given.
    #[must_use]
    pub fn with_allowed_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.allowed_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Returns the attribute name.
    #[must_use]
    pub fn name(&self) -> &AttrName {
        &self.name
    }

    /// Returns the declared type tag, if any.
    #[must_use]
    pub fn ty(&self) -> Option<&TypeTag> {
        self.ty.as_ref()
    }

    /// Returns the default specification.
    #[must_use]
    pub fn default_spec(&self) -> &DefaultSpec<T> {
        &self.default
    }

    /// Returns true if blank writes fall back to the default.
    #[must_use]
    pub const fn is_default_blank(&self) -> bool {
        self.default_blank
    }

    /// Returns the allowed-value set, if declared.
    #[must_use]
    pub fn allowed_values(&self) -> Option<&LtVec<Value>> {
        self.allowed_values.as_ref()
    }

    /// Produces the (uncoerced) default for `instance`.
    #[must_use]
    pub fn resolve_default(&self, instance: &T) -> Value {
        match &self.default {
            DefaultSpec::None => Value::Nil,
            DefaultSpec::Static(value) => value.clone(),
            DefaultSpec::Computed(f) => f(),
            DefaultSpec::WithInstance(f) => f(instance),
        }
    }

    /// Produces the (uncoerced) default without an instance.
    ///
    /// # Errors
    ///
    /// Returns a missing context error if the default is computed from the
    /// owning instance.
    pub fn evaluate_static_default(&self) -> Result<Value> {
        match &self.default {
            DefaultSpec::None => Ok(Value::Nil),
            DefaultSpec::Static(value) => Ok(value.clone()),
            DefaultSpec::Computed(f) => Ok(f()),
            DefaultSpec::WithInstance(_) => Err(Error::missing_context(self.name.as_str())),
        }
    }
}

impl<T> Clone for AttributeDefinition<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            ty: self.ty.clone(),
            default: self.default.clone(),
            default_blank: self.default_blank,
            allowed_values: self.allowed_values.clone(),
        }
    }
}

impl<T> fmt::Debug for AttributeDefinition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeDefinition")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("default", &self.default)
            .field("default_blank", &self.default_blank)
            .field("allowed_values", &self.allowed_values)
            .finish()
    }
}

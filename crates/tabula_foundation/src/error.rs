//! Error types for the Tabula attribute layer.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::types::TypeTag;

/// The main error type for attribute operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Records an operation frame, creating the context if needed.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_frame(frame));
        self
    }

    /// Creates an unknown attribute error.
    #[must_use]
    pub fn unknown_attribute(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownAttribute { name: name.into() })
    }

    /// Creates a missing context error for an instance-computed default.
    #[must_use]
    pub fn missing_context(attribute: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingContext {
            attribute: attribute.into(),
        })
    }

    /// Creates an unknown type tag error.
    #[must_use]
    pub fn unknown_type(tag: TypeTag) -> Self {
        Self::new(ErrorKind::UnknownType(tag))
    }

    /// Creates a duplicate coercer registration error.
    #[must_use]
    pub fn duplicate_type(tag: TypeTag) -> Self {
        Self::new(ErrorKind::DuplicateType(tag))
    }

    /// Creates an undefined accessor error.
    #[must_use]
    pub fn undefined_accessor(method: impl Into<String>) -> Self {
        Self::new(ErrorKind::UndefinedAccessor(method.into()))
    }

    /// Creates an arity mismatch error.
    #[must_use]
    pub fn arity_mismatch(expected: String, actual: usize) -> Self {
        Self::new(ErrorKind::ArityMismatch { expected, actual })
    }

    /// Returns true if this is an unknown attribute error.
    #[must_use]
    pub const fn is_unknown_attribute(&self) -> bool {
        matches!(self.kind, ErrorKind::UnknownAttribute { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// No attribute with this name is declared.
    #[error("unknown attribute: {name}")]
    UnknownAttribute {
        /// The attribute name that was requested.
        name: String,
    },

    /// A default computed from the owning instance was evaluated without one.
    #[error("missing instance context for default of attribute {attribute}")]
    MissingContext {
        /// The attribute whose default needed an instance.
        attribute: String,
    },

    /// A type tag has no registered coercer.
    #[error("unknown attribute type: {0}")]
    UnknownType(TypeTag),

    /// A coercer is already registered for this type tag.
    #[error("coercer already registered for type: {0}")]
    DuplicateType(TypeTag),

    /// No reader or writer accessor with this name exists.
    #[error("undefined accessor: {0}")]
    UndefinedAccessor(String),

    /// Wrong number of arguments passed to an accessor.
    #[error("arity mismatch: expected {expected}, got {actual}")]
    ArityMismatch {
        /// Description of expected arity.
        expected: String,
        /// Actual number of arguments.
        actual: usize,
    },
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Name of the schema (model class) involved.
    pub schema: Option<String>,
    /// Name of the attribute involved.
    pub attribute: Option<String>,
    /// Operations that were in progress, outermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the schema name.
    #[must_use]
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Sets the attribute name.
    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    /// Adds an operation frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.schema, &self.attribute) {
            (Some(schema), Some(attribute)) => write!(f, "at {schema}#{attribute}")?,
            (Some(schema), None) => write!(f, "at {schema}")?,
            (None, Some(attribute)) => write!(f, "at #{attribute}")?,
            (None, None) => {}
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}

//! Reader and writer accessors generated for declared attributes.
//!
//! Every declared attribute `foo` yields a reader `foo` and a writer `foo=`.
//! The schema keeps them as a table; hosts dispatch through it by method
//! name instead of through generated methods.

use std::fmt;

use tabula_foundation::AttrName;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which side of an attribute an accessor touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AccessorKind {
    /// Reads the materialized value.
    Reader,
    /// Writes a new raw value.
    Writer,
}

/// One entry of a schema's accessor table.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Accessor {
    /// The attribute this accessor belongs to.
    pub attribute: AttrName,
    /// Reader or writer.
    pub kind: AccessorKind,
}

impl Accessor {
    /// Creates a reader accessor.
    #[must_use]
    pub fn reader(attribute: AttrName) -> Self {
        Self {
            attribute,
            kind: AccessorKind::Reader,
        }
    }

    /// Creates a writer accessor.
    #[must_use]
    pub fn writer(attribute: AttrName) -> Self {
        Self {
            attribute,
            kind: AccessorKind::Writer,
        }
    }

    /// Parses a method name (`foo` or `foo=`) into an accessor.
    ///
    /// Does not check that the attribute exists.
    #[must_use]
    pub fn parse(method: &str) -> Option<Self> {
        match method.strip_suffix('=') {
            Some("") => None,
            Some(name) => Some(Self::writer(AttrName::new(name))),
            None if method.is_empty() => None,
            None => Some(Self::reader(AttrName::new(method))),
        }
    }

    /// Returns the method name (`foo` or `foo=`).
    #[must_use]
    pub fn method_name(&self) -> String {
        match self.kind {
            AccessorKind::Reader => self.attribute.to_string(),
            AccessorKind::Writer => self.attribute.writer_name(),
        }
    }

    /// Returns the number of arguments the accessor takes.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self.kind {
            AccessorKind::Reader => 0,
            AccessorKind::Writer => 1,
        }
    }
}

impl fmt::Display for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.method_name())
    }
}

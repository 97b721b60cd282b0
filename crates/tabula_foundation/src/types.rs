//! Type tags naming the canonical type of an attribute.

use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tag naming the canonical type an attribute is coerced to.
///
/// Tags are open-ended: any string is a valid tag, and the set of tags that
/// actually coerce is whatever a [`CoercerRegistry`](crate::CoercerRegistry)
/// has registered. The associated constants name the built-in coercions.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeTag(Cow<'static, str>);

impl TypeTag {
    /// Text, rendered from scalars.
    pub const STRING: TypeTag = TypeTag::from_static("string");
    /// 64-bit signed integer.
    pub const INTEGER: TypeTag = TypeTag::from_static("integer");
    /// 64-bit floating point.
    pub const FLOAT: TypeTag = TypeTag::from_static("float");
    /// Boolean, parsed from common textual and numeric spellings.
    pub const BOOLEAN: TypeTag = TypeTag::from_static("boolean");
    /// Calendar date without time zone.
    pub const DATE: TypeTag = TypeTag::from_static("date");
    /// Date and time without time zone.
    pub const DATETIME: TypeTag = TypeTag::from_static("datetime");
    /// Vector of values.
    pub const ARRAY: TypeTag = TypeTag::from_static("array");

    /// Creates a tag from a static string.
    #[must_use]
    pub const fn from_static(tag: &'static str) -> Self {
        Self(Cow::Borrowed(tag))
    }

    /// Creates a tag from any string.
    #[must_use]
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self(tag.into())
    }

    /// Returns the tag text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this tag names one of the built-in coercions.
    #[must_use]
    pub fn is_builtin(&self) -> bool {
        [
            Self::STRING,
            Self::INTEGER,
            Self::FLOAT,
            Self::BOOLEAN,
            Self::DATE,
            Self::DATETIME,
            Self::ARRAY,
        ]
        .contains(self)
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeTag({})", self.0)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for TypeTag {
    fn from(tag: &'static str) -> Self {
        Self::from_static(tag)
    }
}

impl From<String> for TypeTag {
    fn from(tag: String) -> Self {
        Self(Cow::Owned(tag))
    }
}

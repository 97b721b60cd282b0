//! Attribute identifiers.
//!
//! Attribute names are compared and hashed constantly (every read and write
//! looks one up), so they are stored behind an `Arc<str>` and cloned by
//! reference count rather than by copying the string.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Name of a declared attribute (e.g. `hello`, `count`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttrName(Arc<str>);

impl AttrName {
    /// Creates a new attribute name.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the name of the writer accessor for this attribute (`name=`).
    #[must_use]
    pub fn writer_name(&self) -> String {
        format!("{}=", self.0)
    }
}

impl Borrow<str> for AttrName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AttrName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AttrName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}

impl fmt::Display for AttrName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AttrName {
    fn from(name: &str) -> Self {
        Self(Arc::from(name))
    }
}

impl From<String> for AttrName {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl From<&AttrName> for AttrName {
    fn from(name: &AttrName) -> Self {
        name.clone()
    }
}

impl PartialEq<str> for AttrName {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for AttrName {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

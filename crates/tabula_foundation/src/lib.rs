//! Core values, type tags, errors, and type coercion for Tabula.
//!
//! This crate provides:
//! - [`Value`] - The dynamic value carried by every attribute
//! - [`AttrName`] - Cheaply cloned attribute identifiers
//! - [`TypeTag`] - Open-ended tags naming a canonical attribute type
//! - [`CoercerRegistry`] - Capability map from type tag to [`Coercer`]
//! - [`Error`] - Rich error types with context
//! - Persistent collections ([`LtVec`], [`LtMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod coerce;
pub mod collections;
pub mod error;
pub mod name;
pub mod types;
pub mod value;

pub use coerce::{Coercer, CoercerRegistry, FnCoercer};
pub use collections::{LtMap, LtVec};
pub use error::{Error, ErrorContext, ErrorKind};
pub use name::AttrName;
pub use types::TypeTag;
pub use value::Value;

/// Result type alias using Tabula's Error type.
pub type Result<T> = std::result::Result<T, Error>;

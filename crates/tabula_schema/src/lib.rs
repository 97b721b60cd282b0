//! Attribute definitions, inherited schemas, and accessor tables for Tabula.
//!
//! This crate provides:
//! - [`AttributeDefinition`] - One declared attribute and its rules
//! - [`DefaultSpec`] - Static, computed, or instance-derived defaults
//! - [`AttributeSchema`] - Ordered definitions composed across a class hierarchy
//! - [`Accessor`] - Reader/writer entries generated per attribute
//! - [`SchemaConfig`] - Coercers, blankness, and type strictness

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod accessor;
pub mod config;
pub mod definition;
pub mod schema;

pub use accessor::{Accessor, AccessorKind};
pub use config::{BlankPredicate, SchemaConfig};
pub use definition::{AttributeDefinition, ComputedDefault, DefaultSpec, InstanceDefault};
pub use schema::AttributeSchema;

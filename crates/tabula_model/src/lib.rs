//! Per-instance attribute storage and the object-level attribute API for Tabula.
//!
//! This crate provides:
//! - [`Attributable`] - Reads, writes, and bulk operations for any host type
//! - [`AttributeStore`] - Raw values plus the materialized-value cache
//! - [`AttributeMap`] - Ordered name/value snapshots
//! - [`Record`] - A ready-made host carrying a context value
//! - [`attribute_accessors!`] - Named reader/writer methods for a host

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod attributable;
mod macros;
pub mod map;
pub mod record;
pub mod store;

pub use attributable::{Attributable, initialize_attributes};
pub use map::AttributeMap;
pub use record::{Record, RecordSchema};
pub use store::AttributeStore;

pub use tabula_foundation::{Result, Value};

//! Tabula - Declarative attributes for dynamic objects
//!
//! This crate re-exports all layers of the Tabula system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: tabula_model      - Attribute stores, caching, the Attributable API
//! Layer 1: tabula_schema     - Attribute definitions, inherited schemas, accessors
//! Layer 0: tabula_foundation - Core types (Value, TypeTag, Error), coercion
//! ```

pub use tabula_foundation as foundation;
pub use tabula_model as model;
pub use tabula_schema as schema;

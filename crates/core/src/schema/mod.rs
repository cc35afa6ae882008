//! Schema module for relkit.
//!
//! This module contains the schema-related definitions: attributes, fields, schemas and
//! the candidate keys that describe uniqueness within a relation.

mod attribute;
mod field;
mod keys;
#[allow(clippy::module_inception)]
mod schema;

pub use attribute::Attribute;
pub use field::Field;
pub use keys::{canonicalize, default_key, rename_keys, restrict_keys, CandidateKeys};
pub use schema::{Schema, SchemaBuilder};

//! relkit Core - Attribute and candidate-key algebra for relational tuples.
//!
//! This crate provides the schema-level foundation that relational operators are
//! built on:
//!
//! - `DataType` / `Value`: field types and runtime values
//! - `schema`: attributes, schemas and candidate keys
//! - `Described` / `TupleAccess`: how a tuple type exposes its schema and fields
//! - `FieldCorrespondence`: name-keyed position mapping between two schemas
//! - `partial_project` / `combine` / `partial_equals`: tuple transformation
//! - `validate`: container and function shape checks
//! - `Error`: validation failures
//!
//! # Example
//!
//! ```rust
//! use relkit_core::schema::{restrict_keys, Attribute, CandidateKeys, Schema};
//! use relkit_core::{build_correspondence, partial_equals, DataType, Tuple, Value};
//!
//! let users = Schema::builder()
//!     .add_field("id", DataType::Int64)
//!     .unwrap()
//!     .add_field("email", DataType::String)
//!     .unwrap()
//!     .build();
//! let logins = Schema::builder()
//!     .add_field("email", DataType::String)
//!     .unwrap()
//!     .add_field("at", DataType::DateTime)
//!     .unwrap()
//!     .build();
//!
//! // Projecting `id` away loses the key on `id` but keeps the one on `email`.
//! let keys = CandidateKeys::from_lists(vec![vec!["id"], vec!["email"]]);
//! let kept = restrict_keys(&keys, &[Attribute::new("id")]);
//! assert_eq!(kept.keys(), &[vec![Attribute::new("email")]]);
//!
//! // `email` is the only attribute the schemas share.
//! let corr = build_correspondence(&users, &logins);
//! assert_eq!(corr.len(), 1);
//!
//! let user = Tuple::new(vec![Value::Int64(1), Value::from("a@example.com")]);
//! let login = Tuple::new(vec![Value::from("a@example.com"), Value::DateTime(0)]);
//! assert!(partial_equals(&user, &login, &corr));
//! ```

#![no_std]

extern crate alloc;

mod correspondence;
mod error;
pub mod schema;
mod set;
mod transform;
mod tuple;
mod types;
pub mod validate;
mod value;

pub use correspondence::{
    build_correspondence, escaping_attributes, is_subdomain, Correspondence, FieldCorrespondence,
};
pub use error::{ContainerKind, Error, FunctionSide, Result};
pub use transform::{combine, partial_equals, partial_project};
pub use tuple::{Described, Tuple, TupleAccess};
pub use types::DataType;
pub use value::Value;

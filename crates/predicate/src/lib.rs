//! relkit Predicate - Composable boolean predicates over relkit tuples.
//!
//! This crate provides the predicate expression engine:
//!
//! - `ast`: predicate trees (comparisons, combinators, ad hoc functions) and their
//!   stable textual form
//! - `compile`: binding a predicate to a schema and evaluating it against tuples
//!
//! # Example
//!
//! ```rust
//! use relkit_core::schema::{Attribute, Schema};
//! use relkit_core::{DataType, Tuple, Value};
//! use relkit_predicate::{Compare, Predicate};
//!
//! let schema = Schema::builder()
//!     .add_field("Foo", DataType::Int64)
//!     .unwrap()
//!     .add_field("Bar", DataType::Int64)
//!     .unwrap()
//!     .build();
//!
//! let foo = Attribute::new("Foo");
//! let pred = foo
//!     .equals(Attribute::new("Bar"))
//!     .or(Predicate::gt("Foo", 100i64));
//! assert_eq!(pred.to_string(), "(Foo == Bar) || (Foo > 100)");
//!
//! let compiled = pred.compile(&schema).unwrap();
//! assert!(compiled.eval(&Tuple::new(vec![Value::Int64(1), Value::Int64(1)])));
//! assert!(!compiled.eval(&Tuple::new(vec![Value::Int64(1), Value::Int64(2)])));
//! ```

#![no_std]

extern crate alloc;

pub mod ast;
pub mod compile;

pub use ast::{not, AdHoc, Combinator, Compare, CompareOp, Comparison, Operand, Predicate};
pub use compile::{compile, CompiledPredicate};

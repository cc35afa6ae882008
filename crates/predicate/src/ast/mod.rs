//! AST module for predicate expressions.

mod adhoc;
mod compare;
mod predicate;

pub use adhoc::{AdHoc, AdHocFn};
pub use compare::{CompareOp, Comparison, Operand};
pub use predicate::{not, Combinator, Compare, Predicate};

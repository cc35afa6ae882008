//! Predicate expression trees.

use super::adhoc::AdHoc;
use super::compare::{CompareOp, Comparison, Operand};
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use relkit_core::schema::Attribute;

/// Logical combinators over sub-predicates.
#[derive(Clone, Debug)]
pub enum Combinator {
    And(Box<Predicate>, Box<Predicate>),
    Or(Box<Predicate>, Box<Predicate>),
    /// True when exactly one side holds. Both sides are always evaluated.
    Xor(Box<Predicate>, Box<Predicate>),
    Not(Box<Predicate>),
}

/// A boolean expression over the attributes of a tuple.
///
/// Predicates are schema-agnostic; [`Predicate::compile`] binds one to a schema.
/// The `Display` form is fully parenthesized and stable, e.g.
/// `(Foo == Bar) && (Foo != Bar)`.
#[derive(Clone, Debug)]
pub enum Predicate {
    /// Always true or always false.
    Constant(bool),
    /// Attribute compared to an attribute or a literal.
    Comparison(Comparison),
    /// And / Or / Xor / Not.
    Combinator(Combinator),
    /// User function over a declared shape.
    AdHoc(AdHoc),
}

impl Predicate {
    /// Creates a constant predicate.
    pub fn constant(value: bool) -> Self {
        Predicate::Constant(value)
    }

    /// Creates a comparison predicate.
    pub fn compare(lhs: impl Into<Attribute>, op: CompareOp, rhs: impl Into<Operand>) -> Self {
        Predicate::Comparison(Comparison::new(lhs, op, rhs))
    }

    /// Creates an equality predicate.
    pub fn eq(lhs: impl Into<Attribute>, rhs: impl Into<Operand>) -> Self {
        Self::compare(lhs, CompareOp::Eq, rhs)
    }

    /// Creates a not-equal predicate.
    pub fn ne(lhs: impl Into<Attribute>, rhs: impl Into<Operand>) -> Self {
        Self::compare(lhs, CompareOp::Ne, rhs)
    }

    /// Creates a less-than predicate.
    pub fn lt(lhs: impl Into<Attribute>, rhs: impl Into<Operand>) -> Self {
        Self::compare(lhs, CompareOp::Lt, rhs)
    }

    /// Creates a less-than-or-equal predicate.
    pub fn le(lhs: impl Into<Attribute>, rhs: impl Into<Operand>) -> Self {
        Self::compare(lhs, CompareOp::Le, rhs)
    }

    /// Creates a greater-than predicate.
    pub fn gt(lhs: impl Into<Attribute>, rhs: impl Into<Operand>) -> Self {
        Self::compare(lhs, CompareOp::Gt, rhs)
    }

    /// Creates a greater-than-or-equal predicate.
    pub fn ge(lhs: impl Into<Attribute>, rhs: impl Into<Operand>) -> Self {
        Self::compare(lhs, CompareOp::Ge, rhs)
    }

    /// Wraps a user function.
    pub fn ad_hoc(adhoc: AdHoc) -> Self {
        Predicate::AdHoc(adhoc)
    }

    /// Creates a NOT predicate.
    #[allow(clippy::should_implement_trait)]
    pub fn not(predicate: Predicate) -> Self {
        Predicate::Combinator(Combinator::Not(Box::new(predicate)))
    }

    /// Both `self` and `other`; `other` is skipped when `self` is false.
    pub fn and(self, other: Predicate) -> Self {
        Predicate::Combinator(Combinator::And(Box::new(self), Box::new(other)))
    }

    /// Either `self` or `other`; `other` is skipped when `self` is true.
    pub fn or(self, other: Predicate) -> Self {
        Predicate::Combinator(Combinator::Or(Box::new(self), Box::new(other)))
    }

    /// Exactly one of `self` and `other`.
    pub fn xor(self, other: Predicate) -> Self {
        Predicate::Combinator(Combinator::Xor(Box::new(self), Box::new(other)))
    }

    /// Returns the attributes this predicate reads, sorted and de-duplicated.
    pub fn attributes(&self) -> Vec<Attribute> {
        let mut attrs = Vec::new();
        self.collect_attributes(&mut attrs);
        attrs.sort();
        attrs.dedup();
        attrs
    }

    fn collect_attributes(&self, out: &mut Vec<Attribute>) {
        match self {
            Predicate::Constant(_) => {}
            Predicate::Comparison(cmp) => {
                out.push(cmp.lhs.clone());
                if let Operand::Attribute(rhs) = &cmp.rhs {
                    out.push(rhs.clone());
                }
            }
            Predicate::AdHoc(adhoc) => out.extend(adhoc.domain().attributes().cloned()),
            Predicate::Combinator(Combinator::Not(inner)) => inner.collect_attributes(out),
            Predicate::Combinator(
                Combinator::And(l, r) | Combinator::Or(l, r) | Combinator::Xor(l, r),
            ) => {
                l.collect_attributes(out);
                r.collect_attributes(out);
            }
        }
    }
}

/// Creates a NOT predicate.
pub fn not(predicate: Predicate) -> Predicate {
    Predicate::not(predicate)
}

impl From<Comparison> for Predicate {
    fn from(cmp: Comparison) -> Self {
        Predicate::Comparison(cmp)
    }
}

impl From<AdHoc> for Predicate {
    fn from(adhoc: AdHoc) -> Self {
        Predicate::AdHoc(adhoc)
    }
}

impl From<bool> for Predicate {
    fn from(value: bool) -> Self {
        Predicate::Constant(value)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Constant(value) => write!(f, "{}", value),
            Predicate::Comparison(cmp) => write!(f, "{}", cmp),
            Predicate::AdHoc(adhoc) => write!(f, "{}", adhoc),
            Predicate::Combinator(Combinator::And(l, r)) => write!(f, "({}) && ({})", l, r),
            Predicate::Combinator(Combinator::Or(l, r)) => write!(f, "({}) || ({})", l, r),
            Predicate::Combinator(Combinator::Xor(l, r)) => write!(f, "({}) != ({})", l, r),
            Predicate::Combinator(Combinator::Not(inner)) => write!(f, "!({})", inner),
        }
    }
}

/// Comparison builders on [`Attribute`].
///
/// ```rust
/// use relkit_core::schema::Attribute;
/// use relkit_predicate::Compare;
///
/// let foo = Attribute::new("Foo");
/// let pred = foo.equals(Attribute::new("Bar")).and(foo.less_than(10i64));
/// assert_eq!(pred.to_string(), "(Foo == Bar) && (Foo < 10)");
/// ```
pub trait Compare {
    fn equals(&self, rhs: impl Into<Operand>) -> Predicate;
    fn not_equals(&self, rhs: impl Into<Operand>) -> Predicate;
    fn less_than(&self, rhs: impl Into<Operand>) -> Predicate;
    fn less_equal(&self, rhs: impl Into<Operand>) -> Predicate;
    fn greater_than(&self, rhs: impl Into<Operand>) -> Predicate;
    fn greater_equal(&self, rhs: impl Into<Operand>) -> Predicate;
}

impl Compare for Attribute {
    fn equals(&self, rhs: impl Into<Operand>) -> Predicate {
        Predicate::eq(self, rhs)
    }

    fn not_equals(&self, rhs: impl Into<Operand>) -> Predicate {
        Predicate::ne(self, rhs)
    }

    fn less_than(&self, rhs: impl Into<Operand>) -> Predicate {
        Predicate::lt(self, rhs)
    }

    fn less_equal(&self, rhs: impl Into<Operand>) -> Predicate {
        Predicate::le(self, rhs)
    }

    fn greater_than(&self, rhs: impl Into<Operand>) -> Predicate {
        Predicate::gt(self, rhs)
    }

    fn greater_equal(&self, rhs: impl Into<Operand>) -> Predicate {
        Predicate::ge(self, rhs)
    }
}

//! Leaf comparisons.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use relkit_core::schema::Attribute;
use relkit_core::Value;

/// Comparison operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    /// Returns the infix symbol used when rendering.
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }

    /// Returns true if the operator needs a total order on its operands.
    pub fn requires_order(&self) -> bool {
        matches!(
            self,
            CompareOp::Lt | CompareOp::Le | CompareOp::Gt | CompareOp::Ge
        )
    }

    /// Returns the operator with its operands swapped (`a < b` becomes `b > a`).
    pub fn reverse(&self) -> Self {
        match self {
            CompareOp::Lt => CompareOp::Gt,
            CompareOp::Le => CompareOp::Ge,
            CompareOp::Gt => CompareOp::Lt,
            CompareOp::Ge => CompareOp::Le,
            other => *other,
        }
    }

    /// Applies the operator to two values.
    ///
    /// Floats compare natively, so NaN is unequal to everything including itself.
    /// Ordering against null is false in every direction.
    #[inline]
    pub fn apply(&self, lhs: &Value, rhs: &Value) -> bool {
        if let (Value::Float64(a), Value::Float64(b)) = (lhs, rhs) {
            return match self {
                CompareOp::Eq => a == b,
                CompareOp::Ne => a != b,
                CompareOp::Lt => a < b,
                CompareOp::Le => a <= b,
                CompareOp::Gt => a > b,
                CompareOp::Ge => a >= b,
            };
        }
        if self.requires_order() && (lhs.is_null() || rhs.is_null()) {
            return false;
        }
        match self {
            CompareOp::Eq => lhs == rhs,
            CompareOp::Ne => lhs != rhs,
            CompareOp::Lt => lhs < rhs,
            CompareOp::Le => lhs <= rhs,
            CompareOp::Gt => lhs > rhs,
            CompareOp::Ge => lhs >= rhs,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Right-hand side of a comparison.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    /// Another attribute of the same tuple.
    Attribute(Attribute),
    /// A literal value.
    Literal(Value),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Attribute(attr) => write!(f, "{}", attr),
            Operand::Literal(value) => write!(f, "{}", value),
        }
    }
}

impl From<Attribute> for Operand {
    fn from(attr: Attribute) -> Self {
        Operand::Attribute(attr)
    }
}

impl From<&Attribute> for Operand {
    fn from(attr: &Attribute) -> Self {
        Operand::Attribute(attr.clone())
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Literal(value)
    }
}

impl From<bool> for Operand {
    fn from(v: bool) -> Self {
        Operand::Literal(v.into())
    }
}

impl From<i32> for Operand {
    fn from(v: i32) -> Self {
        Operand::Literal(v.into())
    }
}

impl From<i64> for Operand {
    fn from(v: i64) -> Self {
        Operand::Literal(v.into())
    }
}

impl From<f64> for Operand {
    fn from(v: f64) -> Self {
        Operand::Literal(v.into())
    }
}

impl From<&str> for Operand {
    fn from(v: &str) -> Self {
        Operand::Literal(v.into())
    }
}

impl From<String> for Operand {
    fn from(v: String) -> Self {
        Operand::Literal(v.into())
    }
}

impl From<Vec<u8>> for Operand {
    fn from(v: Vec<u8>) -> Self {
        Operand::Literal(v.into())
    }
}

/// An attribute compared against another attribute or a literal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Comparison {
    pub lhs: Attribute,
    pub op: CompareOp,
    pub rhs: Operand,
}

impl Comparison {
    pub fn new(lhs: impl Into<Attribute>, op: CompareOp, rhs: impl Into<Operand>) -> Self {
        Self {
            lhs: lhs.into(),
            op,
            rhs: rhs.into(),
        }
    }

    /// Returns true if both sides are attributes.
    pub fn is_attribute_pair(&self) -> bool {
        matches!(self.rhs, Operand::Attribute(_))
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.op, self.rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_compare_op_apply() {
        let one = Value::Int64(1);
        let two = Value::Int64(2);
        assert!(CompareOp::Lt.apply(&one, &two));
        assert!(CompareOp::Le.apply(&one, &one));
        assert!(!CompareOp::Gt.apply(&one, &two));
        assert!(CompareOp::Ge.apply(&two, &one));
        assert!(CompareOp::Eq.apply(&one, &one));
        assert!(CompareOp::Ne.apply(&one, &two));
    }

    #[test]
    fn test_compare_op_apply_nan_and_null() {
        let nan = Value::Float64(f64::NAN);
        assert!(!CompareOp::Eq.apply(&nan, &nan));
        assert!(CompareOp::Ne.apply(&nan, &nan));

        let one = Value::Int64(1);
        assert!(!CompareOp::Lt.apply(&Value::Null, &one));
        assert!(!CompareOp::Ge.apply(&one, &Value::Null));
        assert!(CompareOp::Eq.apply(&Value::Null, &Value::Null));
        assert!(CompareOp::Ne.apply(&Value::Null, &one));
    }

    #[test]
    fn test_compare_op_reverse() {
        assert_eq!(CompareOp::Lt.reverse(), CompareOp::Gt);
        assert_eq!(CompareOp::Ge.reverse(), CompareOp::Le);
        assert_eq!(CompareOp::Eq.reverse(), CompareOp::Eq);
        assert!(!CompareOp::Ne.requires_order());
        assert!(CompareOp::Le.requires_order());
    }

    #[test]
    fn test_comparison_display() {
        let cmp = Comparison::new("Foo", CompareOp::Eq, Attribute::new("Bar"));
        assert_eq!(cmp.to_string(), "Foo == Bar");
        assert!(cmp.is_attribute_pair());

        let cmp = Comparison::new("Foo", CompareOp::Lt, 3i64);
        assert_eq!(cmp.to_string(), "Foo < 3");
        assert!(!cmp.is_attribute_pair());

        let cmp = Comparison::new("Name", CompareOp::Ge, "bob");
        assert_eq!(cmp.to_string(), "Name >= \"bob\"");
    }
}

//! Tuple values and the schema introspection traits.
//!
//! relkit never inspects a tuple type directly. A type opts in by implementing
//! [`Described`] (its schema, fixed at compile time) and [`TupleAccess`] (positional
//! get/set). [`Tuple`] is the dynamic implementation used when the shape is only
//! known at runtime.

use crate::schema::Schema;
use crate::value::Value;
use alloc::borrow::Cow;
use alloc::vec::Vec;

/// A tuple type whose schema is known statically.
pub trait Described {
    /// Returns the ordered (attribute, type) description of `Self`.
    fn schema() -> Schema;
}

/// Positional access to the fields of a tuple.
pub trait TupleAccess: Sized {
    /// Reads the field at `position`.
    ///
    /// Types that store [`Value`]s hand out borrows; others build the value on demand.
    fn field(&self, position: usize) -> Option<Cow<'_, Value>>;

    /// Writes the field at `position`. Returns false if the position is out of range.
    fn set_field(&mut self, position: usize, value: Value) -> bool;

    /// Builds a tuple of `schema`'s shape with every field at its type's default.
    fn with_defaults(schema: &Schema) -> Self;

    /// Returns the number of fields.
    fn width(&self) -> usize;
}

/// A tuple of dynamically typed values, indexed by schema position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Tuple {
    values: Vec<Value>,
}

impl Tuple {
    /// Creates a tuple from its values.
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Creates a tuple holding the fields of `source` at `positions`, in that order.
    ///
    /// Returns None if a position is out of range.
    pub fn from_positions<T: TupleAccess>(source: &T, positions: &[usize]) -> Option<Self> {
        let values = positions
            .iter()
            .map(|&pos| source.field(pos).map(Cow::into_owned))
            .collect::<Option<Vec<Value>>>()?;
        Some(Self { values })
    }

    /// Returns a reference to the values.
    #[inline]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Consumes the tuple, returning its values.
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Gets a value at the given position.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Sets a value at the given position.
    pub fn set(&mut self, index: usize, value: Value) -> bool {
        if index < self.values.len() {
            self.values[index] = value;
            true
        } else {
            false
        }
    }

    /// Returns the number of values in this tuple.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if this tuple has no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if the tuple has `schema`'s width and every non-null value
    /// has its field's type.
    pub fn conforms_to(&self, schema: &Schema) -> bool {
        self.values.len() == schema.len()
            && self
                .values
                .iter()
                .zip(schema.fields())
                .all(|(v, f)| v.data_type().map_or(true, |dt| dt == f.data_type()))
    }
}

impl From<Vec<Value>> for Tuple {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}

impl TupleAccess for Tuple {
    fn field(&self, position: usize) -> Option<Cow<'_, Value>> {
        self.values.get(position).map(Cow::Borrowed)
    }

    fn set_field(&mut self, position: usize, value: Value) -> bool {
        self.set(position, value)
    }

    fn with_defaults(schema: &Schema) -> Self {
        Self {
            values: schema.fields().iter().map(|f| f.default_value()).collect(),
        }
    }

    fn width(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DataType;
    use alloc::vec;

    fn schema() -> Schema {
        Schema::builder()
            .add_field("id", DataType::Int64)
            .unwrap()
            .add_field("name", DataType::String)
            .unwrap()
            .build()
    }

    #[test]
    fn test_tuple_get_value() {
        let tuple = Tuple::new(vec![Value::Int64(1), Value::String("Alice".into())]);
        assert_eq!(tuple.get(0), Some(&Value::Int64(1)));
        assert_eq!(tuple.get(1), Some(&Value::String("Alice".into())));
        assert_eq!(tuple.get(2), None);
    }

    #[test]
    fn test_tuple_set_value() {
        let mut tuple = Tuple::new(vec![Value::Int64(1), Value::String("Alice".into())]);
        assert!(tuple.set(0, Value::Int64(100)));
        assert_eq!(tuple.get(0), Some(&Value::Int64(100)));
        assert!(!tuple.set(10, Value::Int64(999)));
    }

    #[test]
    fn test_with_defaults() {
        let tuple = Tuple::with_defaults(&schema());
        assert_eq!(
            tuple.values(),
            &[Value::Int64(0), Value::String(Default::default())]
        );
        assert_eq!(tuple.width(), 2);
    }

    #[test]
    fn test_tuple_access_borrows() {
        let tuple = Tuple::new(vec![Value::Int64(7)]);
        assert!(matches!(tuple.field(0), Some(Cow::Borrowed(Value::Int64(7)))));
        assert!(tuple.field(1).is_none());
    }

    #[test]
    fn test_from_positions() {
        let tuple = Tuple::new(vec![Value::Int64(1), Value::from("a"), Value::Boolean(true)]);
        let projected = Tuple::from_positions(&tuple, &[2, 0]).unwrap();
        assert_eq!(projected.values(), &[Value::Boolean(true), Value::Int64(1)]);
        assert!(Tuple::from_positions(&tuple, &[3]).is_none());
    }

    #[test]
    fn test_conforms_to() {
        let schema = schema();
        assert!(Tuple::new(vec![Value::Int64(1), Value::from("a")]).conforms_to(&schema));
        assert!(Tuple::new(vec![Value::Null, Value::from("a")]).conforms_to(&schema));
        assert!(!Tuple::new(vec![Value::Int32(1), Value::from("a")]).conforms_to(&schema));
        assert!(!Tuple::new(vec![Value::Int64(1)]).conforms_to(&schema));
    }
}

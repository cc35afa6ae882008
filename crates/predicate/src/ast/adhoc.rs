//! Predicates backed by user functions.

use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;
use relkit_core::schema::Schema;
use relkit_core::{Described, Tuple, TupleAccess};

/// Shared boolean function over a tuple of the declared shape.
pub type AdHocFn = Arc<dyn Fn(&Tuple) -> bool + Send + Sync>;

/// A named boolean function applied to the attributes it declares.
///
/// The function never sees the whole tuple it filters: it receives a [`Tuple`] holding
/// the declared attributes, in declaration order. The declared shape must be a
/// subdomain of any schema the predicate is compiled against.
#[derive(Clone)]
pub struct AdHoc {
    name: String,
    domain: Schema,
    func: AdHocFn,
}

impl AdHoc {
    /// Wraps `func` as a predicate named `func` over `domain`.
    pub fn new<F>(domain: Schema, func: F) -> Self
    where
        F: Fn(&Tuple) -> bool + Send + Sync + 'static,
    {
        Self::named("func", domain, func)
    }

    /// Wraps `func` under a custom name.
    pub fn named<F>(name: impl Into<String>, domain: Schema, func: F) -> Self
    where
        F: Fn(&Tuple) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            domain,
            func: Arc::new(func),
        }
    }

    /// Wraps a function over a statically described tuple type.
    ///
    /// The declared shape is `T::schema()`; each call rebuilds a `T` from the
    /// projected values. If `T` rejects one of them the call is false and `func`
    /// is not invoked.
    pub fn typed<T, F>(func: F) -> Self
    where
        T: Described + TupleAccess + 'static,
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let domain = T::schema();
        let shape = domain.clone();
        Self::new(domain, move |tuple: &Tuple| {
            let mut typed = T::with_defaults(&shape);
            for (pos, value) in tuple.values().iter().enumerate() {
                if !typed.set_field(pos, value.clone()) {
                    return false;
                }
            }
            func(&typed)
        })
    }

    /// Returns the function name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared input shape.
    #[inline]
    pub fn domain(&self) -> &Schema {
        &self.domain
    }

    /// Calls the function on a tuple of the declared shape.
    #[inline]
    pub fn call(&self, tuple: &Tuple) -> bool {
        (self.func)(tuple)
    }
}

impl fmt::Debug for AdHoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdHoc")
            .field("name", &self.name)
            .field("domain", &self.domain)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for AdHoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({{", self.name)?;
        for (i, attr) in self.domain.attributes().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", attr)?;
        }
        f.write_str("})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::borrow::Cow;
    use alloc::string::ToString;
    use alloc::vec;
    use relkit_core::{DataType, Value};

    fn domain() -> Schema {
        Schema::builder()
            .add_field("A", DataType::Int64)
            .unwrap()
            .add_field("B", DataType::Int64)
            .unwrap()
            .build()
    }

    #[derive(Default)]
    struct Pair {
        a: i64,
        b: i64,
    }

    impl Described for Pair {
        fn schema() -> Schema {
            domain()
        }
    }

    impl TupleAccess for Pair {
        fn field(&self, position: usize) -> Option<Cow<'_, Value>> {
            match position {
                0 => Some(Cow::Owned(Value::Int64(self.a))),
                1 => Some(Cow::Owned(Value::Int64(self.b))),
                _ => None,
            }
        }

        fn set_field(&mut self, position: usize, value: Value) -> bool {
            match (position, value.as_i64()) {
                (0, Some(v)) => self.a = v,
                (1, Some(v)) => self.b = v,
                _ => return false,
            }
            true
        }

        fn with_defaults(_schema: &Schema) -> Self {
            Self::default()
        }

        fn width(&self) -> usize {
            2
        }
    }

    #[test]
    fn test_display_from_shape() {
        let adhoc = AdHoc::new(domain(), |_| true);
        assert_eq!(adhoc.to_string(), "func({A, B})");

        let adhoc = AdHoc::named("positive", Schema::default(), |_| true);
        assert_eq!(adhoc.to_string(), "positive({})");
    }

    #[test]
    fn test_call() {
        let adhoc = AdHoc::new(domain(), |t| t.get(0) == t.get(1));
        assert!(adhoc.call(&Tuple::new(vec![Value::Int64(1), Value::Int64(1)])));
        assert!(!adhoc.call(&Tuple::new(vec![Value::Int64(1), Value::Int64(2)])));
    }

    #[test]
    fn test_typed() {
        let adhoc = AdHoc::typed(|p: &Pair| p.a < p.b);
        assert_eq!(adhoc.domain(), &domain());
        assert!(adhoc.call(&Tuple::new(vec![Value::Int64(1), Value::Int64(2)])));
        assert!(!adhoc.call(&Tuple::new(vec![Value::Int64(3), Value::Int64(2)])));
    }

    #[test]
    fn test_typed_rejects_unstorable_value() {
        let adhoc = AdHoc::typed(|p: &Pair| p.a == 0);
        assert!(adhoc.call(&Tuple::new(vec![Value::Int64(0), Value::Int64(1)])));
        assert!(!adhoc.call(&Tuple::new(vec![Value::Null, Value::Int64(1)])));
        assert!(!adhoc.call(&Tuple::new(vec![Value::from("0"), Value::Int64(1)])));
    }
}

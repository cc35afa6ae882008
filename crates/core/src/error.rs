//! Error types for relkit.

use crate::types::DataType;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Result type alias for relkit operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Which side of a transformation function an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FunctionSide {
    /// The function's argument.
    Input,
    /// The function's result.
    Output,
}

impl fmt::Display for FunctionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionSide::Input => f.write_str("input"),
            FunctionSide::Output => f.write_str("output"),
        }
    }
}

/// Shape of a container handed to a relational operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// An ordered sequence (slice, vector, iterator).
    Sequence,
    /// A channel of tuples.
    Channel,
    /// A keyed mapping.
    Mapping,
    /// A single value, not a container at all.
    Scalar,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContainerKind::Sequence => "sequence",
            ContainerKind::Channel => "channel",
            ContainerKind::Mapping => "mapping",
            ContainerKind::Scalar => "scalar",
        };
        f.write_str(name)
    }
}

/// Error types for relkit operations.
///
/// Every variant is a deterministic validation failure reported at construction
/// or compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A container is not of the expected kind.
    ContainerShape {
        expected: ContainerKind,
        found: ContainerKind,
    },
    /// A container's element type is not the expected tuple type.
    ElementType {
        expected: String,
        found: String,
    },
    /// A transformation function does not take or return exactly one value.
    FunctionArity {
        side: FunctionSide,
        expected: usize,
        found: usize,
    },
    /// A function's attributes are not a subdomain of the expected schema.
    /// `attributes` lists the offending names, sorted.
    Domain {
        side: FunctionSide,
        attributes: Vec<String>,
    },
    /// An attribute reference does not exist in the schema.
    AttributeNotFound {
        attribute: String,
    },
    /// An ordering comparison was requested on a type without a total order.
    Unordered {
        attribute: String,
        data_type: DataType,
    },
    /// Two sides of a comparison resolve to different types.
    TypeMismatch {
        attribute: String,
        expected: DataType,
        got: Option<DataType>,
    },
    /// Invalid schema definition.
    InvalidSchema {
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ContainerShape { expected, found } => {
                write!(f, "Container shape mismatch: expected {}, found {}", expected, found)
            }
            Error::ElementType { expected, found } => {
                write!(f, "Element type mismatch: expected {}, found {}", expected, found)
            }
            Error::FunctionArity {
                side,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Function {} arity mismatch: expected {}, found {}",
                    side, expected, found
                )
            }
            Error::Domain { side, attributes } => {
                write!(f, "Function {} is not a subdomain: unknown attributes [", side)?;
                for (i, attr) in attributes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(attr)?;
                }
                f.write_str("]")
            }
            Error::AttributeNotFound { attribute } => {
                write!(f, "Attribute not found: {}", attribute)
            }
            Error::Unordered {
                attribute,
                data_type,
            } => {
                write!(
                    f,
                    "Attribute {} of type {} has no total order",
                    attribute, data_type
                )
            }
            Error::TypeMismatch {
                attribute,
                expected,
                got,
            } => match got {
                Some(got) => write!(
                    f,
                    "Type mismatch on {}: expected {}, got {}",
                    attribute, expected, got
                ),
                None => write!(f, "Type mismatch on {}: expected {}, got null", attribute, expected),
            },
            Error::InvalidSchema { message } => {
                write!(f, "Invalid schema: {}", message)
            }
        }
    }
}

impl Error {
    /// Creates a container shape error.
    pub fn container_shape(expected: ContainerKind, found: ContainerKind) -> Self {
        Error::ContainerShape { expected, found }
    }

    /// Creates an element type error.
    pub fn element_type(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Error::ElementType {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Creates a function arity error.
    pub fn function_arity(side: FunctionSide, expected: usize, found: usize) -> Self {
        Error::FunctionArity {
            side,
            expected,
            found,
        }
    }

    /// Creates a domain error. The attribute list is sorted.
    pub fn domain(side: FunctionSide, mut attributes: Vec<String>) -> Self {
        attributes.sort();
        Error::Domain { side, attributes }
    }

    /// Creates an attribute not found error.
    pub fn attribute_not_found(attribute: impl Into<String>) -> Self {
        Error::AttributeNotFound {
            attribute: attribute.into(),
        }
    }

    /// Creates an unordered type error.
    pub fn unordered(attribute: impl Into<String>, data_type: DataType) -> Self {
        Error::Unordered {
            attribute: attribute.into(),
            data_type,
        }
    }

    /// Creates a type mismatch error.
    pub fn type_mismatch(
        attribute: impl Into<String>,
        expected: DataType,
        got: Option<DataType>,
    ) -> Self {
        Error::TypeMismatch {
            attribute: attribute.into(),
            expected,
            got,
        }
    }

    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Self {
        Error::InvalidSchema {
            message: message.into(),
        }
    }

    /// Returns true for the errors raised while compiling a predicate.
    pub fn is_compile_error(&self) -> bool {
        matches!(
            self,
            Error::AttributeNotFound { .. }
                | Error::Unordered { .. }
                | Error::TypeMismatch { .. }
                | Error::Domain {
                    side: FunctionSide::Input,
                    ..
                }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn test_error_display() {
        let err = Error::container_shape(ContainerKind::Sequence, ContainerKind::Mapping);
        assert_eq!(
            err.to_string(),
            "Container shape mismatch: expected sequence, found mapping"
        );

        let err = Error::attribute_not_found("Foo");
        assert!(err.to_string().contains("Foo"));

        let err = Error::unordered("Score", DataType::Float64);
        assert!(err.to_string().contains("f64"));

        let err = Error::type_mismatch("Foo", DataType::Int64, None);
        assert!(err.to_string().ends_with("got null"));
    }

    #[test]
    fn test_domain_sorted() {
        let err = Error::domain(FunctionSide::Output, vec!["Z".into(), "A".into()]);
        match &err {
            Error::Domain { side, attributes } => {
                assert_eq!(*side, FunctionSide::Output);
                assert_eq!(attributes, &vec![String::from("A"), String::from("Z")]);
            }
            _ => panic!("Wrong error type"),
        }
        assert_eq!(
            err.to_string(),
            "Function output is not a subdomain: unknown attributes [A, Z]"
        );
    }

    #[test]
    fn test_error_constructors() {
        let err = Error::function_arity(FunctionSide::Input, 1, 2);
        match err {
            Error::FunctionArity {
                side,
                expected,
                found,
            } => {
                assert_eq!(side, FunctionSide::Input);
                assert_eq!(expected, 1);
                assert_eq!(found, 2);
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_is_compile_error() {
        assert!(Error::attribute_not_found("A").is_compile_error());
        assert!(Error::unordered("A", DataType::Bytes).is_compile_error());
        assert!(Error::domain(FunctionSide::Input, vec!["A".into()]).is_compile_error());
        assert!(!Error::domain(FunctionSide::Output, vec!["A".into()]).is_compile_error());
        assert!(!Error::invalid_schema("x").is_compile_error());
    }
}

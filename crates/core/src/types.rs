//! Data type definitions for relkit schemas.
//!
//! This module defines the value types a schema field can carry, together with the
//! capabilities (equality, total order) that predicate compilation checks against.

use core::fmt;

/// Supported field types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Boolean type (true/false)
    Boolean,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// 64-bit floating point number
    Float64,
    /// UTF-8 string
    String,
    /// Date and time stored as Unix timestamp (milliseconds)
    DateTime,
    /// Binary data
    Bytes,
}

impl DataType {
    /// Returns whether values of this type carry a total order.
    ///
    /// `Float64` is excluded because of NaN, `Bytes` because blobs are opaque.
    /// Ordering comparisons (`<`, `<=`, `>`, `>=`) over these types are rejected
    /// when a predicate is compiled.
    pub fn is_ordered(&self) -> bool {
        !matches!(self, DataType::Float64 | DataType::Bytes)
    }

    /// Returns whether values of this type can be compared for equality.
    pub fn is_equatable(&self) -> bool {
        true
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Boolean => "bool",
            DataType::Int32 => "i32",
            DataType::Int64 => "i64",
            DataType::Float64 => "f64",
            DataType::String => "string",
            DataType::DateTime => "datetime",
            DataType::Bytes => "bytes",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_data_type_equality() {
        assert_eq!(DataType::Int32, DataType::Int32);
        assert_ne!(DataType::Int32, DataType::Int64);
    }

    #[test]
    fn test_ordered() {
        assert!(DataType::Boolean.is_ordered());
        assert!(DataType::Int32.is_ordered());
        assert!(DataType::Int64.is_ordered());
        assert!(DataType::String.is_ordered());
        assert!(DataType::DateTime.is_ordered());
        assert!(!DataType::Float64.is_ordered());
        assert!(!DataType::Bytes.is_ordered());
    }

    #[test]
    fn test_equatable() {
        assert!(DataType::Float64.is_equatable());
        assert!(DataType::Bytes.is_equatable());
    }

    #[test]
    fn test_display() {
        assert_eq!(DataType::Int64.to_string(), "i64");
        assert_eq!(DataType::String.to_string(), "string");
    }
}

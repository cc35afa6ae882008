//! Attribute names.

use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;

/// The name of a field within a schema.
///
/// Attributes are unique within a schema and order lexicographically, which is the
/// order candidate keys and correspondences are kept in.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Attribute(String);

impl Attribute {
    /// Creates a new attribute.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the attribute name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Consumes the attribute, returning the owned name.
    pub fn into_name(self) -> String {
        self.0
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Attribute {
    fn from(name: &str) -> Self {
        Self(name.into())
    }
}

impl From<String> for Attribute {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&Attribute> for Attribute {
    fn from(attr: &Attribute) -> Self {
        attr.clone()
    }
}

impl AsRef<str> for Attribute {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Attribute {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn test_attribute_name() {
        let attr = Attribute::new("Foo");
        assert_eq!(attr.name(), "Foo");
        assert_eq!(attr.to_string(), "Foo");
        assert_eq!(attr.clone().into_name(), "Foo");
    }

    #[test]
    fn test_attribute_ordering() {
        let mut attrs: Vec<Attribute> = vec!["b".into(), "B".into(), "a".into()];
        attrs.sort();
        let names: Vec<&str> = attrs.iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["B", "a", "b"]);
    }
}

//! Field definition for relkit schemas.

use super::attribute::Attribute;
use crate::types::DataType;
use crate::value::Value;

/// One (attribute, type) entry of a schema.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    /// Field name.
    attribute: Attribute,
    /// Data type of the field.
    data_type: DataType,
}

impl Field {
    /// Creates a new field definition.
    pub fn new(attribute: impl Into<Attribute>, data_type: DataType) -> Self {
        Self {
            attribute: attribute.into(),
            data_type,
        }
    }

    /// Returns the field's attribute.
    #[inline]
    pub fn attribute(&self) -> &Attribute {
        &self.attribute
    }

    /// Returns the field name.
    #[inline]
    pub fn name(&self) -> &str {
        self.attribute.name()
    }

    /// Returns the data type.
    #[inline]
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Returns the value a freshly built tuple holds for this field.
    pub fn default_value(&self) -> Value {
        Value::default_for_type(self.data_type)
    }
}

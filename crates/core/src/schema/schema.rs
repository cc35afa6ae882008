//! Schema definition for relkit tuples.

use super::attribute::Attribute;
use super::field::Field;
use crate::error::{Error, Result};
use crate::types::DataType;
use alloc::format;
use alloc::vec::Vec;

/// The ordered (attribute, type) description of a tuple shape.
///
/// Positions are significant for field access; attribute names are unique.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    /// Creates a schema from the given fields, rejecting duplicate or malformed names.
    pub fn new(fields: Vec<Field>) -> Result<Self> {
        for (i, field) in fields.iter().enumerate() {
            check_naming_rules(field.name())?;
            if fields[..i].iter().any(|f| f.name() == field.name()) {
                return Err(Error::invalid_schema(format!(
                    "Attribute already exists: {}",
                    field.name()
                )));
            }
        }
        Ok(Self { fields })
    }

    /// Returns a builder for a new schema.
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Returns the fields in positional order.
    #[inline]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the number of fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the schema has no fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Gets the field at a position.
    pub fn field(&self, position: usize) -> Option<&Field> {
        self.fields.get(position)
    }

    /// Gets the position of an attribute by name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name() == name)
    }

    /// Returns true if the schema has an attribute with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Gets the data type of an attribute by name.
    pub fn data_type_of(&self, name: &str) -> Option<DataType> {
        self.fields
            .iter()
            .find(|f| f.name() == name)
            .map(Field::data_type)
    }

    /// Iterates over the attributes in positional order.
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> + '_ {
        self.fields.iter().map(Field::attribute)
    }

    /// Returns the attributes as a sorted set.
    pub fn attribute_set(&self) -> Vec<Attribute> {
        let mut attrs: Vec<Attribute> = self.attributes().cloned().collect();
        attrs.sort();
        attrs
    }

    /// Returns a schema holding only the named attributes, in the order given.
    pub fn project(&self, names: &[&str]) -> Result<Schema> {
        let mut fields = Vec::with_capacity(names.len());
        for name in names {
            let field = self
                .fields
                .iter()
                .find(|f| f.name() == *name)
                .ok_or_else(|| Error::attribute_not_found(*name))?;
            fields.push(field.clone());
        }
        Schema::new(fields)
    }
}

/// Attribute names are opaque; only the empty name is rejected.
fn check_naming_rules(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_schema("Name cannot be empty"));
    }
    Ok(())
}

/// Builder for creating schemas.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<Field>,
}

impl SchemaBuilder {
    /// Creates a new schema builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field to the schema.
    pub fn add_field(mut self, name: impl Into<Attribute>, data_type: DataType) -> Result<Self> {
        let attribute = name.into();
        check_naming_rules(attribute.name())?;
        if self.fields.iter().any(|f| f.attribute() == &attribute) {
            return Err(Error::invalid_schema(format!(
                "Attribute already exists: {}",
                attribute
            )));
        }
        self.fields.push(Field::new(attribute, data_type));
        Ok(self)
    }

    /// Builds the schema.
    pub fn build(self) -> Schema {
        Schema {
            fields: self.fields,
        }
    }
}

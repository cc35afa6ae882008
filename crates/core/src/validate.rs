//! Validation helpers for relational operators.
//!
//! Operators built on relkit accept containers of tuples and user functions whose
//! shapes are only checked at runtime. These helpers perform those checks and report
//! failures as [`Error`] values.

use crate::correspondence::escaping_attributes;
use crate::error::{ContainerKind, Error, FunctionSide, Result};
use crate::schema::{Attribute, Schema};
use alloc::string::String;
use alloc::vec::Vec;

/// The shape of a container passed to an operator: its kind and element type name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContainerDescriptor {
    /// Container kind.
    pub kind: ContainerKind,
    /// Element type name.
    pub element: String,
}

impl ContainerDescriptor {
    /// Creates a descriptor from a kind and an element type name.
    pub fn new(kind: ContainerKind, element: impl Into<String>) -> Self {
        Self {
            kind,
            element: element.into(),
        }
    }

    /// Describes a container of `T`.
    pub fn of<T: ?Sized>(kind: ContainerKind) -> Self {
        Self::new(kind, core::any::type_name::<T>())
    }
}

/// Checks that `found` is a container of `expected_kind` holding `expected_element`.
pub fn check_container(
    found: &ContainerDescriptor,
    expected_kind: ContainerKind,
    expected_element: &str,
) -> Result<()> {
    if found.kind != expected_kind {
        return Err(Error::container_shape(expected_kind, found.kind));
    }
    if found.element != expected_element {
        return Err(Error::element_type(expected_element, found.element.as_str()));
    }
    Ok(())
}

/// The declared shape of a map or group function: the schemas it takes and returns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FunctionSignature {
    /// Argument schemas.
    pub inputs: Vec<Schema>,
    /// Result schemas.
    pub outputs: Vec<Schema>,
}

impl FunctionSignature {
    /// Creates the signature of a one-in, one-out function.
    pub fn unary(input: Schema, output: Schema) -> Self {
        Self {
            inputs: alloc::vec![input],
            outputs: alloc::vec![output],
        }
    }
}

/// Checks that a function takes exactly one input and returns exactly one output.
pub fn check_arity(signature: &FunctionSignature) -> Result<()> {
    if signature.inputs.len() != 1 {
        return Err(Error::function_arity(
            FunctionSide::Input,
            1,
            signature.inputs.len(),
        ));
    }
    if signature.outputs.len() != 1 {
        return Err(Error::function_arity(
            FunctionSide::Output,
            1,
            signature.outputs.len(),
        ));
    }
    Ok(())
}

/// Checks a unary function against the schemas it will be applied to.
///
/// The declared input must be a subdomain of `input_schema` and the declared output
/// a subdomain of `output_schema`. Arity is checked first.
pub fn check_domains(
    signature: &FunctionSignature,
    input_schema: &Schema,
    output_schema: &Schema,
) -> Result<()> {
    check_arity(signature)?;
    check_subdomain(FunctionSide::Input, &signature.inputs[0], input_schema)?;
    check_subdomain(FunctionSide::Output, &signature.outputs[0], output_schema)
}

/// Checks that every attribute of `declared` is in `schema`.
pub fn check_subdomain(side: FunctionSide, declared: &Schema, schema: &Schema) -> Result<()> {
    let declared: Vec<&Attribute> = declared.attributes().collect();
    let available: Vec<&Attribute> = schema.attributes().collect();
    let escaping = escaping_attributes(&declared, &available);
    if escaping.is_empty() {
        Ok(())
    } else {
        Err(Error::domain(side, escaping))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuple::Tuple;
    use crate::types::DataType;
    use alloc::vec;

    fn schema(names: &[&str]) -> Schema {
        names
            .iter()
            .try_fold(Schema::builder(), |b, n| b.add_field(*n, DataType::Int64))
            .unwrap()
            .build()
    }

    #[test]
    fn test_check_container_ok() {
        let found = ContainerDescriptor::of::<Tuple>(ContainerKind::Sequence);
        assert!(check_container(
            &found,
            ContainerKind::Sequence,
            core::any::type_name::<Tuple>()
        )
        .is_ok());
    }

    #[test]
    fn test_check_container_shape() {
        let found = ContainerDescriptor::new(ContainerKind::Mapping, "Tuple");
        assert_eq!(
            check_container(&found, ContainerKind::Sequence, "Tuple"),
            Err(Error::container_shape(
                ContainerKind::Sequence,
                ContainerKind::Mapping
            ))
        );
    }

    #[test]
    fn test_check_container_element() {
        let found = ContainerDescriptor::new(ContainerKind::Channel, "Row");
        assert_eq!(
            check_container(&found, ContainerKind::Channel, "Tuple"),
            Err(Error::element_type("Tuple", "Row"))
        );
    }

    #[test]
    fn test_check_arity() {
        let ok = FunctionSignature::unary(schema(&["A"]), schema(&["B"]));
        assert!(check_arity(&ok).is_ok());

        let two_inputs = FunctionSignature {
            inputs: vec![schema(&["A"]), schema(&["B"])],
            outputs: vec![schema(&["C"])],
        };
        assert_eq!(
            check_arity(&two_inputs),
            Err(Error::function_arity(FunctionSide::Input, 1, 2))
        );

        let no_output = FunctionSignature {
            inputs: vec![schema(&["A"])],
            outputs: vec![],
        };
        assert_eq!(
            check_arity(&no_output),
            Err(Error::function_arity(FunctionSide::Output, 1, 0))
        );
    }

    #[test]
    fn test_check_domains() {
        let sig = FunctionSignature::unary(schema(&["A", "B"]), schema(&["C"]));
        assert!(check_domains(&sig, &schema(&["A", "B", "X"]), &schema(&["C", "D"])).is_ok());

        assert_eq!(
            check_domains(&sig, &schema(&["B"]), &schema(&["C"])),
            Err(Error::domain(FunctionSide::Input, vec!["A".into()]))
        );
        assert_eq!(
            check_domains(&sig, &schema(&["A", "B"]), &schema(&["D"])),
            Err(Error::domain(FunctionSide::Output, vec!["C".into()]))
        );
    }

    #[test]
    fn test_check_domains_checks_arity_first() {
        let sig = FunctionSignature::default();
        assert_eq!(
            check_domains(&sig, &schema(&["A"]), &schema(&["A"])),
            Err(Error::function_arity(FunctionSide::Input, 1, 0))
        );
    }
}

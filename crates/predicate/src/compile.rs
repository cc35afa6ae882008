//! Binding predicates to a schema.
//!
//! Compilation resolves every attribute name to a position and checks the
//! comparison capabilities of the bound types, so that evaluation is a plain walk
//! over positions that cannot fail.

use crate::ast::{AdHoc, Combinator, CompareOp, Comparison, Operand, Predicate};
use alloc::boxed::Box;
use alloc::vec::Vec;
use relkit_core::schema::{Attribute, Schema};
use relkit_core::validate::check_subdomain;
use relkit_core::{DataType, Error, FunctionSide, Result, Tuple, TupleAccess, Value};

/// A predicate bound to a schema.
///
/// Holds resolved positions only, never the schema itself. Evaluation does not
/// mutate it, so one compiled predicate can be shared across threads.
#[derive(Clone, Debug)]
pub struct CompiledPredicate {
    root: Node,
}

#[derive(Clone, Debug)]
enum Node {
    Constant(bool),
    Literal {
        position: usize,
        op: CompareOp,
        value: Value,
    },
    Attributes {
        left: usize,
        op: CompareOp,
        right: usize,
    },
    AdHoc {
        positions: Vec<usize>,
        adhoc: AdHoc,
    },
    And(Box<Node>, Box<Node>),
    Or(Box<Node>, Box<Node>),
    Xor(Box<Node>, Box<Node>),
    Not(Box<Node>),
}

impl Predicate {
    /// Binds this predicate to `schema`.
    ///
    /// Fails if an attribute is missing, if an ordering operator is applied to a type
    /// without a total order, if the two sides of a comparison have different types,
    /// or if an ad hoc function's shape is not a subdomain of `schema`.
    pub fn compile(&self, schema: &Schema) -> Result<CompiledPredicate> {
        let root = compile_node(self, schema)?;
        tracing::debug!(predicate = %self, width = schema.len(), "compiled predicate");
        Ok(CompiledPredicate { root })
    }
}

/// Binds `predicate` to `schema`.
pub fn compile(predicate: &Predicate, schema: &Schema) -> Result<CompiledPredicate> {
    predicate.compile(schema)
}

fn compile_node(predicate: &Predicate, schema: &Schema) -> Result<Node> {
    match predicate {
        Predicate::Constant(value) => Ok(Node::Constant(*value)),
        Predicate::Comparison(cmp) => compile_comparison(cmp, schema),
        Predicate::AdHoc(adhoc) => compile_ad_hoc(adhoc, schema),
        Predicate::Combinator(Combinator::And(l, r)) => Ok(Node::And(
            Box::new(compile_node(l, schema)?),
            Box::new(compile_node(r, schema)?),
        )),
        Predicate::Combinator(Combinator::Or(l, r)) => Ok(Node::Or(
            Box::new(compile_node(l, schema)?),
            Box::new(compile_node(r, schema)?),
        )),
        Predicate::Combinator(Combinator::Xor(l, r)) => Ok(Node::Xor(
            Box::new(compile_node(l, schema)?),
            Box::new(compile_node(r, schema)?),
        )),
        Predicate::Combinator(Combinator::Not(inner)) => {
            Ok(Node::Not(Box::new(compile_node(inner, schema)?)))
        }
    }
}

fn resolve(schema: &Schema, attr: &Attribute) -> Result<(usize, DataType)> {
    let position = schema
        .position(attr.name())
        .ok_or_else(|| Error::attribute_not_found(attr.name()))?;
    let data_type = schema
        .field(position)
        .map(|f| f.data_type())
        .ok_or_else(|| Error::attribute_not_found(attr.name()))?;
    Ok((position, data_type))
}

fn compile_comparison(cmp: &Comparison, schema: &Schema) -> Result<Node> {
    let (position, data_type) = resolve(schema, &cmp.lhs)?;
    if cmp.op.requires_order() && !data_type.is_ordered() {
        return Err(Error::unordered(cmp.lhs.name(), data_type));
    }

    match &cmp.rhs {
        Operand::Attribute(rhs) => {
            let (right, rhs_type) = resolve(schema, rhs)?;
            if rhs_type != data_type {
                return Err(Error::type_mismatch(rhs.name(), data_type, Some(rhs_type)));
            }
            Ok(Node::Attributes {
                left: position,
                op: cmp.op,
                right,
            })
        }
        Operand::Literal(value) => {
            match value.data_type() {
                Some(literal_type) if literal_type != data_type => {
                    return Err(Error::type_mismatch(
                        cmp.lhs.name(),
                        data_type,
                        Some(literal_type),
                    ));
                }
                // null only has meaning under equality
                None if cmp.op.requires_order() => {
                    return Err(Error::type_mismatch(cmp.lhs.name(), data_type, None));
                }
                _ => {}
            }
            Ok(Node::Literal {
                position,
                op: cmp.op,
                value: value.clone(),
            })
        }
    }
}

fn compile_ad_hoc(adhoc: &AdHoc, schema: &Schema) -> Result<Node> {
    check_subdomain(FunctionSide::Input, adhoc.domain(), schema)?;

    let mut positions = Vec::with_capacity(adhoc.domain().len());
    for field in adhoc.domain().fields() {
        let (position, data_type) = resolve(schema, field.attribute())?;
        if data_type != field.data_type() {
            return Err(Error::type_mismatch(
                field.name(),
                field.data_type(),
                Some(data_type),
            ));
        }
        positions.push(position);
    }
    Ok(Node::AdHoc {
        positions,
        adhoc: adhoc.clone(),
    })
}

impl CompiledPredicate {
    /// Evaluates the predicate against a tuple of the compiled schema's shape.
    ///
    /// Comparisons touching a position the tuple does not have are false.
    pub fn eval<T: TupleAccess>(&self, tuple: &T) -> bool {
        self.root.eval(tuple)
    }

    /// Keeps the tuples of `tuples` that satisfy the predicate.
    pub fn filter<'a, I>(&'a self, tuples: I) -> impl Iterator<Item = I::Item> + 'a
    where
        I: IntoIterator + 'a,
        I::IntoIter: 'a,
        I::Item: TupleAccess,
    {
        tuples.into_iter().filter(move |t| self.eval(t))
    }
}

impl Node {
    fn eval<T: TupleAccess>(&self, tuple: &T) -> bool {
        match self {
            Node::Constant(value) => *value,
            Node::Literal {
                position,
                op,
                value,
            } => tuple
                .field(*position)
                .map_or(false, |v| op.apply(&v, value)),
            Node::Attributes { left, op, right } => {
                match (tuple.field(*left), tuple.field(*right)) {
                    (Some(l), Some(r)) => op.apply(&l, &r),
                    _ => false,
                }
            }
            Node::AdHoc { positions, adhoc } => {
                Tuple::from_positions(tuple, positions).map_or(false, |t| adhoc.call(&t))
            }
            Node::And(l, r) => l.eval(tuple) && r.eval(tuple),
            Node::Or(l, r) => l.eval(tuple) || r.eval(tuple),
            Node::Xor(l, r) => {
                let left = l.eval(tuple);
                let right = r.eval(tuple);
                left != right
            }
            Node::Not(inner) => !inner.eval(tuple),
        }
    }
}

//! Tuple transformation through a field correspondence.
//!
//! These are the value-level halves of the update and join style operators: split a
//! tuple along a correspondence, merge two tuples back, and compare tuples on their
//! shared attributes only.

use crate::correspondence::FieldCorrespondence;
use crate::schema::Schema;
use crate::tuple::TupleAccess;
use alloc::vec;
use alloc::vec::Vec;

/// Splits `tuple` (of `left_schema`'s shape) into a left and a right tuple.
///
/// `correspondence` maps `left_schema` to `right_schema`. Shared attributes are routed
/// to the right tuple and reset to their type's default in the left one; attributes
/// only in `left_schema` keep their value on the left. Right positions without a
/// counterpart hold defaults.
///
/// Default-filled positions carry no meaning and must not be read as data. A value
/// the output type refuses in `set_field` also leaves the default in place.
pub fn partial_project<S, L, R>(
    tuple: &S,
    left_schema: &Schema,
    right_schema: &Schema,
    correspondence: &FieldCorrespondence,
) -> (L, R)
where
    S: TupleAccess,
    L: TupleAccess,
    R: TupleAccess,
{
    debug_assert!(in_range(correspondence, left_schema, right_schema));

    let shared = covered_positions(correspondence, left_schema.len());
    let mut right = R::with_defaults(right_schema);
    for entry in correspondence {
        if let Some(value) = tuple.field(entry.left) {
            right.set_field(entry.right, value.into_owned());
        }
    }

    let mut left = L::with_defaults(left_schema);
    for (pos, is_shared) in shared.into_iter().enumerate() {
        if is_shared {
            continue;
        }
        if let Some(value) = tuple.field(pos) {
            left.set_field(pos, value.into_owned());
        }
    }
    (left, right)
}

/// Builds a tuple of `target`'s shape from `left` and `right`.
///
/// `left` shares `target`'s layout. `correspondence` maps `target` to `right`: every
/// attribute it lists is taken from `right`, every other one from `left`. As with
/// [`partial_project`], a value `T` refuses in `set_field` leaves the default.
pub fn combine<L, R, T>(
    left: &L,
    right: &R,
    target: &Schema,
    correspondence: &FieldCorrespondence,
) -> T
where
    L: TupleAccess,
    R: TupleAccess,
    T: TupleAccess,
{
    debug_assert!(correspondence.iter().all(|e| e.left < target.len()));

    let covered = covered_positions(correspondence, target.len());
    let mut combined = T::with_defaults(target);
    for (pos, is_covered) in covered.into_iter().enumerate() {
        if is_covered {
            continue;
        }
        if let Some(value) = left.field(pos) {
            combined.set_field(pos, value.into_owned());
        }
    }
    for entry in correspondence {
        if let Some(value) = right.field(entry.right) {
            combined.set_field(entry.left, value.into_owned());
        }
    }
    combined
}

/// Returns true iff every corresponding pair of values is equal.
///
/// Stops at the first mismatch. A position missing from either tuple counts as a
/// mismatch.
pub fn partial_equals<A, B>(a: &A, b: &B, correspondence: &FieldCorrespondence) -> bool
where
    A: TupleAccess,
    B: TupleAccess,
{
    correspondence
        .iter()
        .all(|entry| match (a.field(entry.left), b.field(entry.right)) {
            (Some(x), Some(y)) => *x == *y,
            _ => false,
        })
}

/// Marks the left-hand positions of `correspondence` among `width` positions.
fn covered_positions(correspondence: &FieldCorrespondence, width: usize) -> Vec<bool> {
    let mut covered = vec![false; width];
    for entry in correspondence {
        if let Some(flag) = covered.get_mut(entry.left) {
            *flag = true;
        }
    }
    covered
}

fn in_range(correspondence: &FieldCorrespondence, left: &Schema, right: &Schema) -> bool {
    correspondence
        .iter()
        .all(|e| e.left < left.len() && e.right < right.len())
}

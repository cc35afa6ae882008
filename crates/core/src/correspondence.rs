//! Name-based field correspondence between two schemas.
//!
//! Join, rename and project operators need to know, for every attribute two schemas
//! share, where it lives in each of them. The correspondence is computed once per
//! schema pair and then consulted for every tuple, so it is kept as a name-sorted
//! array that is binary searched.

use crate::schema::{Attribute, Schema};
use crate::set::name_set;
use alloc::string::String;
use alloc::vec::Vec;

/// One shared attribute and its positions on each side.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Correspondence {
    /// The shared attribute name.
    pub attribute: Attribute,
    /// Position in the left (first) schema.
    pub left: usize,
    /// Position in the right (second) schema.
    pub right: usize,
}

/// The attributes two schemas share, by exact name, with their positions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldCorrespondence {
    entries: Vec<Correspondence>,
}

impl FieldCorrespondence {
    /// Builds the correspondence between `left` and `right`.
    ///
    /// Names are matched exactly; types are not consulted.
    pub fn build(left: &Schema, right: &Schema) -> Self {
        let mut entries = Vec::new();
        for (i, lf) in left.fields().iter().enumerate() {
            for (j, rf) in right.fields().iter().enumerate() {
                if lf.name() == rf.name() {
                    entries.push(Correspondence {
                        attribute: lf.attribute().clone(),
                        left: i,
                        right: j,
                    });
                }
            }
        }
        entries.sort_by(|a, b| a.attribute.cmp(&b.attribute));
        tracing::trace!(shared = entries.len(), "built field correspondence");
        Self { entries }
    }

    /// The correspondence of a schema with itself.
    pub fn identity(schema: &Schema) -> Self {
        Self::build(schema, schema)
    }

    /// Looks up a shared attribute by name.
    pub fn get(&self, name: &str) -> Option<&Correspondence> {
        self.entries
            .binary_search_by(|e| e.attribute.name().cmp(name))
            .ok()
            .map(|i| &self.entries[i])
    }

    /// Returns true if `name` is shared by both schemas.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the entries, sorted by attribute name.
    #[inline]
    pub fn entries(&self) -> &[Correspondence] {
        &self.entries
    }

    /// Iterates over the entries in name order.
    pub fn iter(&self) -> core::slice::Iter<'_, Correspondence> {
        self.entries.iter()
    }

    /// Iterates over the `(left, right)` position pairs in name order.
    pub fn position_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.entries.iter().map(|e| (e.left, e.right))
    }

    /// Returns the number of shared attributes.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the schemas share no attribute.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Swaps the left and right sides.
    pub fn reversed(&self) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|e| Correspondence {
                    attribute: e.attribute.clone(),
                    left: e.right,
                    right: e.left,
                })
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FieldCorrespondence {
    type Item = &'a Correspondence;
    type IntoIter = core::slice::Iter<'a, Correspondence>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Builds the correspondence between two schemas.
pub fn build_correspondence(a: &Schema, b: &Schema) -> FieldCorrespondence {
    FieldCorrespondence::build(a, b)
}

/// Returns true iff every attribute of `subset` appears in `attrs`.
pub fn is_subdomain<A, B>(subset: &[A], attrs: &[B]) -> bool
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let attrs = name_set(attrs);
    subset.iter().all(|a| attrs.contains(a.as_ref()))
}

/// Returns the attributes of `subset` missing from `attrs`, in `subset` order.
pub fn escaping_attributes<A, B>(subset: &[A], attrs: &[B]) -> Vec<String>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let attrs = name_set(attrs);
    subset
        .iter()
        .map(AsRef::as_ref)
        .filter(|a| !attrs.contains(a))
        .map(String::from)
        .collect()
}

//! Candidate key algebra.
//!
//! A candidate key is a minimal set of attributes whose values uniquely determine a
//! tuple within a relation. Relational operators recompute the key set of their
//! output from the key set of their input; they never edit one in place.
//!
//! Two key sets describe the same structure iff their canonical forms are equal:
//! attributes sorted within each key, keys sorted by cardinality and then by content.

use super::attribute::Attribute;
use super::schema::Schema;
use crate::error::{Error, Result};
use crate::set::name_set;
use alloc::vec::Vec;

/// The candidate keys of a relation.
///
/// An empty set means no uniqueness guarantee is known; duplicates must be assumed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CandidateKeys {
    keys: Vec<Vec<Attribute>>,
}

impl CandidateKeys {
    /// Creates an empty key set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a key set from attribute lists, keeping the given order.
    pub fn from_lists<I, K, A>(lists: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: IntoIterator<Item = A>,
        A: Into<Attribute>,
    {
        Self {
            keys: lists
                .into_iter()
                .map(|key| key.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Returns the keys.
    #[inline]
    pub fn keys(&self) -> &[Vec<Attribute>] {
        &self.keys
    }

    /// Returns the number of keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if no key is known.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the canonical form of this key set.
    pub fn canonicalize(&self) -> Self {
        let mut keys = self.keys.clone();
        for key in &mut keys {
            key.sort();
        }
        keys.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        Self { keys }
    }

    /// Drops every key that references a removed attribute.
    ///
    /// Surviving keys are kept as they are, in their original order. When every key
    /// is dropped the result is empty; no whole-schema key is inferred.
    pub fn restrict(&self, removed: &[Attribute]) -> Self {
        let removed = name_set(removed);
        let keys: Vec<Vec<Attribute>> = self
            .keys
            .iter()
            .filter(|key| !key.iter().any(|a| removed.contains(a.name())))
            .cloned()
            .collect();
        if keys.len() != self.keys.len() {
            tracing::debug!(
                dropped = self.keys.len() - keys.len(),
                remaining = keys.len(),
                "restricted candidate keys"
            );
        }
        Self { keys }
    }

    /// Renames attributes according to `(old, new)` pairs and canonicalizes the result.
    ///
    /// Attributes without a mapping keep their name.
    pub fn rename(&self, mapping: &[(Attribute, Attribute)]) -> Self {
        let keys = self
            .keys
            .iter()
            .map(|key| {
                key.iter()
                    .map(|attr| {
                        mapping
                            .iter()
                            .find(|(old, _)| old == attr)
                            .map_or_else(|| attr.clone(), |(_, new)| new.clone())
                    })
                    .collect()
            })
            .collect();
        Self { keys }.canonicalize()
    }

    /// Returns true if some key is contained in `attrs`.
    pub fn is_superkey(&self, attrs: &[Attribute]) -> bool {
        let attrs = name_set(attrs);
        self.keys
            .iter()
            .any(|key| key.iter().all(|a| attrs.contains(a.name())))
    }

    /// Checks that every key attribute exists in `schema`.
    pub fn validate_against(&self, schema: &Schema) -> Result<()> {
        for attr in self.keys.iter().flatten() {
            if !schema.contains(attr.name()) {
                return Err(Error::attribute_not_found(attr.name()));
            }
        }
        Ok(())
    }
}

/// Returns the canonical form of `keys`.
pub fn canonicalize(keys: &CandidateKeys) -> CandidateKeys {
    keys.canonicalize()
}

/// Returns the key used when none is supplied: every attribute of the schema, in
/// schema order.
///
/// The result is not canonicalized; call [`canonicalize`] before comparing it.
pub fn default_key(schema: &Schema) -> CandidateKeys {
    CandidateKeys {
        keys: alloc::vec![schema.attributes().cloned().collect()],
    }
}

/// Drops every key of `keys` that references an attribute in `removed`.
pub fn restrict_keys(keys: &CandidateKeys, removed: &[Attribute]) -> CandidateKeys {
    keys.restrict(removed)
}

/// Renames the attributes of `keys` by `(old, new)` pairs, returning the canonical form.
pub fn rename_keys(keys: &CandidateKeys, mapping: &[(Attribute, Attribute)]) -> CandidateKeys {
    keys.rename(mapping)
}

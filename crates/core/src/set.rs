//! Name sets used for membership tests.

#[cfg(feature = "hash-set")]
pub(crate) type NameSet<'a> = hashbrown::HashSet<&'a str>;

#[cfg(not(feature = "hash-set"))]
pub(crate) type NameSet<'a> = alloc::collections::BTreeSet<&'a str>;

/// Collects borrowed names into a set.
pub(crate) fn name_set<'a, I, S>(names: I) -> NameSet<'a>
where
    I: IntoIterator<Item = &'a S>,
    S: AsRef<str> + ?Sized + 'a,
{
    names.into_iter().map(|n| n.as_ref()).collect()
}

use ahash::AHasher;
use std::{
    collections::{hash_set, HashSet},
    fmt,
    hash::{Hash, Hasher},
};

/// An immutable set of elements.
///
/// Two subsets are equal iff they hold the same elements, and they hash
/// alike regardless of the order the elements were inserted in, so they
/// can serve as members of a set themselves.
#[derive(Clone)]
pub struct Subset<E> {
    elements: HashSet<E, ahash::RandomState>,
}

impl<E: Eq + Hash> Subset<E> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: HashSet::with_capacity_and_hasher(capacity, ahash::RandomState::new()),
        }
    }

    pub(crate) fn insert(&mut self, e: E) {
        self.elements.insert(e);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, e: &E) -> bool {
        self.elements.contains(e)
    }

    pub fn is_subset(&self, other: &Self) -> bool {
        self.elements.is_subset(&other.elements)
    }

    pub fn iter(&self) -> hash_set::Iter<'_, E> {
        self.elements.iter()
    }
}

impl<E: Eq + Hash + Clone> Subset<&E> {
    pub fn cloned(&self) -> Subset<E> {
        self.iter().map(|e| (*e).clone()).collect()
    }
}

impl<E: Eq + Hash> Default for Subset<E> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<E: Eq + Hash> PartialEq for Subset<E> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<E: Eq + Hash> Eq for Subset<E> {}

impl<E: Eq + Hash> Hash for Subset<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Wrapping sum of fixed-key element hashes is independent of iteration order.
        let digest = self.elements.iter().fold(0u64, |acc, e| {
            let mut h = AHasher::default();
            e.hash(&mut h);
            acc.wrapping_add(h.finish())
        });
        state.write_usize(self.elements.len());
        state.write_u64(digest);
    }
}

impl<E: Eq + Hash> FromIterator<E> for Subset<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut elements = HashSet::with_hasher(ahash::RandomState::new());
        elements.extend(iter);
        Self { elements }
    }
}

impl<E> IntoIterator for Subset<E> {
    type Item = E;
    type IntoIter = hash_set::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a Subset<E> {
    type Item = &'a E;
    type IntoIter = hash_set::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<E: fmt::Debug> fmt::Debug for Subset<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.elements.iter()).finish()
    }
}

impl<E: fmt::Display> fmt::Display for Subset<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, e) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{e}")?;
        }
        write!(f, "}}")
    }
}

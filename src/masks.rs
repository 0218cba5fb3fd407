use crate::{Config, Result, Subset};
use std::{hash::Hash, iter::FusedIterator};
use tracing::{debug, warn};

/// Yields every subset of a borrowed collection, one per mask.
///
/// Elements are indexed in the order the input iterator produces them; bit
/// `i` of a mask selects the `i`-th element. Masks are visited in ascending
/// order, so the first subset is always empty and the last is the whole
/// collection.
pub struct Subsets<'a, E> {
    whole: Vec<&'a E>,
    mask: u64,
    total: u64,
}

impl<'a, E: Eq + Hash> Subsets<'a, E> {
    pub fn new<I: Iterator<Item = &'a E>>(iter: I, config: &Config) -> Result<Self> {
        let whole: Vec<_> = iter.collect();
        let total = config.total_combinations(whole.len()).inspect_err(|_| {
            warn!(
                len = whole.len(),
                max = config.max_elements,
                "refusing to enumerate subsets"
            );
        })?;
        debug!(n = whole.len(), total, "enumerating subsets");
        Ok(Self {
            whole,
            mask: 0,
            total,
        })
    }

    /// Number of subsets this enumeration produces in total.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn mask_to_subset(&self, mask: u64) -> Subset<&'a E> {
        assert!(mask < self.total, "mask={mask} total={}", self.total);
        let mut res = Subset::with_capacity(mask.count_ones() as usize);
        for (i, e) in self.whole.iter().enumerate() {
            if (mask >> i) & 1 == 1 {
                res.insert(*e);
            }
        }
        res
    }
}

impl<'a, E: Eq + Hash> Iterator for Subsets<'a, E> {
    type Item = Subset<&'a E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask == self.total {
            return None;
        }
        let res = self.mask_to_subset(self.mask);
        self.mask += 1;
        Some(res)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.mask;
        match usize::try_from(remaining) {
            Ok(x) => (x, Some(x)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<E: Eq + Hash> ExactSizeIterator for Subsets<'_, E> {}

impl<E: Eq + Hash> FusedIterator for Subsets<'_, E> {}

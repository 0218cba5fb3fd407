use crate::{Config, Result, Subset, Subsets};
use std::{
    collections::{hash_set, HashSet},
    fmt,
    hash::{BuildHasher, Hash},
};

/// All subsets of some input set.
///
/// Holds exactly `2^n` distinct subsets for an input of `n` elements.
#[derive(Clone)]
pub struct PowerSet<E> {
    subsets: HashSet<Subset<E>, ahash::RandomState>,
}

impl<E: Eq + Hash> PowerSet<E> {
    pub fn len(&self) -> usize {
        self.subsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subsets.is_empty()
    }

    pub fn contains(&self, subset: &Subset<E>) -> bool {
        self.subsets.contains(subset)
    }

    pub fn iter(&self) -> hash_set::Iter<'_, Subset<E>> {
        self.subsets.iter()
    }
}

/// Computes every subset of `input`, including the empty set and `input`
/// itself, with the default [`Config`].
pub fn compute_all_subsets<E, S>(input: &HashSet<E, S>) -> Result<PowerSet<E>>
where
    E: Eq + Hash + Clone,
    S: BuildHasher,
{
    compute_all_subsets_with(input, &Config::default())
}

/// Like [`compute_all_subsets`], but bounded by `config.max_elements`.
///
/// Inputs that are too large are rejected before anything is enumerated.
pub fn compute_all_subsets_with<E, S>(
    input: &HashSet<E, S>,
    config: &Config,
) -> Result<PowerSet<E>>
where
    E: Eq + Hash + Clone,
    S: BuildHasher,
{
    let subsets = Subsets::new(input.iter(), config)?;
    let mut res = HashSet::with_capacity_and_hasher(subsets.len(), ahash::RandomState::new());
    for ss in subsets {
        res.insert(ss.cloned());
    }
    Ok(PowerSet { subsets: res })
}

impl<E: Eq + Hash> FromIterator<Subset<E>> for PowerSet<E> {
    fn from_iter<I: IntoIterator<Item = Subset<E>>>(iter: I) -> Self {
        let mut subsets = HashSet::with_hasher(ahash::RandomState::new());
        subsets.extend(iter);
        Self { subsets }
    }
}

impl<E: Eq + Hash> PartialEq for PowerSet<E> {
    fn eq(&self, other: &Self) -> bool {
        self.subsets == other.subsets
    }
}

impl<E: Eq + Hash> Eq for PowerSet<E> {}

impl<E> IntoIterator for PowerSet<E> {
    type Item = Subset<E>;
    type IntoIter = hash_set::IntoIter<Subset<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.subsets.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a PowerSet<E> {
    type Item = &'a Subset<E>;
    type IntoIter = hash_set::Iter<'a, Subset<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.subsets.iter()
    }
}

impl<E: fmt::Debug> fmt::Debug for PowerSet<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.subsets.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use quickcheck::Arbitrary;
    use quickcheck_macros::quickcheck;

    fn set_of(xs: &[i32]) -> HashSet<i32, ahash::RandomState> {
        xs.iter().copied().collect()
    }

    fn power_set_of(xss: &[&[i32]]) -> PowerSet<i32> {
        xss.iter().map(|xs| xs.iter().copied().collect()).collect()
    }

    #[test]
    fn empty_input() {
        let res = compute_all_subsets(&set_of(&[])).unwrap();
        assert_eq!(res, power_set_of(&[&[]]));
    }

    #[test]
    fn singleton() {
        let res = compute_all_subsets(&set_of(&[7])).unwrap();
        assert_eq!(res, power_set_of(&[&[], &[7]]));
    }

    #[test]
    fn pair() {
        let res = compute_all_subsets(&set_of(&[1, 2])).unwrap();
        assert_eq!(res, power_set_of(&[&[], &[1], &[2], &[1, 2]]));
    }

    #[test]
    fn triple() {
        let res = compute_all_subsets(&set_of(&[1, 2, 3])).unwrap();
        assert_eq!(
            res,
            power_set_of(&[&[], &[1], &[2], &[3], &[1, 2], &[1, 3], &[2, 3], &[1, 2, 3]])
        );
    }

    #[test]
    fn std_hasher_input() {
        let input: HashSet<&str> = ["x", "y"].into_iter().collect();
        let res = compute_all_subsets(&input).unwrap();
        assert_eq!(res.len(), 4);
        assert!(res.contains(&["y", "x"].into_iter().collect()));
    }

    #[test]
    fn input_is_untouched() {
        let input = set_of(&[1, 2, 3]);
        let before = input.clone();
        let _ = compute_all_subsets(&input).unwrap();
        assert_eq!(input, before);
    }

    #[test]
    fn too_large() {
        let input: HashSet<i32, ahash::RandomState> = (0..5).collect();
        let config = Config { max_elements: 4 };
        assert_eq!(
            compute_all_subsets_with(&input, &config),
            Err(Error::TooManyElements { len: 5, max: 4 })
        );
        let config = Config { max_elements: 5 };
        assert_eq!(compute_all_subsets_with(&input, &config).unwrap().len(), 32);
    }

    #[test]
    fn default_limit() {
        let input: HashSet<i32, ahash::RandomState> = (0..21).collect();
        assert_eq!(
            compute_all_subsets(&input),
            Err(Error::TooManyElements { len: 21, max: 20 })
        );
    }

    #[quickcheck]
    fn size_is_two_to_the_n(input: SmallSet) {
        let res = compute_all_subsets(&input.0).unwrap();
        assert_eq!(res.len(), 1 << input.0.len());
        assert!(!res.is_empty());
    }

    #[quickcheck]
    fn contains_empty_and_whole(input: SmallSet) {
        let res = compute_all_subsets(&input.0).unwrap();
        assert!(res.contains(&Subset::default()));
        assert!(res.contains(&input.0.iter().copied().collect()));
    }

    #[quickcheck]
    fn all_are_subsets(input: SmallSet) {
        let res = compute_all_subsets(&input.0).unwrap();
        for ss in res.iter() {
            assert!(ss.iter().all(|e| input.0.contains(e)), "{ss:?}");
        }
    }

    #[quickcheck]
    fn each_element_in_half(input: SmallSet) {
        let res = compute_all_subsets(&input.0).unwrap();
        for e in input.0.iter() {
            let with = res.iter().filter(|ss| ss.contains(e)).count();
            assert_eq!(with * 2, res.len(), "e={e}");
        }
    }

    #[quickcheck]
    fn indexing_order_is_irrelevant(input: SmallSet) {
        let mut forward: Vec<_> = input.0.iter().copied().collect();
        forward.sort();
        let backward: Vec<_> = forward.iter().rev().copied().collect();
        let by_order = |xs: &[u16]| -> PowerSet<u16> {
            Subsets::new(xs.iter(), &Config::default())
                .unwrap()
                .map(|ss| ss.cloned())
                .collect()
        };
        let res = compute_all_subsets(&input.0).unwrap();
        assert_eq!(by_order(&forward), res);
        assert_eq!(by_order(&backward), res);
    }

    #[derive(Debug, Clone)]
    struct SmallSet(HashSet<u16, ahash::RandomState>);

    impl Arbitrary for SmallSet {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            const N: usize = 9;

            let n: usize = usize::arbitrary(g) % N;
            let set = (0..n).map(|_| u16::arbitrary(g)).collect();
            Self(set)
        }
    }
}

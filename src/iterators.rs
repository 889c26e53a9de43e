//! Streaming enumeration of k-permutations in lexicographic order.
//!
//! The enumerator works without allocating new memory after
//! its initialisation.

use crate::combinatorics::{checked_arrangements, identity, validate};
use crate::error::Result;
use log::*;
use num::PrimInt;
use std::iter::FusedIterator;

/// Interface for streaming iterators.
///
/// Similarly as in the streaming-iterator crate, the elements yielded by the iterator
/// are borrowed by the iterator.
/// A loop on such an iterator `iter` is written as follows.
///```ignore
///while let Some(item) = iter.next() {
///    ...
///}
///```
pub trait StreamingIterator<A>
where
    A: ?Sized,
{
    /// Return the next value of the iterator.
    fn next(&mut self) -> Option<&A>;

    /// Consume the iterator and return the number of elements yielded.
    fn count(mut self) -> usize
    where
        Self: Sized,
    {
        let mut count = 0;
        while self.next().is_some() {
            count += 1;
        }
        count
    }
}

/// Iterator on the injections from `[k]` to `[n]` in lexicographic order
/// (the SEPA enumeration of `P(n,k)`).
///
/// The first `k` positions of `data` hold the current selection, the
/// remaining ones hold the unselected values in increasing order.
///
/// A `PartialPermutations` is single pass and owned by one caller.
/// Use [`Pnk`] to traverse the same `(n, k)` several times.
#[derive(Clone, Debug)]
pub struct PartialPermutations {
    n: usize,
    k: usize,
    data: Vec<usize>,
    result: Vec<usize>,
    edge: isize, // `n-2` for full permutations, `k-1` otherwise
    exhausted: bool,
}

impl PartialPermutations {
    /// Iterator on the injections from `[k]` to `[n]`.
    ///
    /// Fails if `n < 1` or `k` is not in `[0, n]`.
    pub fn new<T: PrimInt>(n: T, k: T) -> Result<Self> {
        let (n, k) = validate(n, k)?;
        Ok(Self::from_sizes(n, k))
    }

    /// Iterator on the permutations of `[n]`.
    pub fn permutation<T: PrimInt>(n: T) -> Result<Self> {
        Self::new(n, n)
    }

    // Sizes are assumed validated.
    fn from_sizes(n: usize, k: usize) -> Self {
        debug_assert!(1 <= n && k <= n);
        let edge = if k == n { n as isize - 2 } else { k as isize - 1 };
        debug!("Enumerating P({}, {})", n, k);
        Self {
            n,
            k,
            data: identity(n),
            result: vec![0; k],
            edge,
            exhausted: false,
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Pivot index precomputed at construction.
    ///
    /// It is not read by the successor step.
    pub fn edge(&self) -> isize {
        self.edge
    }

    /// Returns `false` once the last permutation has been returned by `step`.
    pub fn has_next(&self) -> bool {
        !self.exhausted
    }

    /// Copies the current selection into the result buffer, advances to
    /// the next one and returns the buffer.
    ///
    /// Once exhausted, every further call returns the last permutation again.
    /// The buffer is reused by the next call.
    pub fn step(&mut self) -> &[usize] {
        self.result.copy_from_slice(&self.data[..self.k]);
        if !self.exhausted {
            self.advance();
        }
        &self.result
    }

    /// Moves `data` to the lexicographically next selection.
    fn advance(&mut self) {
        let (n, k) = (self.n, self.k);
        if k == 0 {
            self.finish();
            return;
        }
        // Fast path: the smallest unselected value above the last selected one.
        let last = self.data[k - 1];
        let mut j = k;
        while j < n && self.data[j] < last {
            j += 1;
        }
        if j < n {
            self.data.swap(k - 1, j);
            return;
        }
        // `data[k-1..]` is now decreasing, roll the whole array.
        self.data[k..].reverse();
        let mut i = k - 1;
        loop {
            if i == 0 {
                self.finish();
                return;
            }
            i -= 1;
            if self.data[i] < self.data[i + 1] {
                break;
            }
        }
        let current = self.data[i];
        j = n - 1;
        while self.data[j] < current {
            j -= 1;
        }
        self.data.swap(i, j);
        self.data[i + 1..].reverse();
    }

    fn finish(&mut self) {
        trace!("P({}, {}) exhausted", self.n, self.k);
        self.exhausted = true;
    }

    /// Owning adapter yielding a fresh vector for each selection.
    pub fn snapshots(self) -> Snapshots {
        Snapshots(self)
    }
}

impl StreamingIterator<[usize]> for PartialPermutations {
    fn next(&mut self) -> Option<&[usize]> {
        if self.exhausted {
            None
        } else {
            Some(self.step())
        }
    }
}

/// Standard iterator over the selections of a [`PartialPermutations`],
/// each one returned as its own vector.
#[derive(Clone, Debug)]
pub struct Snapshots(PartialPermutations);

impl Iterator for Snapshots {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        StreamingIterator::next(&mut self.0).map(<[usize]>::to_vec)
    }
}

impl FusedIterator for Snapshots {}

/// Validated parameters of a `P(n,k)` enumeration.
///
/// Every call to [`Pnk::iter`] starts an independent traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pnk {
    n: usize,
    k: usize,
}

impl Pnk {
    /// Fails if `n < 1` or `k` is not in `[0, n]`.
    pub fn new<T: PrimInt>(n: T, k: T) -> Result<Self> {
        let (n, k) = validate(n, k)?;
        Ok(Self { n, k })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of selections, `n!/(n-k)!`, or `None` if it does not fit
    /// in a `usize`. The enumeration itself works either way.
    pub fn len(&self) -> Option<usize> {
        checked_arrangements(self.n, self.k)
    }

    /// Always false: even `k = 0` has one selection.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// A fresh enumerator.
    pub fn iter(&self) -> PartialPermutations {
        PartialPermutations::from_sizes(self.n, self.k)
    }
}

impl IntoIterator for &Pnk {
    type Item = Vec<usize>;
    type IntoIter = Snapshots;

    fn into_iter(self) -> Snapshots {
        self.iter().snapshots()
    }
}

///Tests
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn collect(mut iter: PartialPermutations) -> Vec<Vec<usize>> {
        let mut res = Vec::new();
        while let Some(p) = iter.next() {
            res.push(p.to_vec());
        }
        res
    }

    #[test]
    fn unit_counts() {
        assert_eq!(12, PartialPermutations::new(4, 2).unwrap().count());
        assert_eq!(60, PartialPermutations::new(5, 3).unwrap().count());
        assert_eq!(1, PartialPermutations::new(42, 0).unwrap().count());
        assert_eq!(720, PartialPermutations::permutation(6).unwrap().count());
        assert_eq!(1, PartialPermutations::permutation(1).unwrap().count());
        assert_eq!(7, PartialPermutations::new(7, 1).unwrap().count());
    }

    #[test]
    fn unit_full_permutations() {
        let perms = collect(PartialPermutations::new(3, 3).unwrap());
        assert_eq!(
            perms,
            [
                [0, 1, 2],
                [0, 2, 1],
                [1, 0, 2],
                [1, 2, 0],
                [2, 0, 1],
                [2, 1, 0]
            ]
        );
    }

    #[test]
    fn unit_partial_permutations() {
        let perms = collect(PartialPermutations::new(4, 2).unwrap());
        assert_eq!(
            perms,
            [
                [0, 1],
                [0, 2],
                [0, 3],
                [1, 0],
                [1, 2],
                [1, 3],
                [2, 0],
                [2, 1],
                [2, 3],
                [3, 0],
                [3, 1],
                [3, 2]
            ]
        );
    }

    #[test]
    fn unit_empty_selection() {
        let mut iter = PartialPermutations::new(3, 0).unwrap();
        assert!(iter.has_next());
        assert!(iter.step().is_empty());
        assert!(!iter.has_next());
        assert!(iter.step().is_empty());
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn unit_step_after_exhaustion() {
        let mut iter = PartialPermutations::new(2, 1).unwrap();
        assert_eq!(iter.step(), [0]);
        assert!(iter.has_next());
        assert_eq!(iter.step(), [1]);
        assert!(!iter.has_next());
        assert_eq!(iter.step(), [1]);
        assert_eq!(iter.step(), [1]);
        assert!(!iter.has_next());
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn unit_edge() {
        assert_eq!(PartialPermutations::new(5, 5).unwrap().edge(), 3);
        assert_eq!(PartialPermutations::new(5, 2).unwrap().edge(), 1);
        assert_eq!(PartialPermutations::new(5, 0).unwrap().edge(), -1);
        assert_eq!(PartialPermutations::new(1, 1).unwrap().edge(), -1);
    }

    #[test]
    fn unit_invalid() {
        assert_eq!(PartialPermutations::new(0, 0).unwrap_err(), Error::NoElements);
        assert_eq!(
            PartialPermutations::new(3, 4).unwrap_err(),
            Error::SelectionOutOfRange { n: 3, k: 4 }
        );
        assert_eq!(
            PartialPermutations::new(3, -1).unwrap_err(),
            Error::SelectionOutOfRange { n: 3, k: -1 }
        );
        assert!(Pnk::new(0, 0).is_err());
        assert!(Pnk::new(2, 3).is_err());
    }

    #[test]
    fn unit_pnk() {
        let pnk = Pnk::new(5, 3).unwrap();
        assert_eq!(pnk.len(), Some(60));
        assert_eq!(pnk.iter().count(), 60);
        let first: Vec<_> = pnk.into_iter().collect();
        let second: Vec<_> = (&pnk).into_iter().collect();
        assert_eq!(first.len(), 60);
        assert_eq!(first, second);
        assert_eq!(first[0], [0, 1, 2]);
        assert_eq!(first[59], [4, 3, 2]);
    }

    #[test]
    fn unit_pnk_len_too_large() {
        let pnk = Pnk::new(21, 21).unwrap();
        assert_eq!(pnk.len(), None);
        let mut iter = pnk.iter();
        assert_eq!(iter.step(), (0..21).collect::<Vec<usize>>());
        assert!(iter.has_next());
        let twenty = usize::try_from(2_432_902_008_176_640_000u64).ok();
        assert_eq!(Pnk::new(20u64, 20).unwrap().len(), twenty);
    }

    #[test]
    fn unit_pnk_len_matches_count() {
        let pnk = Pnk::new(9, 4).unwrap();
        let all: Vec<_> = pnk.into_iter().collect();
        assert_eq!(pnk.len(), Some(all.len()));
        assert_eq!(all.len(), 3024);
        assert!(all.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(all[3023], [8, 7, 6, 5]);
    }

    #[test]
    fn unit_snapshots_fused() {
        let mut iter = Pnk::new(1, 1).unwrap().iter().snapshots();
        assert_eq!(iter.next(), Some(vec![0]));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}

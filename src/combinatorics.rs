//! Counting and small helpers on permutations.
//!
//! In this page, `[n]` denotes the set `{0,1,...,n-1}`.
//!
//! A k-permutation of `[n]` (an injection from `[k]` to `[n]`) is represented
//! by a slice of length `k` holding distinct values of `[n]`.
use crate::error::{Error, Result};
use num::*;

/// Computes the product `start * ... * end`.
pub fn product<T>(start: T, end: T) -> T
where
    T: PrimInt,
{
    let mut res = T::one();
    for x in range(start, end + T::one()) {
        res = res * x;
    }
    res
}

/// Computes the product `start * ... * end`, or `None` on overflow.
pub fn checked_product<T>(start: T, end: T) -> Option<T>
where
    T: PrimInt,
{
    let mut res = T::one();
    for x in range_inclusive(start, end) {
        res = res.checked_mul(&x)?;
    }
    Some(res)
}

/// Returns the product of integers up to the given number.
pub fn factorial<T>(n: T) -> T
where
    T: PrimInt,
{
    product(T::one(), n)
}

/// Returns `P(n,k)`, the number of ordered selections of `k` distinct
/// elements among `n`, that is `n!/(n-k)!`.
pub fn arrangements<T>(n: T, k: T) -> T
where
    T: PrimInt,
{
    if k < T::zero() || k > n {
        return T::zero();
    }
    product(n - k + T::one(), n)
}

/// Same as `arrangements`, but returns `None` when `P(n,k)` does not fit in `T`.
pub fn checked_arrangements<T>(n: T, k: T) -> Option<T>
where
    T: PrimInt,
{
    if k < T::zero() || k > n {
        return Some(T::zero());
    }
    checked_product(n - k + T::one(), n)
}

/// Checks the parameters of a k-permutation enumeration and converts them
/// to sizes.
///
/// Fails if `n < 1` or if `k` is not in `[0, n]`.
pub fn validate<T>(n: T, k: T) -> Result<(usize, usize)>
where
    T: PrimInt,
{
    if n < T::one() {
        return Err(Error::NoElements);
    }
    let out_of_range = || Error::SelectionOutOfRange {
        n: n.to_i128().unwrap_or(i128::MAX),
        k: k.to_i128().unwrap_or(i128::MAX),
    };
    if k < T::zero() || k > n {
        return Err(out_of_range());
    }
    match (n.to_usize(), k.to_usize()) {
        (Some(n), Some(k)) => Ok((n, k)),
        _ => Err(out_of_range()),
    }
}

/// The identity permutation `[0, 1, ..., n-1]`.
pub fn identity(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// Tests whether `t` is an injection from `[t.len()]` to `[n]`.
pub fn is_injection(n: usize, t: &[usize]) -> bool {
    let mut seen = vec![false; n];
    for &v in t {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

//! Errors raised when an enumeration is set up with bad parameters.

use thiserror::Error;

/// Invalid arguments given to an enumerator or its factory.
///
/// Every variant is a rejected argument; there is no other kind of failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("at least one element required")]
    NoElements,
    #[error("k must satisfy 0 <= k <= n (got n = {n}, k = {k})")]
    SelectionOutOfRange { n: i128, k: i128 },
}

pub type Result<T> = std::result::Result<T, Error>;

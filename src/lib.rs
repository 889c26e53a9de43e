//!Lexicographic enumeration of the k-permutations of `n` elements,
//!`P(n,k) = n!/(n-k)!` of them, without storing the result set.
//!
//!The enumeration is the SEPA iterator generalised to partial permutations:
//!the selected prefix and the increasing reservoir of unselected values live
//!in one array that is updated in place.
//!
//!# Example
//!
//!```rust
//!use sepa_pnk::*;
//!
//!let pnk = Pnk::new(4, 2).unwrap();
//!
//!// Streaming: the yielded slice is reused by the next call.
//!let mut iter = pnk.iter();
//!let mut count = 0;
//!while let Some(p) = iter.next() {
//!    assert_eq!(p.len(), 2);
//!    count += 1;
//!}
//!assert_eq!(Some(count), pnk.len());
//!
//!// Owned: one vector per selection.
//!let all: Vec<Vec<usize>> = pnk.into_iter().collect();
//!assert_eq!(all.first().unwrap(), &[0, 1]);
//!assert_eq!(all.last().unwrap(), &[3, 2]);
//!```
//!

#![warn(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    //unused_qualifications,
    unused_labels,
    //unused_results
)]

pub mod benchmark;
pub use crate::benchmark::Benchmark;

pub mod combinatorics;

mod error;
pub use crate::error::*;

mod iterators;
pub use crate::iterators::*;

use log::LevelFilter;

fn init_log(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .parse_default_env()
        .try_init();
}

/// Log `info` and above to stderr, unless `RUST_LOG` says otherwise.
pub fn init_default_log() {
    init_log(LevelFilter::Info)
}

/// Log everything, including each exhausted enumeration.
pub fn init_debug_log() {
    init_log(LevelFilter::Trace)
}

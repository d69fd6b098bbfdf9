//! Signature comparison and the set difference between header and bindings.

pub mod comparator;
pub mod diff;

pub use comparator::{compare_signatures, MatchResult, SignatureComparator, SignatureMismatch};
pub use diff::{diff_signatures, DiffReport};

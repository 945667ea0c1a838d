//! Closure, key enumeration and attribute classification.
//!
//! Everything downstream builds on [`closure()`]: superkeys are subsets whose
//! closure is the whole schema, candidate keys are the smallest superkeys,
//! and prime attributes are those appearing in some candidate key.

pub mod attributes;
pub mod closure;
pub mod keys;
pub mod subsets;

pub use attributes::{classify, non_prime_attributes, prime_attributes};
pub use closure::{closure, is_superkey};
pub use keys::{all_superkeys, candidate_keys, subset_minimal_keys, KeyAnalysis};

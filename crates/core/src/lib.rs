//! Normal-form analysis for relational schemas.
//!
//! `nfcheck_core` takes a relation schema (a set of attributes and a list of
//! functional dependencies) and decides which of the classical normal forms
//! it satisfies, ordered from weakest to strongest:
//!
//! 1. **2NF** -- no non-prime attribute depends on part of a candidate key.
//! 2. **3NF** -- every dependency with a non-superkey determinant only
//!    determines prime attributes.
//! 3. **BCNF** -- every determinant is a superkey.
//!
//! All three are built on the same machinery: attribute closure (a fixpoint
//! over the dependency list), exhaustive superkey and candidate-key
//! enumeration, and the prime/non-prime split of the attributes.
//!
//! # Entry point
//!
//! Build a validated [`Schema`] and call [`Schema::analyze`], or use
//! [`analyze()`] to validate and analyze in one step. Single levels can be
//! checked with [`check()`].
//!
//! ```rust,ignore
//! use nfcheck_core::{analyze, FunctionalDependency};
//!
//! let analysis = analyze(
//!     ["A", "B", "C"],
//!     vec![FunctionalDependency::new(["A"], ["B"])],
//! )?;
//! assert_eq!(analysis.candidate_keys, vec![["A", "C"].into_iter().collect()]);
//! assert!(!analysis.second_normal_form.is_satisfied());
//! ```
//!
//! # Limitations
//!
//! Key enumeration walks the power set of the attributes, which bounds
//! practical schemas to about twenty attributes. Candidate keys are the
//! superkeys of minimum *size*; see [`dependency::keys`] for how this
//! differs from the classical subset-minimal definition.
//!
//! # Crate features
//!
//! - **`serde`** -- enables `Serialize`/`Deserialize` derives on core types.
//! - **`schemars`** -- enables `JsonSchema` derives (implies `serde`).
//!
//! This crate is `no_std` compatible (requires `alloc`). The schema text
//! parser lives in the separate `nfcheck_parser` crate.

#![cfg_attr(not(any(test, feature = "schemars")), no_std)]
extern crate alloc;

pub mod analysis;
pub mod dependency;
pub mod normal_form;
pub mod schema;

pub use analysis::{analyze, Analysis};
pub use normal_form::{check, NormalForm, Verdict, Violation};
pub use schema::{AttributeSet, FunctionalDependency, Schema, SchemaError};

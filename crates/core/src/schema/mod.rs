//! Relation schemas and functional dependencies.
//!
//! A [`Schema`] can only be built through [`Schema::new`], which rejects
//! empty relations, empty dependency sides and dependencies over unknown
//! attributes. Every algorithm in this crate takes a validated `Schema`, so
//! none of them can fail.

pub mod display;
pub mod error;
pub mod types;

pub use error::SchemaError;
pub use types::{Attribute, AttributeSet, FunctionalDependency, Schema};

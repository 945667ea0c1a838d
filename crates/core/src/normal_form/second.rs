//! Second normal form.
//!
//! A relation (assumed to be in 1NF) is in 2NF when no non-prime attribute
//! depends on a proper part of a candidate key.
//!
//! # Algorithm
//!
//! For each dependency `L -> R` in input order:
//!
//! 1. Skip it if `L` is a superkey. This covers `L` being a whole candidate
//!    key and keeps 2NF implied by 3NF for determinants that are superkeys
//!    without being size-minimal. A check that only skips candidate keys
//!    reports a 2NF violation for keys `{A}`, `{B}` with `A, B -> C`; this
//!    one does not, since `{A, B}` is a superkey.
//! 2. Skip it if `L` contains a non-prime attribute: it is then not built
//!    from key parts alone.
//! 3. Otherwise `L` consists only of prime attributes. The first non-prime
//!    attribute of `R`, if any, is a partial dependency and the check fails.

use super::violation::{Violation, ViolationCause};
use super::NormalForm;
use crate::dependency::KeyAnalysis;
use crate::schema::{Attribute, Schema};

/// Check 2NF against a precomputed key analysis.
///
/// # Errors
///
/// Returns the first [`Violation`] in dependency order.
pub fn evaluate<A>(schema: &Schema<A>, keys: &KeyAnalysis<A>) -> Result<(), Violation<A>>
where
    A: Attribute,
{
    for (index, fd) in schema.dependencies().iter().enumerate() {
        if keys.is_superkey(&fd.lhs) {
            tracing::trace!(index, "2NF: determinant is a key");
            continue;
        }
        if !fd.lhs.is_disjoint(&keys.non_prime) {
            tracing::trace!(index, "2NF: determinant has non-prime attributes");
            continue;
        }

        if let Some(attribute) = fd.rhs.iter().find(|a| keys.non_prime.contains(*a)) {
            tracing::debug!(index, ?attribute, "2NF: partial dependency");
            return Err(Violation {
                level: NormalForm::Second,
                index,
                dependency: fd.clone(),
                cause: ViolationCause::NonPrimeAttribute(attribute.clone()),
            });
        }
    }

    tracing::debug!("2NF: passed");
    Ok(())
}

/// Check whether a schema is in second normal form.
///
/// # Errors
///
/// Returns the first [`Violation`] in dependency order.
pub fn check_second_normal_form<A>(schema: &Schema<A>) -> Result<(), Violation<A>>
where
    A: Attribute,
{
    evaluate(schema, &KeyAnalysis::new(schema))
}

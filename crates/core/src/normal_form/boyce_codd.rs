//! Boyce-Codd normal form.
//!
//! A relation is in BCNF when the left-hand side of every dependency is a
//! superkey. Trivial dependencies are not exempt: a declared `A, B -> A`
//! with a non-superkey `{A, B}` is a violation.

use super::violation::{Violation, ViolationCause};
use super::NormalForm;
use crate::dependency::KeyAnalysis;
use crate::schema::{Attribute, Schema};

/// Check BCNF against a precomputed key analysis.
///
/// # Errors
///
/// Returns the first [`Violation`] in dependency order.
pub fn evaluate<A>(schema: &Schema<A>, keys: &KeyAnalysis<A>) -> Result<(), Violation<A>>
where
    A: Attribute,
{
    if let Some((index, fd)) = schema
        .dependencies()
        .iter()
        .enumerate()
        .find(|(_, fd)| !keys.is_superkey(&fd.lhs))
    {
        tracing::debug!(index, "BCNF: determinant is not a superkey");
        return Err(Violation {
            level: NormalForm::BoyceCodd,
            index,
            dependency: fd.clone(),
            cause: ViolationCause::NonSuperkeyDeterminant,
        });
    }

    tracing::debug!("BCNF: passed");
    Ok(())
}

/// Check whether a schema is in Boyce-Codd normal form.
///
/// # Errors
///
/// Returns the first [`Violation`] in dependency order.
pub fn check_boyce_codd_normal_form<A>(schema: &Schema<A>) -> Result<(), Violation<A>>
where
    A: Attribute,
{
    evaluate(schema, &KeyAnalysis::new(schema))
}

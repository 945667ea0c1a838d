//! Third normal form.
//!
//! A relation is in 3NF when, for every dependency `L -> R` whose `L` is not
//! a superkey, every attribute of `R` is prime.

use super::violation::{Violation, ViolationCause};
use super::NormalForm;
use crate::dependency::KeyAnalysis;
use crate::schema::{Attribute, Schema};

/// Check 3NF against a precomputed key analysis.
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
            continue;
        }

        if let Some(attribute) = fd.rhs.iter().find(|a| keys.non_prime.contains(*a)) {
            tracing::debug!(index, ?attribute, "3NF: non-prime attribute behind non-superkey");
            return Err(Violation {
                level: NormalForm::Third,
                index,
                dependency: fd.clone(),
                cause: ViolationCause::NonPrimeAttribute(attribute.clone()),
            });
        }
    }

    tracing::debug!("3NF: passed");
    Ok(())
}

/// Check whether a schema is in third normal form.
///
/// # Errors
///
/// Returns the first [`Violation`] in dependency order.
pub fn check_third_normal_form<A>(schema: &Schema<A>) -> Result<(), Violation<A>>
where
    A: Attribute,
{
    evaluate(schema, &KeyAnalysis::new(schema))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FunctionalDependency;

    #[test]
    fn test_transitive_dependency_violates() {
        let schema = Schema::new(
            ["A", "B", "C"],
            vec![
                FunctionalDependency::new(["A"], ["B"]),
                FunctionalDependency::new(["B"], ["C"]),
            ],
        )
        .expect("valid schema");

        let violation = check_third_normal_form(&schema).expect_err("not 3NF");
        assert_eq!(violation.level, NormalForm::Third);
        assert_eq!(violation.index, 1);
        assert_eq!(violation.cause, ViolationCause::NonPrimeAttribute("C"));
    }

    #[test]
    fn test_prime_dependent_is_allowed() {
        // Keys {A, B} and {A, C}: C -> B only determines a prime attribute.
        let schema = Schema::new(
            ["A", "B", "C"],
            vec![
                FunctionalDependency::new(["A", "B"], ["C"]),
                FunctionalDependency::new(["C"], ["B"]),
            ],
        )
        .expect("valid schema");
        assert!(check_third_normal_form(&schema).is_ok());
    }
}

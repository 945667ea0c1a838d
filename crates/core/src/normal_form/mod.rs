use core::fmt::{Display, Formatter};

use crate::dependency::KeyAnalysis;
use crate::schema::{Attribute, Schema};

pub mod boyce_codd;
pub mod second;
pub mod third;
pub mod violation;

pub use boyce_codd::check_boyce_codd_normal_form;
pub use second::check_second_normal_form;
pub use third::check_third_normal_form;
pub use violation::{Verdict, Violation, ViolationCause};

/// Normal forms checked by nfcheck, ordered from weakest to strongest.
///
/// First normal form is a precondition supplied by the caller and is never
/// checked. Each listed level implies the weaker ones:
/// BCNF ⟹ 3NF ⟹ 2NF.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NormalForm {
    /// No non-prime attribute depends on part of a candidate key.
    Second,
    /// No non-prime attribute depends on a non-superkey.
    Third,
    /// Every determinant is a superkey.
    BoyceCodd,
}

impl NormalForm {
    /// All levels, weakest first.
    pub const ALL: [Self; 3] = [Self::Second, Self::Third, Self::BoyceCodd];
}

impl Display for NormalForm {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Second => "2NF",
            Self::Third => "3NF",
            Self::BoyceCodd => "BCNF",
        })
    }
}

/// Check whether a schema satisfies the given normal form.
///
/// Computes the schema's keys from scratch. To check several levels over
/// the same schema, build a [`KeyAnalysis`] once and call
/// [`check_with_keys`], or use [`Schema::analyze`](crate::Schema::analyze).
///
/// # Errors
///
/// Returns the first [`Violation`] in dependency order.
pub fn check<A>(schema: &Schema<A>, level: NormalForm) -> Result<(), Violation<A>>
where
    A: Attribute,
{
    check_with_keys(schema, &KeyAnalysis::new(schema), level)
}

/// [`check`] against a precomputed key analysis.
///
/// # Errors
///
/// Returns the first [`Violation`] in dependency order.
pub fn check_with_keys<A>(
    schema: &Schema<A>,
    keys: &KeyAnalysis<A>,
    level: NormalForm,
) -> Result<(), Violation<A>>
where
    A: Attribute,
{
    tracing::debug!(
        dependencies = schema.dependencies().len(),
        %level,
        "checking normal form"
    );

    match level {
        NormalForm::Second => second::evaluate(schema, keys),
        NormalForm::Third => third::evaluate(schema, keys),
        NormalForm::BoyceCodd => boyce_codd::evaluate(schema, keys),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_form_order_and_display() {
        assert!(NormalForm::Second < NormalForm::Third);
        assert!(NormalForm::Third < NormalForm::BoyceCodd);
        assert_eq!(NormalForm::BoyceCodd.to_string(), "BCNF");
        assert_eq!(NormalForm::ALL.len(), 3);
    }
}

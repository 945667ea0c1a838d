use alloc::vec::Vec;

use crate::dependency::KeyAnalysis;
use crate::normal_form::{check_with_keys, NormalForm, Verdict};
use crate::schema::{Attribute, AttributeSet, FunctionalDependency, Schema, SchemaError};

/// Everything nfcheck derives from one schema.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "A: ::serde::Deserialize<'de> + Ord"))
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis<A> {
    pub candidate_keys: Vec<AttributeSet<A>>,
    pub prime_attributes: AttributeSet<A>,
    pub non_prime_attributes: AttributeSet<A>,
    pub second_normal_form: Verdict<A>,
    pub third_normal_form: Verdict<A>,
    pub boyce_codd_normal_form: Verdict<A>,
}

impl<A> Analysis<A> {
    #[must_use]
    pub const fn verdict(&self, level: NormalForm) -> &Verdict<A> {
        match level {
            NormalForm::Second => &self.second_normal_form,
            NormalForm::Third => &self.third_normal_form,
            NormalForm::BoyceCodd => &self.boyce_codd_normal_form,
        }
    }

    /// Strongest level satisfied together with every weaker level.
    ///
    /// `None` means the relation is only known to be in 1NF.
    #[must_use]
    pub fn highest_normal_form(&self) -> Option<NormalForm> {
        NormalForm::ALL
            .into_iter()
            .take_while(|level| self.verdict(*level).is_satisfied())
            .last()
    }
}

impl<A> Schema<A>
where
    A: Attribute,
{
    /// Compute keys, attribute classes and all three normal-form verdicts.
    ///
    /// Superkeys are enumerated once and shared by every predicate.
    #[must_use]
    pub fn analyze(&self) -> Analysis<A> {
        tracing::debug!(
            attributes = self.arity(),
            dependencies = self.dependencies().len(),
            "analyzing schema"
        );

        let keys = KeyAnalysis::new(self);
        let verdict = |level| Verdict::from(check_with_keys(self, &keys, level));

        let second_normal_form = verdict(NormalForm::Second);
        let third_normal_form = verdict(NormalForm::Third);
        let boyce_codd_normal_form = verdict(NormalForm::BoyceCodd);

        Analysis {
            candidate_keys: keys.candidate_keys,
            prime_attributes: keys.prime,
            non_prime_attributes: keys.non_prime,
            second_normal_form,
            third_normal_form,
            boyce_codd_normal_form,
        }
    }
}

/// Validate `(attributes, dependencies)` and analyze it.
///
/// # Errors
///
/// Returns [`SchemaError`] if the input is not a valid schema; no analysis is
/// attempted in that case.
pub fn analyze<A>(
    attributes: impl IntoIterator<Item = A>,
    dependencies: Vec<FunctionalDependency<A>>,
) -> Result<Analysis<A>, SchemaError<A>>
where
    A: Attribute,
{
    Schema::new(attributes, dependencies).map(|schema| schema.analyze())
}

//! Superkey and candidate-key enumeration.
//!
//! Every operation here is an exhaustive search over subsets of the schema's
//! attributes, so the cost is `O(2^|R| · |R| · |FDS|)`. Schemas beyond about
//! twenty attributes are impractical; a warning is logged when one is
//! analyzed.
//!
//! # Candidate keys
//!
//! A candidate key here is a superkey of *globally minimum* cardinality: the
//! search stops at the first subset size that yields any superkey and returns
//! every superkey of that size. The classical definition (a superkey with no
//! superkey as a proper subset) admits keys of different sizes in one
//! schema; those larger keys are not candidate keys under this definition.
//! [`subset_minimal_keys`] computes the classical set so callers can report
//! the difference.

use alloc::vec::Vec;

use hashbrown::HashSet;

use super::attributes::classify;
use super::closure::is_superkey;
use super::subsets::{power_set, Combinations};
use crate::schema::{Attribute, AttributeSet, Schema};

/// Arity above which exhaustive key search is considered impractical.
pub const PRACTICAL_ARITY_LIMIT: usize = 20;

fn warn_if_large<A>(schema: &Schema<A>)
where
    A: Attribute,
{
    if schema.arity() > PRACTICAL_ARITY_LIMIT {
        tracing::warn!(
            attributes = schema.arity(),
            limit = PRACTICAL_ARITY_LIMIT,
            "exhaustive key search over a large schema"
        );
    }
}

/// Every subset of the schema's attributes whose closure is the whole schema.
///
/// Subsets come out by non-decreasing size, then in attribute order.
#[must_use]
pub fn all_superkeys<A>(schema: &Schema<A>) -> Vec<AttributeSet<A>>
where
    A: Attribute,
{
    warn_if_large(schema);
    let universe: Vec<A> = schema.attributes().iter().cloned().collect();

    let superkeys: Vec<_> = power_set(&universe)
        .filter(|subset| is_superkey(schema, subset))
        .collect();

    tracing::debug!(superkeys = superkeys.len(), "superkeys enumerated");
    superkeys
}

/// All superkeys of the smallest size at which any superkey exists.
///
/// Never empty for a valid schema: the full attribute set is always a
/// superkey.
#[must_use]
pub fn candidate_keys<A>(schema: &Schema<A>) -> Vec<AttributeSet<A>>
where
    A: Attribute,
{
    warn_if_large(schema);
    let universe: Vec<A> = schema.attributes().iter().cloned().collect();

    for size in 0..=universe.len() {
        let keys: Vec<_> = Combinations::new(&universe, size)
            .filter(|subset| is_superkey(schema, subset))
            .collect();
        if !keys.is_empty() {
            tracing::debug!(size, keys = keys.len(), "candidate keys found");
            return keys;
        }
    }

    // Unreachable for a validated schema.
    Vec::new()
}

/// Superkeys none of whose proper subsets is a superkey.
///
/// Always a superset of [`candidate_keys`]. Supersets of already found keys
/// are skipped without computing their closure.
#[must_use]
pub fn subset_minimal_keys<A>(schema: &Schema<A>) -> Vec<AttributeSet<A>>
where
    A: Attribute,
{
    warn_if_large(schema);
    let universe: Vec<A> = schema.attributes().iter().cloned().collect();

    let mut keys: Vec<AttributeSet<A>> = Vec::new();
    for subset in power_set(&universe) {
        if keys.iter().any(|key| key.is_subset(&subset)) {
            continue;
        }
        if is_superkey(schema, &subset) {
            keys.push(subset);
        }
    }
    keys
}

/// Key structure of a schema, computed once and shared by the normal-form
/// predicates.
#[derive(Debug, Clone)]
pub struct KeyAnalysis<A>
where
    A: Attribute,
{
    pub candidate_keys: Vec<AttributeSet<A>>,
    pub superkeys: HashSet<AttributeSet<A>>,
    pub prime: AttributeSet<A>,
    pub non_prime: AttributeSet<A>,
}

impl<A> KeyAnalysis<A>
where
    A: Attribute,
{
    /// Enumerate superkeys once and derive candidate keys and the
    /// prime/non-prime split from them.
    #[must_use]
    pub fn new(schema: &Schema<A>) -> Self {
        let superkeys = all_superkeys(schema);

        // Superkeys arrive by non-decreasing size, so the first one has the
        // minimum key size and the candidate keys keep enumeration order.
        let key_size = superkeys.first().map_or(0, AttributeSet::len);
        let candidate_keys: Vec<_> = superkeys
            .iter()
            .take_while(|superkey| superkey.len() == key_size)
            .cloned()
            .collect();

        let (prime, non_prime) = classify(schema, &candidate_keys);

        tracing::debug!(
            candidate_keys = candidate_keys.len(),
            key_size,
            prime = prime.len(),
            non_prime = non_prime.len(),
            "key analysis complete"
        );

        Self {
            candidate_keys,
            superkeys: superkeys.into_iter().collect(),
            prime,
            non_prime,
        }
    }

    #[must_use]
    pub fn is_superkey(&self, attributes: &AttributeSet<A>) -> bool {
        self.superkeys.contains(attributes)
    }

    #[must_use]
    pub fn is_candidate_key(&self, attributes: &AttributeSet<A>) -> bool {
        self.candidate_keys.contains(attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FunctionalDependency;

    fn set(attributes: &[&'static str]) -> AttributeSet<&'static str> {
        attributes.iter().copied().collect()
    }

    fn schema(
        attributes: &[&'static str],
        fds: &[(&[&'static str], &[&'static str])],
    ) -> Schema<&'static str> {
        Schema::new(
            attributes.iter().copied(),
            fds.iter()
                .map(|(lhs, rhs)| {
                    FunctionalDependency::new(lhs.iter().copied(), rhs.iter().copied())
                })
                .collect(),
        )
        .expect("valid schema")
    }

    #[test]
    fn test_no_dependencies_whole_schema_is_key() {
        let s = schema(&["A", "B", "C"], &[]);
        assert_eq!(candidate_keys(&s), vec![set(&["A", "B", "C"])]);
        assert_eq!(all_superkeys(&s), vec![set(&["A", "B", "C"])]);
    }

    #[test]
    fn test_mutual_dependency_two_keys() {
        let s = schema(&["A", "B"], &[(&["A"], &["B"]), (&["B"], &["A"])]);
        assert_eq!(candidate_keys(&s), vec![set(&["A"]), set(&["B"])]);
        assert_eq!(
            all_superkeys(&s),
            vec![set(&["A"]), set(&["B"]), set(&["A", "B"])]
        );
    }

    #[test]
    fn test_size_minimum_hides_larger_minimal_key() {
        // {A} and {B, C} are both subset-minimal keys; only {A} has the
        // minimum size.
        let s = schema(
            &["A", "B", "C", "D"],
            &[
                (&["A"], &["B", "C", "D"]),
                (&["B", "C"], &["A"]),
            ],
        );
        assert_eq!(candidate_keys(&s), vec![set(&["A"])]);
        assert_eq!(subset_minimal_keys(&s), vec![set(&["A"]), set(&["B", "C"])]);
    }

    #[test]
    fn test_key_analysis_matches_free_functions() {
        let s = schema(
            &["A", "B", "C", "D"],
            &[(&["A", "B"], &["C"]), (&["C"], &["D"]), (&["D"], &["A"])],
        );
        let keys = KeyAnalysis::new(&s);
        assert_eq!(keys.candidate_keys, candidate_keys(&s));
        assert_eq!(keys.superkeys.len(), all_superkeys(&s).len());
        assert!(keys.is_candidate_key(&set(&["A", "B"])));
        assert!(keys.is_superkey(&set(&["A", "B", "C"])));
        assert!(!keys.is_candidate_key(&set(&["A", "B", "C"])));
        assert!(!keys.is_superkey(&set(&["C", "D"])));
    }
}

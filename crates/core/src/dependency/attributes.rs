//! Prime and non-prime attribute classification.

use crate::schema::{Attribute, AttributeSet, Schema};

use super::keys::candidate_keys;

/// Split the schema's attributes into `(prime, non_prime)` given its
/// candidate keys.
#[must_use]
pub fn classify<A>(
    schema: &Schema<A>,
    candidate_keys: &[AttributeSet<A>],
) -> (AttributeSet<A>, AttributeSet<A>)
where
    A: Attribute,
{
    let prime: AttributeSet<A> = candidate_keys.iter().flatten().cloned().collect();
    let non_prime = schema.attributes().difference(&prime).cloned().collect();
    (prime, non_prime)
}

/// Attributes that belong to at least one candidate key.
#[must_use]
pub fn prime_attributes<A>(schema: &Schema<A>) -> AttributeSet<A>
where
    A: Attribute,
{
    classify(schema, &candidate_keys(schema)).0
}

/// Attributes that belong to no candidate key.
#[must_use]
pub fn non_prime_attributes<A>(schema: &Schema<A>) -> AttributeSet<A>
where
    A: Attribute,
{
    classify(schema, &candidate_keys(schema)).1
}

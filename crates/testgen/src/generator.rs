use std::collections::BTreeSet;

use nfcheck_core::{FunctionalDependency, Schema};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, Default, PartialEq, Eq, TypedBuilder)]
pub struct SchemaParams {
    #[builder(default)]
    pub id: u64,
    pub n_attribute: usize,
    pub n_dependency: usize,
    /// Upper bound on determinant size.
    #[builder(default = 2)]
    pub max_lhs: usize,
    /// Upper bound on dependent size.
    #[builder(default = 1)]
    pub max_rhs: usize,
    /// Fixed seed for reproducible output; drawn from the thread RNG if unset.
    #[builder(default, setter(strip_option))]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct GeneratedSchema {
    params: SchemaParams,
    seed: u64,
    schema: Schema<String>,
}

impl GeneratedSchema {
    #[must_use]
    pub const fn get_id(&self) -> u64 {
        self.params.id
    }

    #[must_use]
    pub const fn get_params(&self) -> &SchemaParams {
        &self.params
    }

    /// Seed that reproduces this schema.
    #[must_use]
    pub const fn get_seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub const fn get_schema(&self) -> &Schema<String> {
        &self.schema
    }

    #[must_use]
    pub fn into_schema(self) -> Schema<String> {
        self.schema
    }
}

/// Attribute name for position `i`: `A`..`Z`, then `A1`..`Z1`, and so on.
#[must_use]
pub fn attribute_name(i: usize) -> String {
    let letter = char::from(b'A' + u8::try_from(i % 26).unwrap_or_default());
    match i / 26 {
        0 => letter.to_string(),
        round => format!("{letter}{round}"),
    }
}

/// Pick `k` distinct positions out of `0..n`, ascending.
fn sample_positions(rng: &mut StdRng, n: usize, k: usize) -> BTreeSet<usize> {
    let mut picked = BTreeSet::new();
    while picked.len() < k.min(n) {
        picked.insert(rng.random_range(0..n));
    }
    picked
}

/// Generate a single random schema.
///
/// # Shape
///
/// The schema has `n_attribute` attributes named by [`attribute_name`] and
/// up to `n_dependency` dependencies. Each determinant has between one and
/// `max_lhs` attributes; each dependent has between one and `max_rhs`
/// attributes drawn from outside the determinant, so no dependency is
/// trivial. A dependency whose determinant covers every attribute is
/// dropped, which is the only way fewer than `n_dependency` come out.
///
/// Every generated schema is valid: attributes are non-empty and every
/// dependency only mentions declared attributes.
#[must_use]
pub fn generate_single_schema(params: &SchemaParams) -> GeneratedSchema {
    let seed = params.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);

    let n = params.n_attribute.max(1);
    let names: Vec<String> = (0..n).map(attribute_name).collect();

    let dependencies = (0..params.n_dependency)
        .filter_map(|_| {
            let lhs_size = rng.random_range(1..=params.max_lhs.clamp(1, n));
            let lhs = sample_positions(&mut rng, n, lhs_size);

            let free: Vec<usize> = (0..n).filter(|i| !lhs.contains(i)).collect();
            if free.is_empty() {
                return None;
            }
            let rhs_size = rng.random_range(1..=params.max_rhs.clamp(1, free.len()));
            let rhs = sample_positions(&mut rng, free.len(), rhs_size);

            Some(FunctionalDependency::new(
                lhs.into_iter().map(|i| names[i].clone()),
                rhs.into_iter().map(|i| names[free[i]].clone()),
            ))
        })
        .collect();

    let schema = match Schema::new(names, dependencies) {
        Ok(schema) => schema,
        Err(err) => unreachable!("generated schema failed validation: {err}"),
    };

    GeneratedSchema {
        params: params.clone(),
        seed,
        schema,
    }
}

/// Generate `n_schema` schemas in parallel.
///
/// Schema `i` gets id `i`; with a fixed seed it is generated from
/// `seed + i`, so batches are reproducible regardless of thread scheduling.
#[must_use]
pub fn generate_mult_schemas(n_schema: u64, params: &SchemaParams) -> Vec<GeneratedSchema> {
    (0..n_schema)
        .into_par_iter()
        .map(|id| {
            let params = SchemaParams {
                id,
                seed: params.seed.map(|seed| seed.wrapping_add(id)),
                ..params.clone()
            };
            generate_single_schema(&params)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_names() {
        assert_eq!(attribute_name(0), "A");
        assert_eq!(attribute_name(25), "Z");
        assert_eq!(attribute_name(26), "A1");
        assert_eq!(attribute_name(53), "B2");
    }

    #[test]
    fn test_seed_is_reproducible() {
        let params = SchemaParams::builder()
            .n_attribute(6)
            .n_dependency(5)
            .max_rhs(2)
            .seed(7)
            .build();
        let first = generate_single_schema(&params);
        let second = generate_single_schema(&params);
        assert_eq!(first.get_schema(), second.get_schema());
        assert_eq!(first.get_seed(), 7);
    }

    #[test]
    fn test_generated_dependencies_respect_bounds() {
        let params = SchemaParams::builder()
            .n_attribute(5)
            .n_dependency(8)
            .max_lhs(3)
            .max_rhs(2)
            .seed(11)
            .build();
        let schema = generate_single_schema(&params).into_schema();
        assert_eq!(schema.arity(), 5);
        assert_eq!(schema.dependencies().len(), 8);
        for fd in schema.dependencies() {
            assert!((1..=3).contains(&fd.lhs.len()));
            assert!((1..=2).contains(&fd.rhs.len()));
            assert!(fd.lhs.is_disjoint(&fd.rhs));
        }
    }

    #[test]
    fn test_batch_ids_and_seeds() {
        let params = SchemaParams::builder()
            .n_attribute(4)
            .n_dependency(3)
            .seed(100)
            .build();
        let batch = generate_mult_schemas(5, &params);
        assert_eq!(batch.len(), 5);
        for (i, generated) in batch.iter().enumerate() {
            let i = i as u64;
            assert_eq!(generated.get_id(), i);
            assert_eq!(generated.get_seed(), 100 + i);
        }
    }
}

//! Algebraic properties of closure and key enumeration, checked exhaustively
//! over every subset of a handful of small schemas.
mod common;

use nfcheck_core::dependency::subsets::power_set;
use nfcheck_core::dependency::{
    all_superkeys, candidate_keys, closure, is_superkey, non_prime_attributes, prime_attributes,
    subset_minimal_keys,
};
use nfcheck_core::{AttributeSet, Schema};

fn fixtures() -> Vec<Schema<&'static str>> {
    vec![
        schema! { [A, B, C] },
        schema! {
            [A, B, C, D];
            A -> B;
            B -> C;
            C -> D;
        },
        schema! {
            [A, B, C, D];
            A, B -> C;
            C -> D;
            D -> A;
        },
        schema! {
            [A, B, C, D, E];
            A -> B, C;
            C, D -> E;
            B -> D;
            E -> A;
        },
        schema! {
            [A, B, C, D];
            A -> B, C, D;
            B, C -> A;
        },
    ]
}

fn subsets(schema: &Schema<&'static str>) -> Vec<AttributeSet<&'static str>> {
    let universe: Vec<_> = schema.attributes().iter().copied().collect();
    power_set(&universe).collect()
}

#[test]
fn closure_is_extensive_and_bounded() {
    for schema in fixtures() {
        for x in subsets(&schema) {
            let cx = closure(&x, schema.dependencies());
            assert!(x.is_subset(&cx), "{x:?} not contained in its closure");
            assert!(cx.is_subset(schema.attributes()), "closure of {x:?} escapes R");
        }
    }
}

#[test]
fn closure_is_monotonic() {
    for schema in fixtures() {
        let all = subsets(&schema);
        for x in &all {
            for y in all.iter().filter(|y| x.is_subset(y)) {
                let cx = closure(x, schema.dependencies());
                let cy = closure(y, schema.dependencies());
                assert!(cx.is_subset(&cy), "closure({x:?}) ⊄ closure({y:?})");
            }
        }
    }
}

#[test]
fn closure_is_idempotent() {
    for schema in fixtures() {
        for x in subsets(&schema) {
            let once = closure(&x, schema.dependencies());
            let twice = closure(&once, schema.dependencies());
            assert_eq!(once, twice);
        }
    }
}

#[test]
fn closure_ignores_dependency_order() {
    for schema in fixtures() {
        let mut reversed = schema.dependencies().to_vec();
        reversed.reverse();
        for x in subsets(&schema) {
            assert_eq!(
                closure(&x, schema.dependencies()),
                closure(&x, &reversed)
            );
        }
    }
}

#[test]
fn candidate_keys_are_equal_sized_superkeys() {
    for schema in fixtures() {
        let keys = candidate_keys(&schema);
        assert!(!keys.is_empty());
        let size = keys[0].len();
        for key in &keys {
            assert!(is_superkey(&schema, key));
            assert_eq!(key.len(), size);
        }
        // No smaller superkey exists.
        assert!(all_superkeys(&schema).iter().all(|sk| sk.len() >= size));
    }
}

#[test]
fn superkeys_are_exactly_subsets_with_full_closure() {
    for schema in fixtures() {
        let superkeys = all_superkeys(&schema);
        for x in subsets(&schema) {
            assert_eq!(
                superkeys.contains(&x),
                closure(&x, schema.dependencies()) == *schema.attributes()
            );
        }
    }
}

#[test]
fn subset_minimal_keys_contain_candidate_keys() {
    for schema in fixtures() {
        let minimal = subset_minimal_keys(&schema);
        for key in candidate_keys(&schema) {
            assert!(minimal.contains(&key));
        }
        for key in &minimal {
            assert!(is_superkey(&schema, key));
            for attribute in key {
                let mut smaller = key.clone();
                smaller.remove(attribute);
                assert!(!is_superkey(&schema, &smaller));
            }
        }
    }
}

#[test]
fn prime_and_non_prime_partition_the_schema() {
    for schema in fixtures() {
        let prime = prime_attributes(&schema);
        let non_prime = non_prime_attributes(&schema);
        assert!(prime.is_disjoint(&non_prime));
        let union: AttributeSet<_> = prime.union(&non_prime).copied().collect();
        assert_eq!(&union, schema.attributes());
    }
}

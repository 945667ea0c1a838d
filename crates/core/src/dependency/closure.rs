//! Attribute closure under a set of functional dependencies.
//!
//! # Algorithm
//!
//! Start from a copy of the input set and repeatedly sweep the dependency
//! list. Whenever a dependency's left-hand side is contained in the running
//! result and its right-hand side is not, the right-hand side is merged in.
//! The loop stops after a sweep that adds nothing.
//!
//! Each productive sweep adds at least one attribute, so at most `|R|`
//! sweeps are needed, each `O(|FDS|)` subset tests. The result does not
//! depend on dependency order.

use crate::schema::{Attribute, AttributeSet, FunctionalDependency, Schema};

/// Compute the closure of `attributes` under `dependencies`.
///
/// The input is not checked against any universe: attributes outside the
/// dependencies simply stay in the result. With no dependencies the closure
/// is the input itself.
#[must_use]
pub fn closure<A>(
    attributes: &AttributeSet<A>,
    dependencies: &[FunctionalDependency<A>],
) -> AttributeSet<A>
where
    A: Attribute,
{
    let mut result = attributes.clone();

    let mut sweeps = 0u32;
    loop {
        let mut changed = false;
        for fd in dependencies {
            if fd.lhs.is_subset(&result) && !fd.rhs.is_subset(&result) {
                result.extend(fd.rhs.iter().cloned());
                changed = true;
            }
        }
        sweeps += 1;
        if !changed {
            break;
        }
    }

    tracing::trace!(
        input = attributes.len(),
        output = result.len(),
        sweeps,
        "closure fixpoint reached"
    );

    result
}

/// `true` if `attributes` determines every attribute of `schema`.
#[must_use]
pub fn is_superkey<A>(schema: &Schema<A>, attributes: &AttributeSet<A>) -> bool
where
    A: Attribute,
{
    closure(attributes, schema.dependencies()) == *schema.attributes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(attributes: &[&'static str]) -> AttributeSet<&'static str> {
        attributes.iter().copied().collect()
    }

    #[test]
    fn test_closure_without_dependencies() {
        assert_eq!(closure(&set(&["A", "B"]), &[]), set(&["A", "B"]));
        assert_eq!(closure(&set(&[]), &[]), set(&[]));
    }

    #[test]
    fn test_closure_chained() {
        // Listed in reverse so a single sweep cannot finish.
        let fds = vec![
            FunctionalDependency::new(["C"], ["D"]),
            FunctionalDependency::new(["B"], ["C"]),
            FunctionalDependency::new(["A"], ["B"]),
        ];
        assert_eq!(closure(&set(&["A"]), &fds), set(&["A", "B", "C", "D"]));
        assert_eq!(closure(&set(&["C"]), &fds), set(&["C", "D"]));
    }

    #[test]
    fn test_closure_composite_determinant() {
        let fds = vec![
            FunctionalDependency::new(["A"], ["B"]),
            FunctionalDependency::new(["A", "B"], ["C"]),
        ];
        assert_eq!(closure(&set(&["A"]), &fds), set(&["A", "B", "C"]));
        assert_eq!(closure(&set(&["B"]), &fds), set(&["B"]));
    }

    #[test]
    fn test_closure_keeps_foreign_attributes() {
        let fds = vec![FunctionalDependency::new(["A"], ["B"])];
        assert_eq!(closure(&set(&["A", "Z"]), &fds), set(&["A", "B", "Z"]));
    }

    #[test]
    fn test_is_superkey() {
        let schema = Schema::new(
            ["A", "B", "C"],
            vec![
                FunctionalDependency::new(["A"], ["B"]),
                FunctionalDependency::new(["A", "B"], ["C"]),
            ],
        )
        .expect("valid schema");
        assert!(is_superkey(&schema, &set(&["A"])));
        assert!(is_superkey(&schema, &set(&["A", "C"])));
        assert!(!is_superkey(&schema, &set(&["B", "C"])));
    }
}

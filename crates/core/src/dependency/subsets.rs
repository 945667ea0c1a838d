//! Lazy enumeration of fixed-size subsets.
//!
//! Subsets are produced in lexicographic order of element positions, which
//! for a `BTreeSet` universe is lexicographic order of the attributes
//! themselves. Nothing is materialized beyond the current index vector.

use alloc::vec::Vec;

use crate::schema::{Attribute, AttributeSet};

/// Iterator over all `k`-element subsets of a slice.
#[derive(Debug, Clone)]
pub struct Combinations<'a, A> {
    items: &'a [A],
    indices: Vec<usize>,
    done: bool,
}

impl<'a, A> Combinations<'a, A> {
    #[must_use]
    pub fn new(items: &'a [A], k: usize) -> Self {
        Self {
            items,
            indices: (0..k).collect(),
            done: k > items.len(),
        }
    }

    /// Move `indices` to the next combination, or mark the iterator done.
    fn advance(&mut self) {
        let n = self.items.len();
        let k = self.indices.len();

        // Rightmost index that can still move right.
        let Some(pivot) = (0..k).rev().find(|&i| self.indices[i] < n - k + i) else {
            self.done = true;
            return;
        };

        self.indices[pivot] += 1;
        for i in pivot + 1..k {
            self.indices[i] = self.indices[i - 1] + 1;
        }
    }
}

impl<A> Iterator for Combinations<'_, A>
where
    A: Attribute,
{
    type Item = AttributeSet<A>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let subset = self
            .indices
            .iter()
            .map(|&i| self.items[i].clone())
            .collect();
        self.advance();
        Some(subset)
    }
}

/// All subsets of `items`, by non-decreasing size.
pub fn power_set<A>(items: &[A]) -> impl Iterator<Item = AttributeSet<A>> + '_
where
    A: Attribute,
{
    (0..=items.len()).flat_map(move |k| Combinations::new(items, k))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(attributes: &[&'static str]) -> AttributeSet<&'static str> {
        attributes.iter().copied().collect()
    }

    #[test]
    fn test_combinations_order() {
        let items = ["A", "B", "C", "D"];
        let pairs: Vec<_> = Combinations::new(&items, 2).collect();
        assert_eq!(
            pairs,
            vec![
                set(&["A", "B"]),
                set(&["A", "C"]),
                set(&["A", "D"]),
                set(&["B", "C"]),
                set(&["B", "D"]),
                set(&["C", "D"]),
            ]
        );
    }

    #[test]
    fn test_combinations_edges() {
        let items = ["A", "B", "C"];
        assert_eq!(Combinations::new(&items, 0).collect::<Vec<_>>(), vec![set(&[])]);
        assert_eq!(
            Combinations::new(&items, 3).collect::<Vec<_>>(),
            vec![set(&["A", "B", "C"])]
        );
        assert_eq!(Combinations::new(&items, 4).count(), 0);
        assert_eq!(Combinations::<&str>::new(&[], 0).count(), 1);
    }

    #[test]
    fn test_power_set_size_order() {
        let items = ["A", "B", "C"];
        let subsets: Vec<_> = power_set(&items).collect();
        assert_eq!(subsets.len(), 8);
        assert!(subsets.windows(2).all(|w| w[0].len() <= w[1].len()));
        assert_eq!(subsets[0], set(&[]));
        assert_eq!(subsets[7], set(&["A", "B", "C"]));
    }
}

//! Enumeration in symbol-sorted order.
//!
//! This is an alternative to the tree-order of [`all_permutations`][crate::all_permutations] that
//! doesn't look at the tree structure at all. Both orders coincide iff the input sequence is
//! sorted. The rank decoders always use tree-order.
use num_traits::ToPrimitive;

use crate::tree::PermutationTree;

/// Step a slice to its lexicographic successor, in place.
///
/// Returns false if the slice already was the last permutation in lexicographic order. In that
/// case it is reset to the first one, i.e. sorted in ascending order.
pub fn next_permutation<S: Ord>(slice: &mut [S]) -> bool {
    if slice.len() < 2 {
        return false;
    }

    // Find the start of the longest non-increasing suffix
    let mut pivot = slice.len() - 1;
    while pivot > 0 && slice[pivot - 1] >= slice[pivot] {
        pivot -= 1;
    }

    if pivot == 0 {
        slice.reverse();
        return false;
    }

    let mut successor = slice.len() - 1;
    while slice[successor] <= slice[pivot - 1] {
        successor -= 1;
    }

    slice.swap(pivot - 1, successor);
    slice[pivot..].reverse();
    true
}

/// All permutations of the tree's sequence, in lexicographic order of their symbols.
pub fn sorted_permutations<S: Ord + Clone>(tree: &PermutationTree<S>) -> Vec<Vec<S>> {
    let mut current = tree.elements().to_vec();
    current.sort();

    let mut result = Vec::with_capacity(tree.total_permutations().to_usize().unwrap_or(0));
    loop {
        result.push(current.clone());
        if !next_permutation(&mut current) {
            return result;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    use crate::tree::all_permutations;

    #[test]
    fn steps_through_three() {
        let mut v = vec![1, 2, 3];
        let mut seen = vec![v.clone()];
        while next_permutation(&mut v) {
            seen.push(v.clone());
        }

        assert_eq!(
            seen,
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn trivial_slices() {
        let mut empty: [u8; 0] = [];
        assert!(!next_permutation(&mut empty));

        let mut single = ['x'];
        assert!(!next_permutation(&mut single));
        assert_eq!(single, ['x']);
    }

    #[test]
    fn sorted_ignores_input_order() {
        let tree = PermutationTree::new(vec!['c', 'a', 'b']);
        let perms = sorted_permutations(&tree)
            .into_iter()
            .map(|p| p.into_iter().collect::<String>())
            .collect::<Vec<_>>();

        assert_eq!(perms, ["abc", "acb", "bac", "bca", "cab", "cba"]);
    }

    #[test]
    fn empty_sequence() {
        let tree = PermutationTree::<char>::new(vec![]);
        assert_eq!(sorted_permutations(&tree), vec![Vec::<char>::new()]);
    }

    proptest! {
        #[test]
        fn same_set_as_tree_order(
            symbols in (0..=6u32).prop_map(|n| (0..n).collect::<Vec<_>>()).prop_shuffle()
        ) {
            let tree = PermutationTree::new(symbols);

            let sorted = sorted_permutations(&tree);
            let mut tree_order = all_permutations(&tree);

            prop_assert_eq!(sorted.len() as u64, tree.total_permutations());
            tree_order.sort();
            prop_assert_eq!(sorted, tree_order);
        }

        #[test]
        fn orders_coincide_for_sorted_input(n in 0..=6u32) {
            let tree = PermutationTree::new((0..n).collect::<Vec<_>>());
            prop_assert_eq!(sorted_permutations(&tree), all_permutations(&tree));
        }
    }
}

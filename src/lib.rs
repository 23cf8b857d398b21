//! Permutation trees with rank-based permutation lookup
//!
//! This crate builds an explicit tree of all permutations of a sequence of distinct symbols and
//! provides two ways of retrieving the permutation of a given rank: one that enumerates every
//! permutation and indexes into the result, and one that descends the tree directly using the
//! factorial number system.
//!
//! Ranks are 1-based and refer to tree-order, the order in which a depth-first traversal of the
//! tree visits its leaves. Children are visited in the order of the input sequence, so tree-order
//! is the lexicographic order with respect to input positions, not symbol values.
//!
//! ```
//! use permtree::{all_permutations, permutation_by_rank_descent, PermutationTree};
//!
//! let tree = PermutationTree::new(vec!['1', '2', '3']);
//!
//! assert_eq!(tree.total_permutations(), 6);
//! assert_eq!(all_permutations(&tree).len(), 6);
//! assert_eq!(permutation_by_rank_descent(&tree, 1), vec!['1', '2', '3']);
//! assert_eq!(permutation_by_rank_descent(&tree, 6), vec!['3', '2', '1']);
//! assert!(permutation_by_rank_descent(&tree, 7).is_empty());
//! ```
//!
//! A built tree is never mutated, so it can be shared between threads for concurrent queries.
pub mod factorial;
pub mod lexicographic;
pub mod rank;
pub mod tree;

pub use crate::rank::{
    permutation_by_rank_descent, permutation_by_rank_enumeration, try_permutation_by_rank_descent,
    try_permutation_by_rank_enumeration, RankError,
};
pub use crate::tree::{all_permutations, Node, PermutationTree, Permutations};

/// Largest supported number of symbols.
///
/// `20!` is the largest factorial that fits into a `u64`. Trees of that size could never be built
/// in practice, but the bound keeps the permutation count exact.
pub const MAX_SYMBOLS: usize = 20;

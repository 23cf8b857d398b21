//! Retrieving permutations by rank.
//!
//! Ranks are 1-based positions in tree-order, see [`all_permutations`]. Two independent decoders
//! are provided. [`permutation_by_rank_enumeration`] lists every permutation and picks one, which
//! makes it a simple reference for [`permutation_by_rank_descent`], which walks a single path of
//! the tree.
//!
//! Both accept any primitive integer as rank. Ranks outside of `1..=N!`, including negative ones,
//! produce an empty permutation. Note that for an empty input sequence the only valid permutation
//! is empty as well, so an empty result is only unambiguous for non-empty trees. The `try_`
//! variants report the [`RankError`] instead.
use num_integer::Integer;
use num_traits::ToPrimitive;
use thiserror::Error;
use tracing::{debug, trace};

use crate::factorial::FactorialDigits;
use crate::tree::{all_permutations, PermutationTree};

/// Failure to retrieve a permutation by rank.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum RankError {
    #[error("rank {rank} is out of range 1..={total}")]
    OutOfRange { rank: i128, total: u64 },

    #[error("child index {index} at depth {depth} is out of range for {children} children")]
    InvalidIndex {
        depth: usize,
        index: u64,
        children: usize,
    },
}

/// Map a 1-based rank to a 0-based offset below N!.
fn zero_based<S, R>(tree: &PermutationTree<S>, rank: &R) -> Result<u64, RankError>
where
    R: Integer + ToPrimitive,
{
    let total = tree.total_permutations();
    match rank.to_u64() {
        Some(rank) if rank >= 1 && rank <= total => Ok(rank - 1),
        _ => {
            let rank = rank.to_i128().unwrap_or(i128::max_value());
            debug!(%rank, total, "rank out of range");
            Err(RankError::OutOfRange { rank, total })
        }
    }
}

/// The permutation of a given rank, found by enumerating all permutations.
///
/// This takes O(N! · N) time and space.
pub fn try_permutation_by_rank_enumeration<S, R>(
    tree: &PermutationTree<S>,
    rank: R,
) -> Result<Vec<S>, RankError>
where
    S: Clone,
    R: Integer + ToPrimitive,
{
    let offset = zero_based(tree, &rank)?;
    let out_of_range = || RankError::OutOfRange {
        rank: i128::from(offset) + 1,
        total: tree.total_permutations(),
    };
    let index = offset.to_usize().ok_or_else(out_of_range)?;

    all_permutations(tree)
        .into_iter()
        .nth(index)
        .ok_or_else(out_of_range)
}

/// The permutation of a given rank, found by enumerating all permutations.
///
/// Returns an empty permutation when the rank is out of range.
pub fn permutation_by_rank_enumeration<S, R>(tree: &PermutationTree<S>, rank: R) -> Vec<S>
where
    S: Clone,
    R: Integer + ToPrimitive,
{
    try_permutation_by_rank_enumeration(tree, rank).unwrap_or_default()
}

/// The permutation of a given rank, found by descending the tree.
///
/// The 0-based rank is decomposed in the factorial number system. A node at depth d has N - d
/// children, each of which is the root of a subtree with (N - d - 1)! leaves, so the digit of
/// weight (N - d - 1)! selects the child to descend into. This takes O(N²) time.
pub fn try_permutation_by_rank_descent<S, R>(
    tree: &PermutationTree<S>,
    rank: R,
) -> Result<Vec<S>, RankError>
where
    S: Clone,
    R: Integer + ToPrimitive,
{
    let offset = zero_based(tree, &rank)?;
    let digits = FactorialDigits::new(offset, tree.len()).ok_or(RankError::OutOfRange {
        rank: i128::from(offset) + 1,
        total: tree.total_permutations(),
    })?;

    let mut node = tree.root();
    let mut permutation = Vec::with_capacity(tree.len());
    for (depth, index) in digits.enumerate() {
        trace!(depth, index, "descending");
        let children = node.children();
        node = index
            .to_usize()
            .and_then(|index| children.get(index))
            .ok_or(RankError::InvalidIndex {
                depth,
                index,
                children: children.len(),
            })?;
        permutation.extend(node.symbol().cloned());
    }

    if !node.is_leaf() {
        return Err(RankError::InvalidIndex {
            depth: tree.len(),
            index: 0,
            children: node.children().len(),
        });
    }

    Ok(permutation)
}

/// The permutation of a given rank, found by descending the tree.
///
/// Returns an empty permutation when the rank is out of range.
///
/// Panics on an [`RankError::InvalidIndex`], which only a malformed tree can produce.
pub fn permutation_by_rank_descent<S, R>(tree: &PermutationTree<S>, rank: R) -> Vec<S>
where
    S: Clone,
    R: Integer + ToPrimitive,
{
    match try_permutation_by_rank_descent(tree, rank) {
        Ok(permutation) => permutation,
        Err(RankError::OutOfRange { .. }) => vec![],
        Err(err) => panic!("malformed permutation tree: {}", err),
    }
}

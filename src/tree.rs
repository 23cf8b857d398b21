//! Permutation trees.
use std::slice;

use tracing::debug;

use crate::factorial::factorial;
use crate::MAX_SYMBOLS;

/// A node of a [`PermutationTree`].
///
/// Every node except the root holds one symbol. A node at depth d of a tree over N symbols has one
/// child for each of the N - d symbols not yet used on the path from the root to it, in input
/// order. It is a leaf iff d = N.
#[derive(Clone, Debug)]
pub struct Node<S> {
    symbol: Option<S>,
    children: Vec<Node<S>>,
}

impl<S: Clone> Node<S> {
    fn new(symbol: Option<S>, remaining: &[S]) -> Node<S> {
        let mut children = Vec::with_capacity(remaining.len());
        let mut rest = Vec::with_capacity(remaining.len().saturating_sub(1));

        for (i, symbol) in remaining.iter().enumerate() {
            rest.clear();
            rest.extend_from_slice(&remaining[..i]);
            rest.extend_from_slice(&remaining[i + 1..]);
            children.push(Node::new(Some(symbol.clone()), &rest));
        }

        Node { symbol, children }
    }
}

impl<S> Node<S> {
    /// The symbol placed at this node. None for the root.
    pub fn symbol(&self) -> Option<&S> {
        self.symbol.as_ref()
    }

    /// The continuations of this node, in input order of their symbols.
    pub fn children(&self) -> &[Node<S>] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }
}

/// A tree of all permutations of a sequence of distinct symbols.
///
/// The root represents the empty prefix and every root-to-leaf path spells out one permutation of
/// the input, so there is exactly one leaf per permutation. The whole tree is built eagerly by
/// [`PermutationTree::new`] and never changes afterwards.
///
/// Symbols are expected to be pairwise distinct. Equal symbols are not detected and are treated as
/// if they were different, so the tree will contain repeated permutations.
#[derive(Clone, Debug)]
pub struct PermutationTree<S> {
    root: Node<S>,
    elements: Vec<S>,
    total: u64,
}

impl<S: Clone> PermutationTree<S> {
    /// Build the permutation tree of a sequence.
    ///
    /// An empty sequence yields a tree consisting only of the root, which has a single empty
    /// permutation.
    ///
    /// Panics when the sequence has more than [`MAX_SYMBOLS`] symbols.
    pub fn new(elements: Vec<S>) -> PermutationTree<S> {
        assert!(
            elements.len() <= MAX_SYMBOLS,
            "permutation tree over {} symbols exceeds the limit of {}",
            elements.len(),
            MAX_SYMBOLS
        );
        // Can't fail after the assertion above
        let total = factorial::<u64>(elements.len()).unwrap_or(u64::max_value());

        let root = Node::new(None, &elements);

        debug!(symbols = elements.len(), leaves = total, "built permutation tree");

        PermutationTree {
            root,
            elements,
            total,
        }
    }
}

impl<S> PermutationTree<S> {
    /// The root node, holding no symbol.
    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    /// The sequence this tree was built from.
    pub fn elements(&self) -> &[S] {
        &self.elements
    }

    /// Number of symbols in each permutation.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of permutations, N! for N symbols.
    pub fn total_permutations(&self) -> u64 {
        self.total
    }

    /// Number of nodes in the tree, including the root.
    pub fn node_count(&self) -> usize {
        self.root.count()
    }

    /// Iterate over all permutations in tree-order.
    ///
    /// Permutations are produced lazily by a depth-first walk, so only the current path is kept in
    /// memory.
    pub fn permutations(&self) -> Permutations<'_, S> {
        Permutations {
            root: Some(&self.root),
            stack: Vec::with_capacity(self.len()),
            path: Vec::with_capacity(self.len()),
        }
    }
}

/// All permutations of the tree's sequence, in tree-order.
///
/// The first permutation is the input sequence itself and the first symbol varies slowest.
pub fn all_permutations<S: Clone>(tree: &PermutationTree<S>) -> Vec<Vec<S>> {
    tree.permutations().collect()
}

/// Iterator over the permutations of a [`PermutationTree`], in tree-order.
#[derive(Clone, Debug)]
pub struct Permutations<'a, S> {
    // Root node until the walk starts
    root: Option<&'a Node<S>>,
    // Unvisited children of every node on the current path
    stack: Vec<slice::Iter<'a, Node<S>>>,
    path: Vec<S>,
}

impl<'a, S: Clone> Iterator for Permutations<'a, S> {
    type Item = Vec<S>;

    fn next(&mut self) -> Option<Vec<S>> {
        if let Some(root) = self.root.take() {
            if root.is_leaf() {
                return Some(vec![]);
            }
            self.stack.push(root.children.iter());
        }

        loop {
            let child = match self.stack.last_mut()?.next() {
                Some(child) => child,
                None => {
                    self.stack.pop();
                    self.path.pop();
                    continue;
                }
            };

            self.path.extend(child.symbol.iter().cloned());

            if child.is_leaf() {
                let permutation = self.path.clone();
                self.path.pop();
                return Some(permutation);
            }

            self.stack.push(child.children.iter());
        }
    }
}

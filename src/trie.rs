//! Prefix tree over sequences of hashable symbols
//!
//! # Example
//!
//! ```rust
//! use indexed_collections::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.add(&['i', 'j', 'k']);
//! trie.add(&['i', 'j', 'p', 'q']);
//!
//! assert!(trie.contains(&['i', 'j']));
//! assert!(trie.remove(&['i', 'j', 'p', 'q']));
//! assert!(!trie.contains(&['i', 'j', 'p']));
//! assert!(trie.contains(&['i', 'j', 'k']));
//! ```

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

/// A trie node: its symbol and children keyed by the next symbol
#[derive(Debug, Clone)]
pub struct TrieNode<E> {
    symbol: Option<E>,
    children: FxHashMap<E, TrieNode<E>>,
}

impl<E: Hash + Eq + Clone> TrieNode<E> {
    fn new(symbol: Option<E>) -> Self {
        Self {
            symbol,
            children: FxHashMap::default(),
        }
    }

    /// Symbol on the edge leading here; `None` only for the root
    pub fn symbol(&self) -> Option<&E> {
        self.symbol.as_ref()
    }

    pub fn child(&self, symbol: &E) -> Option<&TrieNode<E>> {
        self.children.get(symbol)
    }

    pub fn children(&self) -> impl Iterator<Item = &TrieNode<E>> + '_ {
        self.children.values()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Removes the path below this node, pruning nodes left without
    /// children on the way back up. Returns whether the path existed.
    fn prune(&mut self, path: &[E]) -> bool {
        let Some((first, rest)) = path.split_first() else {
            return true;
        };
        let Some(child) = self.children.get_mut(first) else {
            return false;
        };
        if !child.prune(rest) {
            return false;
        }
        if child.is_leaf() {
            self.children.remove(first);
        }
        true
    }
}

/// A prefix tree
#[derive(Debug, Clone)]
pub struct Trie<E> {
    root: TrieNode<E>,
}

impl<E: Hash + Eq + Clone> Trie<E> {
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(None),
        }
    }

    pub fn root(&self) -> &TrieNode<E> {
        &self.root
    }

    /// Adds `path`, creating any missing nodes
    pub fn add(&mut self, path: &[E]) {
        let mut node = &mut self.root;
        for symbol in path {
            node = node
                .children
                .entry(symbol.clone())
                .or_insert_with(|| TrieNode::new(Some(symbol.clone())));
        }
    }

    /// Removes `path` if it exists in full
    ///
    /// Starting at the deepest node, each node that has no children is
    /// dropped; pruning stops at the first node still shared with another
    /// path. Returns false and changes nothing if the path is missing.
    pub fn remove(&mut self, path: &[E]) -> bool {
        self.root.prune(path)
    }

    /// Returns true if `path` exists, as a full path or a prefix of one
    pub fn contains(&self, path: &[E]) -> bool {
        self.find(path).is_some()
    }

    /// Node reached by following `path` from the root
    pub fn find(&self, path: &[E]) -> Option<&TrieNode<E>> {
        path.iter().try_fold(&self.root, |node, symbol| node.child(symbol))
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    pub fn clear(&mut self) {
        self.root.children.clear();
    }
}

impl<E: Hash + Eq + Clone> Default for Trie<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Depth-first dump, four spaces per level; the root prints as `-`.
/// Sibling order follows the hash map and is not stable.
impl<E: fmt::Display> fmt::Display for Trie<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![(&self.root, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            if depth > 0 {
                writeln!(f)?;
            }
            write!(f, "{:indent$}", "", indent = 4 * depth)?;
            match &node.symbol {
                Some(symbol) => write!(f, "{}", symbol)?,
                None => write!(f, "-")?,
            }
            stack.extend(node.children.values().map(|child| (child, depth + 1)));
        }
        Ok(())
    }
}

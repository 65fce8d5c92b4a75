//! Segment tree over a fixed-length sequence
//!
//! Each internal node caches `combine(left, right)` of its two halves, so an
//! inclusive range can be folded in O(log n). `combine` must be associative;
//! it need not be commutative, and no identity element is required.
//!
//! Updates are applied eagerly to every leaf in the range.
//!
//! # Example
//!
//! ```rust
//! use indexed_collections::segment::SegmentTree;
//!
//! let mut sums = SegmentTree::new(vec![10, 20, 30, 40, 50, 60], |a: &i32, b: &i32| a + b);
//! assert_eq!(sums.query(2, 4), Some(120));
//!
//! sums.update(2, 4, |_, e| e + 100);
//! assert_eq!(sums.query(0, 5), Some(510));
//! assert_eq!(sums.to_vec(), vec![10, 20, 130, 140, 150, 60]);
//! ```

use std::fmt;

/// A range-combine tree
#[derive(Clone)]
pub struct SegmentTree<E, F> {
    len: usize,
    /// Implicit tree: node `i` has children `2i + 1` and `2i + 2`
    nodes: Vec<Option<E>>,
    combine: F,
}

impl<E, F> SegmentTree<E, F>
where
    E: Clone,
    F: Fn(&E, &E) -> E,
{
    /// Builds the tree over `values`
    pub fn new(values: Vec<E>, combine: F) -> Self {
        let len = values.len();
        let mut nodes = Vec::new();
        nodes.resize_with(4 * len.max(1), || None);

        let mut tree = Self {
            len,
            nodes,
            combine,
        };
        if len > 0 {
            let mut leaves: Vec<Option<E>> = values.into_iter().map(Some).collect();
            tree.build(0, 0, len - 1, &mut leaves);
        }
        tree
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Folds the inclusive range `[l, r]`; `None` if empty or out of bounds
    pub fn query(&self, l: usize, r: usize) -> Option<E> {
        if l > r || r >= self.len {
            return None;
        }
        self.query_node(0, 0, self.len - 1, l, r)
    }

    /// Replaces every element `e` at index `i` in `[l, r]` with `f(i, &e)`
    ///
    /// Returns false and changes nothing if the range is empty or out of bounds.
    pub fn update<U>(&mut self, l: usize, r: usize, mut f: U) -> bool
    where
        U: FnMut(usize, &E) -> E,
    {
        if l > r || r >= self.len {
            return false;
        }
        self.update_node(0, 0, self.len - 1, l, r, &mut f);
        true
    }

    /// Replaces the element at `index`, returning the old one
    pub fn set(&mut self, index: usize, value: E) -> Option<E> {
        if index >= self.len {
            return None;
        }
        let mut value = Some(value);
        let mut old = None;
        self.update_node(0, 0, self.len - 1, index, index, &mut |_, e: &E| {
            old = Some(e.clone());
            value.take().unwrap_or_else(|| e.clone())
        });
        old
    }

    /// Element at `index`
    pub fn get(&self, index: usize) -> Option<&E> {
        if index >= self.len {
            return None;
        }
        let (mut node, mut l, mut r) = (0, 0, self.len - 1);
        while l < r {
            let mid = l + (r - l) / 2;
            if index <= mid {
                node = 2 * node + 1;
                r = mid;
            } else {
                node = 2 * node + 2;
                l = mid + 1;
            }
        }
        self.nodes[node].as_ref()
    }

    /// Leaves in index order
    pub fn to_vec(&self) -> Vec<E> {
        (0..self.len).filter_map(|i| self.get(i).cloned()).collect()
    }

    fn build(&mut self, node: usize, l: usize, r: usize, leaves: &mut [Option<E>]) {
        if l == r {
            self.nodes[node] = leaves[l].take();
            return;
        }
        let mid = l + (r - l) / 2;
        self.build(2 * node + 1, l, mid, leaves);
        self.build(2 * node + 2, mid + 1, r, leaves);
        self.pull(node);
    }

    fn pull(&mut self, node: usize) {
        let merged = match (&self.nodes[2 * node + 1], &self.nodes[2 * node + 2]) {
            (Some(left), Some(right)) => Some((self.combine)(left, right)),
            (Some(only), None) | (None, Some(only)) => Some(only.clone()),
            (None, None) => None,
        };
        self.nodes[node] = merged;
    }

    fn query_node(&self, node: usize, nl: usize, nr: usize, l: usize, r: usize) -> Option<E> {
        if r < nl || nr < l {
            return None;
        }
        if l <= nl && nr <= r {
            return self.nodes[node].clone();
        }
        let mid = nl + (nr - nl) / 2;
        let left = self.query_node(2 * node + 1, nl, mid, l, r);
        let right = self.query_node(2 * node + 2, mid + 1, nr, l, r);
        match (left, right) {
            (Some(a), Some(b)) => Some((self.combine)(&a, &b)),
            (a, None) => a,
            (None, b) => b,
        }
    }

    fn update_node<U>(&mut self, node: usize, nl: usize, nr: usize, l: usize, r: usize, f: &mut U)
    where
        U: FnMut(usize, &E) -> E,
    {
        if r < nl || nr < l {
            return;
        }
        if nl == nr {
            if let Some(e) = self.nodes[node].take() {
                self.nodes[node] = Some(f(nl, &e));
            }
            return;
        }
        let mid = nl + (nr - nl) / 2;
        self.update_node(2 * node + 1, nl, mid, l, r, f);
        self.update_node(2 * node + 2, mid + 1, nr, l, r, f);
        self.pull(node);
    }
}

impl<E: fmt::Debug, F> fmt::Debug for SegmentTree<E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentTree")
            .field("len", &self.len)
            .field("nodes", &self.nodes)
            .finish()
    }
}

/// Leaves as `[e0, e1, ...]`
impl<E, F> fmt::Display for SegmentTree<E, F>
where
    E: Clone + fmt::Display,
    F: Fn(&E, &E) -> E,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..self.len {
            if i > 0 {
                write!(f, ", ")?;
            }
            if let Some(e) = self.get(i) {
                write!(f, "{}", e)?;
            }
        }
        write!(f, "]")
    }
}

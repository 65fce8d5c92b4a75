//! Indexed Collections for Rust
//!
//! This crate centers on a slot-addressable binary heap and ships a few small
//! generic containers alongside it.
//!
//! # Features
//!
//! - **Indexed Binary Heap**: fixed-capacity heap where every element lives in a
//!   caller-chosen slot; O(log n) add, remove-by-slot, re-prioritize and poll
//! - **Graph**: adjacency-map directed graph with vertex payloads and optional edge weights
//! - **Tree**: rooted tree with integer-keyed, ordered children
//! - **Trie**: prefix tree over hashable symbols
//! - **Segment Tree**: range folding with eager point and range updates
//! - **Pair / Interval**: lexicographically ordered value types
//!
//! # Example
//!
//! ```rust
//! use indexed_collections::IndexedBinaryHeap;
//!
//! let mut heap = IndexedBinaryHeap::new(6);
//! for (slot, value) in [(0, 60), (1, 40), (2, 50), (3, 30), (4, 10), (5, 20)] {
//!     heap.add(slot, value).unwrap();
//! }
//! assert_eq!(heap.peek(), Ok(&10));
//!
//! heap.remove(4).unwrap();
//! assert_eq!(heap.peek(), Ok(&20));
//!
//! heap.set(0, 5).unwrap();
//! assert_eq!(heap.peek(), Ok(&5));
//! ```

pub mod graph;
pub mod indexed_binary;
pub mod segment;
pub mod simple;
pub mod traits;
pub mod tree;
pub mod trie;

// Re-export the main types for convenience
pub use indexed_binary::IndexedBinaryHeap;
pub use traits::{Compare, HeapError, Natural, Reversed};

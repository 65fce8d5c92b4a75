//! Indexed Binary Heap implementation
//!
//! A fixed-capacity binary heap where every element lives in a caller-chosen
//! *slot* in `[0, capacity)`. The slot is stable for the lifetime of the
//! element, while its *position* in the implicit tree changes as the heap
//! rebalances. Two index arrays keep the mapping in both directions:
//!
//! - `position_of[slot]`: where the slot's element currently sits
//! - `slot_at[position]`: which slot occupies a position
//!
//! Because any element can be located by slot in O(1), it can also be removed
//! or re-prioritized in O(log n), not only the root. This is what Dijkstra-style
//! algorithms need when the vertex id doubles as the slot.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `add`      | O(log n)   |
//! | `remove`   | O(log n)   |
//! | `set`      | O(log n)   |
//! | `poll`     | O(log n)   |
//! | `peek`     | O(1)       |
//! | `get`      | O(1)       |
//! | `contains` | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use indexed_collections::indexed_binary::IndexedBinaryHeap;
//!
//! let mut heap = IndexedBinaryHeap::new(8);
//! heap.add(0, 60).unwrap();
//! heap.add(4, 10).unwrap();
//! heap.add(5, 20).unwrap();
//!
//! assert_eq!(heap.peek(), Ok(&10));
//! heap.remove(4).unwrap();
//! assert_eq!(heap.peek(), Ok(&20));
//! heap.set(0, 5).unwrap();
//! assert_eq!(heap.poll_entry(), Ok((0, 5)));
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::trace;

use crate::traits::{Compare, HeapError, Natural};

/// A slot-addressable binary heap
///
/// Ordering comes from the comparator `C`: whatever compares as
/// [`Ordering::Less`] sits nearer the root. The default [`Natural`] makes
/// this a min-heap; use [`Reversed`](crate::traits::Reversed) for a max-heap.
///
/// Slot-addressed operations reject slots outside `[0, capacity)` with
/// [`HeapError::SlotOutOfRange`]. On an in-range slot, adding to an occupied
/// slot or removing/setting a free one is a no-op reported through the return
/// value.
#[derive(Clone)]
pub struct IndexedBinaryHeap<E, C = Natural> {
    /// Element storage indexed by slot, `None` for a free slot
    slots: Vec<Option<E>>,
    /// Slot -> position, meaningful only for occupied slots
    position_of: Vec<usize>,
    /// Position -> slot, meaningful only below `len`
    slot_at: Vec<usize>,
    len: usize,
    cmp: C,
}

impl<E: Ord> IndexedBinaryHeap<E, Natural> {
    /// Creates an empty min-heap over slots `[0, capacity)` using `E`'s natural order
    pub fn new(capacity: usize) -> Self {
        Self::with_comparator(capacity, Natural)
    }
}

impl<E, C> IndexedBinaryHeap<E, C> {
    /// Number of slots, fixed at construction
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of occupied slots
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no slot is occupied
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if `slot` holds an element; out-of-range slots are never occupied
    pub fn contains(&self, slot: usize) -> bool {
        matches!(self.slots.get(slot), Some(Some(_)))
    }

    /// Returns the element stored at `slot`
    ///
    /// # Errors
    /// [`HeapError::SlotOutOfRange`] for a slot outside `[0, capacity)`,
    /// [`HeapError::NotFound`] for a free slot.
    pub fn get(&self, slot: usize) -> Result<&E, HeapError> {
        self.check_slot(slot)?;
        self.slots[slot]
            .as_ref()
            .ok_or(HeapError::NotFound { slot })
    }

    /// Frees every slot
    pub fn clear(&mut self) {
        for &slot in &self.slot_at[..self.len] {
            self.slots[slot] = None;
        }
        self.len = 0;
    }

    /// Iterates over `(slot, element)` pairs in heap-position order
    ///
    /// The first item, if any, is the extremum. The rest follow the
    /// level-order layout of the implicit tree, not sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &E)> + '_ {
        let slots = &self.slots;
        self.slot_at[..self.len]
            .iter()
            .filter_map(move |&slot| slots[slot].as_ref().map(|e| (slot, e)))
    }

    fn check_slot(&self, slot: usize) -> Result<(), HeapError> {
        if slot < self.slots.len() {
            Ok(())
        } else {
            trace!(
                "rejecting slot {} (capacity {})",
                slot,
                self.slots.len()
            );
            Err(HeapError::SlotOutOfRange {
                slot,
                capacity: self.slots.len(),
            })
        }
    }

    /// Exchanges the occupants of positions `i` and `j`
    ///
    /// This is the only place both index arrays change together.
    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.slot_at.swap(i, j);
        self.position_of[self.slot_at[i]] = i;
        self.position_of[self.slot_at[j]] = j;
    }
}

impl<E, C: Compare<E>> IndexedBinaryHeap<E, C> {
    /// Creates an empty heap over slots `[0, capacity)` ordered by `cmp`
    ///
    /// # Example
    ///
    /// ```rust
    /// use indexed_collections::indexed_binary::IndexedBinaryHeap;
    ///
    /// // Max-heap by string length
    /// let by_len_desc = |a: &&str, b: &&str| b.len().cmp(&a.len());
    /// let mut heap = IndexedBinaryHeap::with_comparator(4, by_len_desc);
    /// heap.add(0, "ab").unwrap();
    /// heap.add(1, "abcd").unwrap();
    /// heap.add(2, "a").unwrap();
    /// assert_eq!(heap.peek_entry(), Ok((1, &"abcd")));
    /// ```
    pub fn with_comparator(capacity: usize, cmp: C) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            position_of: vec![0; capacity],
            slot_at: vec![0; capacity],
            len: 0,
            cmp,
        }
    }

    /// Stores `element` in a free `slot`
    ///
    /// Returns `Ok(false)` and leaves the existing element untouched if the
    /// slot is already occupied.
    ///
    /// # Errors
    /// [`HeapError::SlotOutOfRange`] for a slot outside `[0, capacity)`.
    pub fn add(&mut self, slot: usize, element: E) -> Result<bool, HeapError> {
        self.check_slot(slot)?;
        if self.slots[slot].is_some() {
            trace!("add: slot {} already occupied, ignoring", slot);
            return Ok(false);
        }

        let position = self.len;
        self.slots[slot] = Some(element);
        self.position_of[slot] = position;
        self.slot_at[position] = slot;
        self.len += 1;

        self.sift_up(position);
        Ok(true)
    }

    /// Frees `slot`, returning its element, or `Ok(None)` if it was already free
    ///
    /// # Errors
    /// [`HeapError::SlotOutOfRange`] for a slot outside `[0, capacity)`.
    pub fn remove(&mut self, slot: usize) -> Result<Option<E>, HeapError> {
        self.check_slot(slot)?;
        let removed = self.detach(slot);
        if removed.is_none() {
            trace!("remove: slot {} is free, ignoring", slot);
        }
        Ok(removed)
    }

    /// Replaces the element at `slot` and moves it to its new place
    ///
    /// Returns the previous element, or `Ok(None)` without storing anything
    /// if the slot is free. This is both decrease-key and increase-key.
    ///
    /// # Errors
    /// [`HeapError::SlotOutOfRange`] for a slot outside `[0, capacity)`.
    pub fn set(&mut self, slot: usize, element: E) -> Result<Option<E>, HeapError> {
        self.check_slot(slot)?;
        let Some(current) = self.slots[slot].as_mut() else {
            trace!("set: slot {} is free, ignoring", slot);
            return Ok(None);
        };

        let order = self.cmp.compare(&element, current);
        let old = std::mem::replace(current, element);
        self.rebalance(self.position_of[slot], order);
        Ok(Some(old))
    }

    /// Returns the extremum without removing it
    ///
    /// # Errors
    /// [`HeapError::Empty`] if no slot is occupied.
    pub fn peek(&self) -> Result<&E, HeapError> {
        self.peek_entry().map(|(_, e)| e)
    }

    /// Returns the extremum together with the slot holding it
    ///
    /// # Errors
    /// [`HeapError::Empty`] if no slot is occupied.
    pub fn peek_entry(&self) -> Result<(usize, &E), HeapError> {
        if self.len == 0 {
            return Err(HeapError::Empty);
        }
        Ok((self.slot_at[0], self.at(0)))
    }

    /// Removes and returns the extremum
    ///
    /// # Errors
    /// [`HeapError::Empty`] if no slot is occupied.
    pub fn poll(&mut self) -> Result<E, HeapError> {
        self.poll_entry().map(|(_, e)| e)
    }

    /// Removes the extremum, returning it with the slot it occupied
    ///
    /// # Errors
    /// [`HeapError::Empty`] if no slot is occupied.
    pub fn poll_entry(&mut self) -> Result<(usize, E), HeapError> {
        if self.len == 0 {
            return Err(HeapError::Empty);
        }
        let slot = self.slot_at[0];
        self.detach(slot)
            .map(|e| (slot, e))
            .ok_or(HeapError::Empty)
    }

    /// Checks every structural invariant: the index arrays are mutual
    /// inverses over exactly the occupied slots, and heap order holds.
    #[doc(hidden)]
    pub fn verify_invariants(&self) -> bool {
        let capacity = self.slots.len();
        if self.len > capacity
            || self.position_of.len() != capacity
            || self.slot_at.len() != capacity
        {
            return false;
        }

        let mut seen = vec![false; capacity];
        for (position, &slot) in self.slot_at[..self.len].iter().enumerate() {
            if slot >= capacity || seen[slot] || self.slots[slot].is_none() {
                return false;
            }
            if self.position_of[slot] != position {
                return false;
            }
            seen[slot] = true;
        }

        let occupied = self.slots.iter().filter(|s| s.is_some()).count();
        if occupied != self.len {
            return false;
        }

        (1..self.len).all(|child| {
            let parent = (child - 1) / 2;
            self.cmp.compare(self.at(parent), self.at(child)) != Ordering::Greater
        })
    }

    /// Element at a position below `len`
    #[inline]
    fn at(&self, position: usize) -> &E {
        match &self.slots[self.slot_at[position]] {
            Some(e) => e,
            None => unreachable!("position {} maps to a free slot", position),
        }
    }

    /// Takes the element out of `slot` and fills the hole with the last position
    fn detach(&mut self, slot: usize) -> Option<E> {
        let removed = self.slots[slot].take()?;
        let position = self.position_of[slot];
        let last = self.len - 1;

        if position == last {
            self.len -= 1;
            return Some(removed);
        }

        // Compare the element moving into the hole against the one leaving it;
        // only one sift direction can be needed.
        let order = self.cmp.compare(self.at(last), &removed);
        self.swap(position, last);
        self.len -= 1;
        self.rebalance(position, order);

        Some(removed)
    }

    fn rebalance(&mut self, position: usize, order: Ordering) {
        match order {
            Ordering::Less => self.sift_up(position),
            Ordering::Greater => self.sift_down(position),
            Ordering::Equal => {}
        }
    }

    /// Move element at position up to maintain heap property
    fn sift_up(&mut self, mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / 2;
            if self.cmp.compare(self.at(position), self.at(parent)) != Ordering::Less {
                break;
            }
            self.swap(position, parent);
            position = parent;
        }
    }

    /// Move element at position down to maintain heap property
    fn sift_down(&mut self, mut position: usize) {
        loop {
            let left = 2 * position + 1;
            if left >= self.len {
                break;
            }
            let right = left + 1;

            let mut child = left;
            if right < self.len
                && self.cmp.compare(self.at(left), self.at(right)) != Ordering::Less
            {
                child = right;
            }

            if self.cmp.compare(self.at(position), self.at(child)) != Ordering::Greater {
                break;
            }
            self.swap(position, child);
            position = child;
        }
    }
}

impl<E: fmt::Debug, C> fmt::Debug for IndexedBinaryHeap<E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedBinaryHeap")
            .field("capacity", &self.capacity())
            .field("len", &self.len)
            .field("entries", &DebugEntries(self))
            .finish()
    }
}

struct DebugEntries<'a, E, C>(&'a IndexedBinaryHeap<E, C>);

impl<E: fmt::Debug, C> fmt::Debug for DebugEntries<'_, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

/// Tree-shaped dump: one node per line as `slot(element)`, indented four
/// spaces per level, root first, left subtree before right.
impl<E: fmt::Display, C> fmt::Display for IndexedBinaryHeap<E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![(0usize, 0usize)];
        while let Some((position, depth)) = stack.pop() {
            if position >= self.len {
                continue;
            }
            let slot = self.slot_at[position];
            if let Some(e) = &self.slots[slot] {
                if position > 0 {
                    writeln!(f)?;
                }
                write!(f, "{:indent$}{}({})", "", slot, e, indent = 4 * depth)?;
            }
            stack.push((2 * position + 2, depth + 1));
            stack.push((2 * position + 1, depth + 1));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Reversed;

    fn sample() -> IndexedBinaryHeap<i32> {
        let mut heap = IndexedBinaryHeap::new(6);
        for (slot, value) in [(0, 60), (1, 40), (2, 50), (3, 30), (4, 10), (5, 20)] {
            assert_eq!(heap.add(slot, value), Ok(true));
        }
        heap
    }

    #[test]
    fn test_basic_operations() {
        let mut heap = IndexedBinaryHeap::new(4);

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.capacity(), 4);

        heap.add(2, "three").unwrap();
        heap.add(0, "one").unwrap();
        heap.add(3, "two").unwrap();

        assert_eq!(heap.len(), 3);
        assert!(heap.contains(0));
        assert!(!heap.contains(1));
        assert_eq!(heap.get(2), Ok(&"three"));
        assert_eq!(heap.peek_entry(), Ok((0, &"one")));

        assert_eq!(heap.poll_entry(), Ok((0, "one")));
        assert_eq!(heap.poll_entry(), Ok((2, "three")));
        assert_eq!(heap.poll_entry(), Ok((3, "two")));
        assert_eq!(heap.poll(), Err(HeapError::Empty));
        assert!(heap.verify_invariants());
    }

    #[test]
    fn test_decrease_and_increase_key() {
        let mut heap = sample();
        assert_eq!(heap.peek(), Ok(&10));

        assert_eq!(heap.remove(4), Ok(Some(10)));
        assert_eq!(heap.peek(), Ok(&20));

        assert_eq!(heap.set(0, 5), Ok(Some(60)));
        assert_eq!(heap.peek(), Ok(&5));

        assert_eq!(heap.set(0, 100), Ok(Some(5)));
        assert_eq!(heap.peek_entry(), Ok((5, &20)));
        assert!(heap.verify_invariants());
    }

    #[test]
    fn test_duplicate_add_is_ignored() {
        let mut heap = IndexedBinaryHeap::new(2);
        assert_eq!(heap.add(1, 7), Ok(true));
        assert_eq!(heap.add(1, 3), Ok(false));
        assert_eq!(heap.get(1), Ok(&7));
        assert_eq!(heap.len(), 1);
    }

    #[test]
    fn test_free_slot_is_noop() {
        let mut heap = sample();
        heap.remove(2).unwrap();

        assert_eq!(heap.remove(2), Ok(None));
        assert_eq!(heap.set(2, 1), Ok(None));
        assert!(!heap.contains(2));
        assert_eq!(heap.get(2), Err(HeapError::NotFound { slot: 2 }));
        assert_eq!(heap.len(), 5);
        assert!(heap.verify_invariants());
    }

    #[test]
    fn test_out_of_range_slots() {
        let mut heap = sample();
        let expected = |slot| HeapError::SlotOutOfRange { slot, capacity: 6 };

        assert_eq!(heap.add(6, 1), Err(expected(6)));
        assert_eq!(heap.add(usize::MAX, 1), Err(expected(usize::MAX)));
        assert_eq!(heap.remove(6), Err(expected(6)));
        assert_eq!(heap.set(6, 1), Err(expected(6)));
        assert_eq!(heap.get(6), Err(expected(6)));
        assert!(!heap.contains(6));

        assert_eq!(heap.len(), 6);
        assert_eq!(heap.peek(), Ok(&10));
        assert!(heap.verify_invariants());
    }

    #[test]
    fn test_swap_keeps_index_arrays_inverse() {
        let mut heap = sample();
        for (i, j) in [(0, 5), (1, 4), (2, 3), (0, 0), (3, 1)] {
            heap.swap(i, j);
            for position in 0..heap.len() {
                assert_eq!(heap.position_of[heap.slot_at[position]], position);
            }
        }
    }

    #[test]
    fn test_remove_last_position() {
        let mut heap = IndexedBinaryHeap::new(3);
        heap.add(0, 1).unwrap();
        heap.add(1, 2).unwrap();
        let last_slot = heap.slot_at[heap.len() - 1];

        assert!(heap.remove(last_slot).unwrap().is_some());
        assert_eq!(heap.len(), 1);
        assert!(heap.verify_invariants());
    }

    #[test]
    fn test_remove_moves_last_upward() {
        // The last element can belong above the hole when it comes from a
        // different subtree.
        let mut heap = IndexedBinaryHeap::new(7);
        for (slot, value) in [(0, 0), (1, 10), (2, 1), (3, 11), (4, 12), (5, 2), (6, 3)] {
            heap.add(slot, value).unwrap();
        }
        assert_eq!(heap.remove(3), Ok(Some(11)));
        assert!(heap.verify_invariants());
        assert_eq!(heap.position_of[6], 1);
    }

    #[test]
    fn test_max_heap() {
        let mut heap = IndexedBinaryHeap::with_comparator(5, Reversed(Natural));
        for (slot, value) in [(0, 3), (1, 9), (2, 1), (3, 7)] {
            heap.add(slot, value).unwrap();
        }
        assert_eq!(heap.peek_entry(), Ok((1, &9)));
        heap.set(2, 10).unwrap();
        assert_eq!(heap.poll(), Ok(10));
        assert_eq!(heap.poll(), Ok(9));
        assert_eq!(heap.poll(), Ok(7));
        assert_eq!(heap.poll(), Ok(3));
    }

    #[test]
    fn test_clear() {
        let mut heap = sample();
        heap.clear();
        assert!(heap.is_empty());
        assert!((0..6).all(|slot| !heap.contains(slot)));
        assert_eq!(heap.add(3, 1), Ok(true));
        assert!(heap.verify_invariants());
    }

    #[test]
    fn test_iter_starts_at_extremum() {
        let heap = sample();
        let entries: Vec<_> = heap.iter().collect();
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0], (4, &10));

        let mut values: Vec<i32> = entries.iter().map(|(_, v)| **v).collect();
        values.sort_unstable();
        assert_eq!(values, vec![10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn test_display_tree() {
        let mut heap = IndexedBinaryHeap::new(4);
        heap.add(0, 3).unwrap();
        heap.add(1, 2).unwrap();
        heap.add(2, 1).unwrap();
        heap.add(3, 4).unwrap();

        // positions: 0 -> slot 2, 1 -> slot 0, 2 -> slot 1, 3 -> slot 3
        assert_eq!(
            heap.to_string(),
            "2(1)\n    0(3)\n        3(4)\n    1(2)"
        );
        assert_eq!(IndexedBinaryHeap::<i32>::new(1).to_string(), "");
    }

    #[test]
    fn test_sift_down_tie_prefers_right() {
        let mut heap = IndexedBinaryHeap::new(4);
        for (slot, value) in [(0, 1), (1, 5), (2, 5), (3, 9)] {
            heap.add(slot, value).unwrap();
        }

        // 9 lands on the root and meets two equal children
        assert_eq!(heap.poll(), Ok(1));
        assert_eq!(heap.peek_entry(), Ok((2, &5)));
        assert_eq!(heap.position_of[1], 1);
        assert_eq!(heap.position_of[3], 2);
        assert!(heap.verify_invariants());
    }

    #[test]
    fn test_remove_equal_to_last_stays_put() {
        let mut heap = IndexedBinaryHeap::new(3);
        for (slot, value) in [(0, 1), (1, 2), (2, 2)] {
            heap.add(slot, value).unwrap();
        }

        assert_eq!(heap.remove(1), Ok(Some(2)));
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.position_of[0], 0);
        assert_eq!(heap.position_of[2], 1);
        assert_eq!(heap.peek_entry(), Ok((0, &1)));
        assert!(heap.verify_invariants());
    }

    #[test]
    fn test_ascending_and_descending_insertion() {
        let mut heap = IndexedBinaryHeap::new(100);
        for i in 0..100 {
            heap.add(i, i).unwrap();
        }
        for i in 0..100 {
            assert_eq!(heap.poll_entry(), Ok((i, i)));
        }

        for i in (0..100).rev() {
            heap.add(i, i).unwrap();
        }
        for i in 0..100 {
            assert_eq!(heap.poll(), Ok(i));
        }
    }
}

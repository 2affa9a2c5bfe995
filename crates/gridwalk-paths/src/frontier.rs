//! Min-priority frontier shared by Dijkstra and A*.

use std::collections::BinaryHeap;

/// A queued node, ordered by `key` and then by insertion order so that
/// entries with equal keys pop first-in first-out.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct QueueEntry {
    pub(crate) idx: usize,
    pub(crate) key: i32,
    pub(crate) seq: u64,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest (key, seq).
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority frontier with a membership set.
///
/// Lowering the key of a resident node pushes a second entry; the
/// superseded one is skipped when it surfaces.
pub(crate) struct Frontier {
    heap: BinaryHeap<QueueEntry>,
    resident: Vec<bool>,
    keys: Vec<i32>,
    counter: u64,
}

impl Frontier {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            resident: vec![false; len],
            keys: vec![0; len],
            counter: 0,
        }
    }

    /// Queue `idx` with `key`, replacing any key it already had.
    pub(crate) fn push(&mut self, idx: usize, key: i32) {
        self.resident[idx] = true;
        self.keys[idx] = key;
        self.heap.push(QueueEntry {
            idx,
            key,
            seq: self.counter,
        });
        self.counter += 1;
    }

    /// Pop the resident node with the smallest key.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        while let Some(entry) = self.heap.pop() {
            if !self.resident[entry.idx] || self.keys[entry.idx] != entry.key {
                continue;
            }
            self.resident[entry.idx] = false;
            return Some(entry.idx);
        }
        None
    }

    #[inline]
    pub(crate) fn contains(&self, idx: usize) -> bool {
        self.resident[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_smallest_key_first() {
        let mut f = Frontier::new(4);
        f.push(0, 3);
        f.push(1, 1);
        f.push(2, 2);
        assert_eq!(f.pop(), Some(1));
        assert_eq!(f.pop(), Some(2));
        assert_eq!(f.pop(), Some(0));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn equal_keys_pop_in_insertion_order() {
        let mut f = Frontier::new(4);
        f.push(3, 5);
        f.push(0, 5);
        f.push(2, 5);
        assert_eq!(f.pop(), Some(3));
        assert_eq!(f.pop(), Some(0));
        assert_eq!(f.pop(), Some(2));
    }

    #[test]
    fn lowered_key_supersedes_old_entry() {
        let mut f = Frontier::new(3);
        f.push(0, 9);
        f.push(1, 4);
        f.push(0, 2);
        assert!(f.contains(0));
        assert_eq!(f.pop(), Some(0));
        assert!(!f.contains(0));
        assert_eq!(f.pop(), Some(1));
        // The stale (0, 9) entry is discarded.
        assert_eq!(f.pop(), None);
    }
}

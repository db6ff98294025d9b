//! Candidate edge queue.
//!
//! `BinaryHeap` has no decrease-key, so a node may be queued several times.
//! Entries whose target has already been visited are dropped when popped.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use mst_core::{NodeId, Weight};

/// A candidate edge `from -> to`. `from` is `None` only for the root seed.
///
/// Ordered so that the heap yields the lowest weight first, and among equal
/// weights the entry pushed earliest.
#[derive(Debug, Clone, Copy)]
pub struct FrontierEntry {
    pub weight: Weight,
    pub from: Option<NodeId>,
    pub to: NodeId,
    seq: u64,
}

impl FrontierEntry {
    /// Insertion sequence number (0 for the seed).
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Min-first priority queue of candidate edges.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A frontier holding only the zero-weight root entry for `start`.
    pub fn seeded(start: NodeId) -> Self {
        let mut frontier = Self::new();
        frontier.push(0.0, None, start);
        frontier
    }

    pub fn push(&mut self, weight: Weight, from: Option<NodeId>, to: NodeId) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(FrontierEntry {
            weight,
            from,
            to,
            seq,
        });
    }

    /// Remove and return the cheapest entry.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

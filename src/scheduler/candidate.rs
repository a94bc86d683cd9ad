//! Max-first candidate queue shared by both scheduling passes.
//!
//! Candidates are popped in strictly descending score order. Equal scores
//! resolve by insertion order (earlier push wins), so a run is reproducible
//! for a given input ordering.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct Scored<T> {
    score: f64,
    seq: usize,
    item: T,
}

impl<T> PartialEq for Scored<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Scored<T> {}

impl<T> PartialOrd for Scored<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Scored<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: higher score first, then lower seq.
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Priority queue of scored candidates.
pub(crate) struct CandidateQueue<T> {
    heap: BinaryHeap<Scored<T>>,
    next_seq: usize,
}

impl<T> CandidateQueue<T> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub(crate) fn push(&mut self, score: f64, item: T) {
        self.heap.push(Scored {
            score,
            seq: self.next_seq,
            item,
        });
        self.next_seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|s| s.item)
    }

    /// Pops up to `limit` candidates, skipping any whose key was already taken.
    ///
    /// A proctor with several availability windows overlapping one session
    /// yields several candidates; only the best-scoring one is kept.
    pub(crate) fn select_distinct<K, F>(mut self, limit: usize, key: F) -> Vec<T>
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        let mut selected: Vec<T> = Vec::with_capacity(limit);
        while selected.len() < limit {
            let Some(item) = self.pop() else { break };
            let k = key(&item);
            if selected.iter().any(|s| key(s) == k) {
                continue;
            }
            selected.push(item);
        }
        selected
    }
}

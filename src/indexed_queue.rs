//! A binary min-heap with a position index, giving `O(log n)` decrease-key.
//!
//! [BinaryHeap](std::collections::BinaryHeap) cannot change the priority of an entry in place,
//! so searches built on it push duplicates and skip stale entries on pop. This queue instead
//! tracks where every key lives in the heap array and moves it when its priority changes.
use core::cmp::Ordering;
use fxhash::FxHashMap;
use std::hash::Hash;

use crate::error::{PathingError, Result};

#[derive(Clone, Debug)]
struct HeapEntry<K, P> {
    priority: P,
    /// Insertion counter, breaks ties so that the oldest entry pops first.
    sequence: u64,
    key: K,
}

impl<K, P: PartialOrd> HeapEntry<K, P> {
    fn precedes(&self, other: &Self) -> bool {
        // Incomparable priorities (NaN) are treated as equal
        match self
            .priority
            .partial_cmp(&other.priority)
            .unwrap_or(Ordering::Equal)
        {
            Ordering::Equal => self.sequence < other.sequence,
            ord => ord == Ordering::Less,
        }
    }
}

/// Min-priority queue holding at most one entry per key.
#[derive(Clone, Debug)]
pub struct IndexedPriorityQueue<K, P> {
    heap: Vec<HeapEntry<K, P>>,
    positions: FxHashMap<K, usize>,
    next_sequence: u64,
}

impl<K, P> Default for IndexedPriorityQueue<K, P> {
    fn default() -> Self {
        IndexedPriorityQueue {
            heap: Vec::new(),
            positions: FxHashMap::default(),
            next_sequence: 0,
        }
    }
}

impl<K, P> IndexedPriorityQueue<K, P>
where
    K: Eq + Hash + Clone,
    P: PartialOrd + Copy,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// Current priority of `key`, if it is queued.
    pub fn priority(&self, key: &K) -> Option<P> {
        self.positions.get(key).map(|&pos| self.heap[pos].priority)
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.positions.clear();
    }

    /// Inserts `key`. Fails with [PathingError::DuplicateKey] if it is already queued; use
    /// [decrease_key](Self::decrease_key) to change its priority instead.
    pub fn push(&mut self, key: K, priority: P) -> Result<()> {
        if self.positions.contains_key(&key) {
            return Err(PathingError::DuplicateKey);
        }
        let pos = self.heap.len();
        let sequence = self.bump_sequence();
        self.positions.insert(key.clone(), pos);
        self.heap.push(HeapEntry {
            priority,
            sequence,
            key,
        });
        self.sift_up(pos);
        Ok(())
    }

    /// Gives `key` a new priority. A strictly lower priority is ordered as if the entry was
    /// removed and pushed again, so among its new ties it counts as the newest. An equal
    /// priority keeps the entry's place, so it never pops later than before. Callers are
    /// expected to only lower priorities, but raising one leaves the heap consistent as well.
    pub fn decrease_key(&mut self, key: &K, priority: P) -> Result<()> {
        let pos = *self.positions.get(key).ok_or(PathingError::NotFound)?;
        if priority < self.heap[pos].priority {
            self.heap[pos].sequence = self.bump_sequence();
        }
        self.heap[pos].priority = priority;
        let pos = self.sift_up(pos);
        self.sift_down(pos);
        Ok(())
    }

    /// Returns the entry with the smallest priority without removing it.
    pub fn peek_min(&self) -> Option<(&K, P)> {
        self.heap.first().map(|e| (&e.key, e.priority))
    }

    /// Removes and returns the entry with the smallest priority. Ties go to the entry that
    /// was pushed (or lowered to its priority) first.
    pub fn pop_min(&mut self) -> Result<(K, P)> {
        if self.heap.is_empty() {
            return Err(PathingError::Empty);
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop().ok_or(PathingError::Empty)?;
        self.positions.remove(&entry.key);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok((entry.key, entry.priority))
    }

    fn bump_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        sequence
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        for pos in [a, b] {
            if let Some(slot) = self.positions.get_mut(&self.heap[pos].key) {
                *slot = pos;
            }
        }
    }

    fn sift_up(&mut self, mut pos: usize) -> usize {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.heap[pos].precedes(&self.heap[parent]) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
        pos
    }

    fn sift_down(&mut self, mut pos: usize) -> usize {
        let n = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut smallest = pos;
            if left < n && self.heap[left].precedes(&self.heap[smallest]) {
                smallest = left;
            }
            if right < n && self.heap[right].precedes(&self.heap[smallest]) {
                smallest = right;
            }
            if smallest == pos {
                return pos;
            }
            self.swap(pos, smallest);
            pos = smallest;
        }
    }
}

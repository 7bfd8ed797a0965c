//! Deadline index — min-heap over task positions, earliest deadline on top.

use chrono::NaiveDateTime;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug, Clone)]
struct QueueEntry {
    deadline: NaiveDateTime,
    seq: u64,
    // Position in the scheduler's flat task list.
    slot: usize,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.seq == other.seq
    }
}
impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is max-heap.
        // We want the earliest deadline first, then the earliest insert.
        other
            .deadline
            .cmp(&self.deadline)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Auxiliary index kept next to the scheduler's storage.
///
/// Entries are never removed: the scheduler only appends, so every slot
/// stays valid for the lifetime of the index.
#[derive(Debug, Clone, Default)]
pub struct DeadlineQueue {
    heap: BinaryHeap<QueueEntry>,
    seq: u64,
}

impl DeadlineQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, deadline: NaiveDateTime, slot: usize) {
        self.seq += 1;
        self.heap.push(QueueEntry {
            deadline,
            seq: self.seq,
            slot,
        });
    }

    /// Slot of the task with the earliest deadline (ties: first inserted).
    pub fn peek_slot(&self) -> Option<usize> {
        self.heap.peek().map(|e| e.slot)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

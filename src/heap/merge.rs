//! Heap-based merging of sorted sequences

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use super::{HeapKey, MinHeap};
use crate::base::Value;

/// A value together with the sequence (source) and offset (position) it
/// was read from
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapItem {
    pub value: Value,
    pub source: usize,
    pub position: usize,
}

impl HeapItem {
    /// An item whose origin does not matter
    pub fn new(value: Value) -> Self {
        Self {
            value,
            source: 0,
            position: 0,
        }
    }
}

impl HeapKey for HeapItem {
    type Key = Value;

    #[inline]
    fn key(&self) -> Value {
        self.value
    }
}

impl fmt::Display for HeapItem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}; {}@{})", self.value, self.source, self.position)
    }
}

/// Min-heap of items, ordered by value only
pub type IndexedMinHeap = MinHeap<HeapItem>;

/// Lazily merges k ascending sequences
///
/// The heap holds at most one item per sequence: the smallest value not
/// yet returned. Equal values coming from different sequences are returned
/// in no particular order.
pub struct SortedMerge<'a, S> {
    sequences: &'a [S],
    heap: IndexedMinHeap,
    remaining: usize,
}

impl<'a, S: AsRef<[Value]>> SortedMerge<'a, S> {
    pub fn new(sequences: &'a [S]) -> Self {
        let mut heap = IndexedMinHeap::with_capacity(sequences.len());
        let mut remaining = 0;

        // Seed with the head of each sequence
        for (source, sequence) in sequences.iter().enumerate() {
            let sequence = sequence.as_ref();
            remaining += sequence.len();
            match sequence.first() {
                Some(&value) => heap.push(HeapItem {
                    value,
                    source,
                    position: 0,
                }),
                None => debug!("Sequence {} is empty, not seeding", source),
            }
        }

        debug!(
            "Merging {} values from {} sequences",
            remaining,
            sequences.len()
        );

        Self {
            sequences,
            heap,
            remaining,
        }
    }
}

impl<S: AsRef<[Value]>> Iterator for SortedMerge<'_, S> {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        let item = self.heap.pop()?;
        self.remaining -= 1;

        let position = item.position + 1;
        if let Some(&value) = self.sequences[item.source].as_ref().get(position) {
            self.heap.push(HeapItem {
                value,
                source: item.source,
                position,
            });
        }

        Some(item.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<S: AsRef<[Value]>> ExactSizeIterator for SortedMerge<'_, S> {}

/// Merges multiple sorted sequences into a single sorted one
///
/// TIME COMPLEXITY: O(N log k) where N is the total number of elements and
/// k the number of sequences, which beats repeated pairwise merging once
/// k > 2.
///
/// EXAMPLE: `[[1, 3], [2], [4, 5]]` gives `[1, 2, 3, 4, 5]`
pub fn merge_sorted_sequences<S: AsRef<[Value]>>(sequences: &[S]) -> Vec<Value> {
    SortedMerge::new(sequences).collect()
}

/**
 * EPIJ 10.3: Sort an almost-sorted sequence where each number is at most k
 * away from its correctly sorted position.
 *
 * The smallest remaining value is always among the next k+1 ones, so a
 * min-heap over a window of k+1 values is enough: push the next value, pop
 * the minimum, and drain the heap once the input runs out.
 *
 * The distance guarantee is not checked: when it does not hold, the output
 * is not sorted.
 *
 * Time Complexity: O(n log k)
 * Space Complexity: O(k)
 */
pub fn sort_almost_sorted(sequence: &[Value], k: usize) -> Vec<Value> {
    let window = k.saturating_add(1).min(sequence.len());
    let (head, tail) = sequence.split_at(window);

    let mut heap: IndexedMinHeap = head.iter().map(|&value| HeapItem::new(value)).collect();
    let mut sorted = Vec::with_capacity(sequence.len());

    for &value in tail {
        if let Some(min) = heap.pop() {
            sorted.push(min.value);
        }
        heap.push(HeapItem::new(value));
    }

    sorted.extend(heap.drain_ordered().map(|item| item.value));
    sorted
}

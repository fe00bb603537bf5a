//! Bounded heaps for tracking the top-K elements of a stream.
//!
//! A bounded heap keeps at most `capacity` elements: whenever an insertion
//! overflows it, the root is evicted. With [`MinFirst`] ordering the root
//! is the smallest element, so the heap retains the K largest values; with
//! [`MaxFirst`] it retains the K smallest. Memory is O(K) instead of the
//! O(N) required by sorting everything.

use log::debug;

use super::{Heap, HeapOrder, MaxFirst, MinFirst};
use crate::base::{Len, Value};

/// A heap capped at a fixed capacity
#[derive(Debug, Clone)]
pub struct BoundedHeap<T, O> {
    heap: Heap<T, O>,
    capacity: usize,
}

/// Retains the largest values (evicts the minimum)
pub type BoundedMinHeap<T> = BoundedHeap<T, MinFirst>;

/// Retains the smallest values (evicts the maximum)
pub type BoundedMaxHeap<T> = BoundedHeap<T, MaxFirst>;

impl<T, O> BoundedHeap<T, O> {
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: Heap::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    /// The element that would be evicted next
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// Iterates over the retained elements, in no particular order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.heap.iter()
    }
}

impl<T, O: HeapOrder<T>> BoundedHeap<T, O> {
    /// Adds a new element, and returns the evicted one if the capacity was
    /// exceeded (possibly the element itself)
    pub fn add(&mut self, value: T) -> Option<T> {
        self.heap.push(value);
        if self.heap.len() > self.capacity {
            debug!(
                "Heap over capacity ({} > {}), evicting the root",
                self.heap.len(),
                self.capacity
            );
            return self.heap.pop();
        }
        None
    }

    /// Returns the eviction threshold once the heap is full
    pub fn threshold(&self) -> Option<&T> {
        if self.is_full() {
            self.heap.peek()
        } else {
            None
        }
    }

    /// Extracts all the elements, root first (ascending for a min-heap,
    /// descending for a max-heap); the heap is left empty
    pub fn drain(&mut self) -> Vec<T> {
        self.heap.drain_ordered().collect()
    }

    pub fn satisfies_heap_property(&self) -> bool {
        self.heap.satisfies_heap_property()
    }
}

impl<T, O> Len for BoundedHeap<T, O> {
    fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T, O: HeapOrder<T>> Extend<T> for BoundedHeap<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

/// Returns the `n` largest values, in ascending order
///
/// Time Complexity: O(m log n) for m values
/// Space Complexity: O(n)
pub fn n_largest(values: &[Value], n: usize) -> Vec<Value> {
    let mut heap = BoundedMinHeap::new(n);
    heap.extend(values.iter().copied());
    heap.drain()
}

/// Returns the `n` smallest values, in ascending order
///
/// Uses a max-heap so that the largest retained value is the one evicted
/// when a smaller value comes in.
pub fn n_smallest(values: &[Value], n: usize) -> Vec<Value> {
    let mut heap = BoundedMaxHeap::new(n);
    heap.extend(values.iter().copied());
    let mut smallest = heap.drain();
    smallest.reverse();
    smallest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_content(heap: &BoundedMinHeap<Value>) -> Vec<Value> {
        let mut content: Vec<Value> = heap.iter().copied().collect();
        content.sort();
        content
    }

    #[test]
    fn test_add_single_element() {
        let mut heap = BoundedMinHeap::new(5);
        assert_eq!(heap.add(10), None);
        assert_eq!(heap.len(), 1);
    }

    #[test]
    fn test_add_multiple_elements() {
        let mut heap = BoundedMinHeap::new(5);
        heap.extend([10, 20, 5, 15, 25]);

        assert_eq!(heap.len(), 5);
        assert_eq!(sorted_content(&heap), vec![5, 10, 15, 20, 25]);
    }

    #[test]
    fn test_add_exceeding_size() {
        let mut heap = BoundedMinHeap::new(3);
        heap.extend([10, 20, 5]);

        // The smallest value goes away
        assert_eq!(heap.add(15), Some(5));
        assert_eq!(heap.len(), 3);
        assert_eq!(sorted_content(&heap), vec![10, 15, 20]);
        assert!(heap.satisfies_heap_property());
    }

    #[test]
    fn test_threshold() {
        let mut heap = BoundedMinHeap::new(2);
        heap.add(4);
        assert_eq!(heap.threshold(), None);
        heap.add(8);
        assert_eq!(heap.threshold(), Some(&4));
        heap.add(6);
        assert_eq!(heap.threshold(), Some(&6));
    }

    #[test]
    fn test_zero_capacity() {
        let mut heap = BoundedMaxHeap::new(0);
        assert_eq!(heap.add(3), Some(3));
        assert!(heap.is_empty());
        assert!(heap.drain().is_empty());
    }

    #[test]
    fn test_drain_empties() {
        let mut heap = BoundedMaxHeap::new(3);
        heap.extend([1, 9, 4, 7]);
        assert_eq!(heap.drain(), vec![7, 4, 1]);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_n_smallest() {
        assert_eq!(n_smallest(&[7, 10, 4, 3, 20, 15], 3), vec![3, 4, 7]);
        assert_eq!(
            n_smallest(&[7, 10, 4, 3, 20, 15], 10),
            vec![3, 4, 7, 10, 15, 20]
        );
        assert!(n_smallest(&[], 3).is_empty());
        assert!(n_smallest(&[7, 10, 4, 3, 20, 15], 0).is_empty());
    }

    #[test]
    fn test_n_largest() {
        assert_eq!(n_largest(&[7, 10, 4, 3, 20, 15], 3), vec![10, 15, 20]);
        assert_eq!(
            n_largest(&[7, 10, 4, 3, 20, 15], 10),
            vec![3, 4, 7, 10, 15, 20]
        );
        assert!(n_largest(&[], 3).is_empty());
        assert!(n_largest(&[7, 10, 4, 3, 20, 15], 0).is_empty());
    }
}

//! Classic algorithm exercises built around a generic binary heap
//!
//! The [`heap`] module holds the heap engine together with the algorithms
//! that rely on it (bounded selection, k-way merge, k-closest points and
//! running median). The other modules are standalone exercises on arrays,
//! sorts, linked lists, graphs, roman numerals and strings.

pub mod arrays;
pub mod base;
pub mod graphs;
pub mod heap;
pub mod lists;
pub mod roman;
pub mod sorts;
pub mod strings;

pub use heap::bounded::{n_largest, n_smallest, BoundedHeap, BoundedMaxHeap, BoundedMinHeap};
pub use heap::closest::{k_closest, Star};
pub use heap::median::{running_median, MedianTracker};
pub use heap::merge::{merge_sorted_sequences, sort_almost_sorted, HeapItem};
pub use heap::{Heap, MaxHeap, MinHeap};

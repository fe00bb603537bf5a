//! Array-backed binary heap shared by the selection and merge algorithms
//!
//! For an element at index `i`, its children live at `2i + 1` and `2i + 2`
//! and its parent at `(i - 1) / 2`. The ordering `O` decides which of two
//! elements is closer to the root; the array itself is not sorted.
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `peek`    | O(1)       |

use std::marker::PhantomData;

use crate::base::Len;

pub mod bounded;
pub mod closest;
pub mod median;
pub mod merge;

/// Key used to order elements within a heap
pub trait HeapKey {
    type Key: PartialOrd;

    fn key(&self) -> Self::Key;
}

macro_rules! self_keyed {
    ($($t:ty),*) => {
        $(
            impl HeapKey for $t {
                type Key = $t;

                #[inline]
                fn key(&self) -> $t {
                    *self
                }
            }
        )*
    };
}

self_keyed!(i32, i64, u32, u64, usize, f32, f64);

/// Decides which of two elements should sit closer to the root
pub trait HeapOrder<T> {
    /// True if `a` must be extracted before `b`
    fn precedes(a: &T, b: &T) -> bool;
}

/// Smallest key at the root
#[derive(Debug, Clone, Copy, Default)]
pub struct MinFirst;

/// Largest key at the root
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxFirst;

impl<T: HeapKey> HeapOrder<T> for MinFirst {
    #[inline]
    fn precedes(a: &T, b: &T) -> bool {
        a.key() < b.key()
    }
}

impl<T: HeapKey> HeapOrder<T> for MaxFirst {
    #[inline]
    fn precedes(a: &T, b: &T) -> bool {
        a.key() > b.key()
    }
}

/// Binary heap parameterized by its ordering
#[derive(Debug, Clone)]
pub struct Heap<T, O> {
    data: Vec<T>,
    order: PhantomData<O>,
}

pub type MinHeap<T> = Heap<T, MinFirst>;
pub type MaxHeap<T> = Heap<T, MaxFirst>;

impl<T, O> Heap<T, O> {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            order: PhantomData,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            order: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the root, i.e. the next element to be popped
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterates over the elements in storage (not extraction) order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T, O: HeapOrder<T>> Heap<T, O> {
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes the root
    pub fn pop(&mut self) -> Option<T> {
        let last = self.data.len().checked_sub(1)?;
        self.data.swap(0, last);
        let root = self.data.pop();
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        root
    }

    /// Pops every element, in heap order; the heap is empty afterwards
    pub fn drain_ordered(&mut self) -> DrainOrdered<'_, T, O> {
        DrainOrdered { heap: self }
    }

    pub fn into_ordered_vec(mut self) -> Vec<T> {
        self.drain_ordered().collect()
    }

    /// Checks that no child precedes its parent
    pub fn satisfies_heap_property(&self) -> bool {
        (1..self.data.len()).all(|ix| !O::precedes(&self.data[ix], &self.data[(ix - 1) / 2]))
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !O::precedes(&self.data[index], &self.data[parent]) {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut first = index;

            if left < len && O::precedes(&self.data[left], &self.data[first]) {
                first = left;
            }
            if right < len && O::precedes(&self.data[right], &self.data[first]) {
                first = right;
            }
            if first == index {
                break;
            }
            self.data.swap(index, first);
            index = first;
        }
    }
}

impl<T, O> Default for Heap<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, O> Len for Heap<T, O> {
    fn len(&self) -> usize {
        self.data.len()
    }
}

impl<T, O: HeapOrder<T>> Extend<T> for Heap<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, O: HeapOrder<T>> FromIterator<T> for Heap<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

/// Iterator returned by [`Heap::drain_ordered`]
pub struct DrainOrdered<'a, T, O: HeapOrder<T>> {
    heap: &'a mut Heap<T, O>,
}

impl<T, O: HeapOrder<T>> Iterator for DrainOrdered<'_, T, O> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl<T, O: HeapOrder<T>> ExactSizeIterator for DrainOrdered<'_, T, O> {}

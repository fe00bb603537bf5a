//! Comparison sorts
//!
//!  |-----------|----------|----------|----------|---------|----------|
//!  | SORT      | BEST     | AVERAGE  | WORST    | SPACE   | IN PLACE |
//!  |-----------|----------|----------|----------|---------|----------|
//!  | Bubble    | O(n)     | O(n^2)   | O(n^2)   | O(1)    |   YES    |
//!  | Selection | O(n^2)   | O(n^2)   | O(n^2)   | O(1)    |   YES    |
//!  | Quick     | O(nlogn) | O(nlogn) | O(n^2)   | O(logn) |   YES    |
//!  | Merge     | O(nlogn) | O(nlogn) | O(nlogn) | Depends |   NO     |
//!  | Heap      | O(nlogn) | O(nlogn) | O(nlogn) | O(n)    |   NO     |
//!  |-----------|----------|----------|----------|---------|----------|

use crate::heap::{HeapKey, MinHeap};

pub fn bubble_sort<T: Ord>(input: &mut [T]) {
    let n = input.len();
    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if input[j] > input[j + 1] {
                input.swap(j, j + 1);
                swapped = true;
            }
        }
        // Already sorted
        if !swapped {
            break;
        }
    }
}

pub fn selection_sort<T: Ord>(input: &mut [T]) {
    let n = input.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_ix = i;
        for j in i + 1..n {
            if input[j] < input[min_ix] {
                min_ix = j;
            }
        }
        input.swap(i, min_ix);
    }
}

/// Top-down merge sort; stable
pub fn merge_sort<T: Ord + Clone>(input: &mut [T]) {
    if input.len() < 2 {
        return;
    }

    let mid = input.len() / 2;
    let mut left = input[..mid].to_vec();
    let mut right = input[mid..].to_vec();

    merge_sort(&mut left);
    merge_sort(&mut right);

    merge(input, &left, &right);
}

fn merge<T: Ord + Clone>(output: &mut [T], left: &[T], right: &[T]) {
    let (mut i, mut j) = (0, 0);
    for slot in output.iter_mut() {
        // Take from the left on ties to stay stable
        if j >= right.len() || (i < left.len() && left[i] <= right[j]) {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}

/// Quick sort around the middle element, with a three-way partition so
/// that values equal to the pivot are kept together
pub fn quick_sort<T: Ord + Clone>(input: &mut [T]) {
    if input.len() < 2 {
        return;
    }

    let pivot = input[input.len() / 2].clone();

    // Dijkstra's partition: [0, lt) < pivot, [lt, i) == pivot, (gt, len) > pivot
    let (mut lt, mut i, mut gt) = (0, 0, input.len());
    while i < gt {
        if input[i] < pivot {
            input.swap(lt, i);
            lt += 1;
            i += 1;
        } else if input[i] > pivot {
            gt -= 1;
            input.swap(i, gt);
        } else {
            i += 1;
        }
    }

    quick_sort(&mut input[..lt]);
    quick_sort(&mut input[gt..]);
}

/// Sorts by pushing everything in a min-heap and draining it
pub fn heap_sort<T: HeapKey + Clone>(input: &mut [T]) {
    let mut heap: MinHeap<T> = input.iter().cloned().collect();
    for (slot, value) in input.iter_mut().zip(heap.drain_ordered()) {
        *slot = value;
    }
}

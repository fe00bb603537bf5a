//! Array scanning exercises

use std::collections::HashSet;

use derivative::Derivative;
use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};
use simple_error::SimpleError;

use crate::base::Value;
use crate::sorts::quick_sort;

/**
 * Get the min and max using about 3n/2 comparisons (as opposed to 2n)
 *
 * Start from the first element (or the first pair when the length is even),
 * then take the remaining elements in pairs: compare them together, and only
 * the smaller against the min and the larger against the max.
 *
 * TIME COMPLEXITY: O(3n/2)
 */
pub fn min_max(values: &[Value]) -> Option<(Value, Value)> {
    let (&first, rest) = values.split_first()?;

    let (mut min, mut max, pairs) = if values.len() % 2 == 0 {
        let second = rest[0];
        (first.min(second), first.max(second), &rest[1..])
    } else {
        (first, first, rest)
    };

    for pair in pairs.chunks_exact(2) {
        let (small, large) = if pair[0] > pair[1] {
            (pair[1], pair[0])
        } else {
            (pair[0], pair[1])
        };
        if small < min {
            min = small;
        }
        if large > max {
            max = large;
        }
    }

    Some((min, max))
}

/**
 * Given an array, determine whether it contains two numbers whose sum equals
 * a target: sort, then move two pointers inwards.
 *
 * The input gets sorted as a side effect.
 *
 * TIME COMPLEXITY: O(n log n) due to the sort
 */
pub fn has_pair_with_sum_sorted(values: &mut [Value], target: Value) -> bool {
    quick_sort(values);

    if values.is_empty() {
        return false;
    }

    // Widened so that extreme values cannot overflow
    let target = target as i128;
    let (mut left, mut right) = (0, values.len() - 1);
    while left < right {
        let sum = values[left] as i128 + values[right] as i128;
        if sum == target {
            return true;
        } else if sum < target {
            left += 1;
        } else {
            right -= 1;
        }
    }
    false
}

/// Sum of two, remembering the values seen so far
///
/// TIME COMPLEXITY: O(n)
/// SPACE COMPLEXITY: O(n)
pub fn has_pair_with_sum(values: &[Value], target: Value) -> bool {
    let mut seen = HashSet::with_capacity(values.len());
    for &value in values {
        // No complement exists when the difference does not fit
        if let Some(complement) = target.checked_sub(value) {
            if seen.contains(&complement) {
                return true;
            }
        }
        seen.insert(value);
    }
    false
}

#[derive(Derivative, Clone)]
#[derivative(Default)]
pub struct ShuffleOptions {
    /// Seed for a reproducible shuffle (random if not set)
    #[derivative(Default(value = "None"))]
    pub seed: Option<u64>,
}

/// Randomly shuffles a slice (Fisher-Yates)
///
/// TIME COMPLEXITY: O(n)
pub fn shuffle<T>(values: &mut [T], options: ShuffleOptions) {
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for i in (1..values.len()).rev() {
        // Random index from 0 to i
        let j = rng.gen_range(0..=i);
        values.swap(i, j);
    }
}

/**
 * EPIJ 5.1: The Dutch National Flag Problem
 *
 * Values smaller than the pivot come first, then values equal to it, then
 * larger ones; the relative order of the larger ones is reversed.
 *
 * TIME COMPLEXITY: O(n)
 * SPACE COMPLEXITY: O(n) for the new array
 */
pub fn dutch_flag_partition(values: &[Value], pivot: Value) -> Vec<Value> {
    let mut result = vec![pivot; values.len()];
    let mut low = 0;
    let mut high = values.len();

    for &value in values {
        if value < pivot {
            result[low] = value;
            low += 1;
        } else if value > pivot {
            high -= 1;
            result[high] = value;
        }
    }

    // The slots in [low, high) already hold the pivot
    result
}

/// Dutch flag for the values 0, 1 and 2, by counting them
///
/// Only the first `#0 + #1 + #2` slots are rewritten: if other values are
/// present, the trailing slots keep their previous content.
///
/// TIME COMPLEXITY: O(n)
/// SPACE COMPLEXITY: O(1) since we are rewriting in place
pub fn dutch_flag_sort_in_place(values: &mut [u8]) {
    let mut counts = [0usize; 3];
    for &value in values.iter() {
        if let Some(count) = counts.get_mut(value as usize) {
            *count += 1;
        }
    }

    let mut slots = values.iter_mut();
    for (value, &count) in counts.iter().enumerate() {
        for slot in slots.by_ref().take(count) {
            *slot = value as u8;
        }
    }
}

/**
 * Counting sort for integers in the range 0 to max_range
 *
 * TIME COMPLEXITY: O(n + k)
 * SPACE COMPLEXITY: O(k)
 */
pub fn counting_sort(values: &mut [Value], max_range: usize) -> Result<(), SimpleError> {
    max_range.checked_add(1).ok_or_else(|| {
        SimpleError::new(format!("range 0..={} is too large to count", max_range))
    })?;

    let mut largest: usize = 0;
    for &value in values.iter() {
        match usize::try_from(value) {
            Ok(ix) if ix <= max_range => largest = largest.max(ix),
            _ => {
                return Err(SimpleError::new(format!(
                    "value {} is outside of the range 0..={}",
                    value, max_range
                )))
            }
        }
    }

    // Only the values actually present need a counter
    let mut counts = vec![0usize; if values.is_empty() { 0 } else { largest + 1 }];
    for &value in values.iter() {
        counts[value as usize] += 1;
    }

    let mut ix = 0;
    for (value, &count) in counts.iter().enumerate() {
        for slot in &mut values[ix..ix + count] {
            *slot = value as Value;
        }
        ix += count;
    }
    Ok(())
}

/**
 * EPIJ 11.1: Search a sorted array for first occurrence of an integer
 *
 * TIME COMPLEXITY: O(log n)
 * SPACE COMPLEXITY: O(1)
 */
pub fn find_first_occurrence(values: &[Value], target: Value) -> Option<usize> {
    let (mut low, mut high) = (0, values.len());
    let mut result = None;

    // Search in [low, high)
    while low < high {
        let mid = low + (high - low) / 2;
        if values[mid] == target {
            result = Some(mid);
            // Continue searching in the left half
            high = mid;
        } else if values[mid] < target {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    result
}

/**
 * EPIJ 11.3: Search a cyclically sorted array for its smallest element.
 *
 * Cyclically sorted means it is possible to cyclically shift the entries
 * so that they become sorted, e.g. 378 478 550 631 103 203 220 234 279 368.
 * If A[m] > A[n-1] then the minimum must be in the range [m+1, n-1].
 * Values are assumed to be distinct.
 *
 * Time Complexity: O(log n)
 */
pub fn smallest_in_cyclically_sorted(values: &[Value]) -> Option<Value> {
    if values.is_empty() {
        return None;
    }

    let (mut low, mut high) = (0, values.len() - 1);
    while low < high {
        let mid = low + (high - low) / 2;
        if values[mid] > values[high] {
            low = mid + 1;
        } else {
            // The minimum cannot be in (mid, high]
            high = mid;
        }
    }
    debug!("Smallest element found at index {}", low);
    Some(values[low])
}

pub fn binary_representation(mut number: u64) -> String {
    if number == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while number > 0 {
        digits.push(if number % 2 == 1 { '1' } else { '0' });
        number /= 2;
    }
    digits.iter().rev().collect()
}

/// Merges two sorted slices into a new vector
///
/// TIME COMPLEXITY: O(m + n)
pub fn merge_two_sorted(a: &[Value], b: &[Value]) -> Vec<Value> {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i] < b[j] {
            merged.push(a[i]);
            i += 1;
        } else {
            merged.push(b[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&a[i..]);
    merged.extend_from_slice(&b[j..]);
    merged
}

/**
 * Merges `other` into `target`, whose first `m` values are sorted and which
 * has room for `other.len()` more values.
 *
 * Fill from the back: the largest remaining value of either side goes to
 * the last free slot. Once `other` is exhausted, what is left of `target`
 * is already in place.
 *
 * TIME COMPLEXITY: O(m + n)
 * SPACE COMPLEXITY: O(1)
 */
pub fn merge_into(target: &mut [Value], m: usize, other: &[Value]) -> Result<(), SimpleError> {
    if target.len() < m + other.len() {
        return Err(SimpleError::new(format!(
            "not enough room: {} slots for {} + {} values",
            target.len(),
            m,
            other.len()
        )));
    }

    let (mut i, mut j) = (m, other.len());
    let mut k = m + other.len();
    while j > 0 {
        k -= 1;
        if i > 0 && target[i - 1] > other[j - 1] {
            target[k] = target[i - 1];
            i -= 1;
        } else {
            target[k] = other[j - 1];
            j -= 1;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max() {
        assert_eq!(min_max(&[3, 5, 1, 2, 4, 8]), Some((1, 8)));
        assert_eq!(min_max(&[3, -5, 1, 2, 4]), Some((-5, 4)));
        assert_eq!(min_max(&[7]), Some((7, 7)));
        assert_eq!(min_max(&[9, 2]), Some((2, 9)));
        assert_eq!(min_max(&[]), None);
    }

    #[test]
    fn test_sum_of_two() {
        let mut values = vec![8, 2, 11, 4, -1];
        assert!(has_pair_with_sum_sorted(&mut values, 10));
        assert!(!has_pair_with_sum_sorted(&mut values, 100));
        assert!(!has_pair_with_sum_sorted(&mut [], 0));

        assert!(has_pair_with_sum(&[8, 2, 11, 4, -1], 3));
        assert!(!has_pair_with_sum(&[8, 2, 11, 4, -1], 16));
        // A value cannot be paired with itself
        assert!(!has_pair_with_sum(&[5], 10));
        assert!(has_pair_with_sum(&[5, 5], 10));
    }

    #[test]
    fn test_sum_of_two_extreme_values() {
        assert!(!has_pair_with_sum_sorted(&mut [Value::MAX, 1, 2], 0));
        assert!(!has_pair_with_sum_sorted(&mut [Value::MAX, Value::MAX], Value::MAX));
        assert!(has_pair_with_sum_sorted(&mut [Value::MAX, Value::MIN], -1));

        assert!(!has_pair_with_sum(&[5, 7], Value::MIN));
        assert!(!has_pair_with_sum(&[-5, -7], Value::MAX));
        assert!(has_pair_with_sum(&[Value::MAX, Value::MIN], -1));
    }

    #[test]
    fn test_shuffle() {
        let mut values: Vec<Value> = (0..100).collect();
        shuffle(&mut values, ShuffleOptions { seed: Some(42) });
        assert_ne!(values, (0..100).collect::<Vec<_>>());

        // Same seed, same permutation
        let mut again: Vec<Value> = (0..100).collect();
        shuffle(&mut again, ShuffleOptions { seed: Some(42) });
        assert_eq!(values, again);

        values.sort();
        assert_eq!(values, (0..100).collect::<Vec<_>>());

        let mut empty: Vec<Value> = vec![];
        shuffle(&mut empty, ShuffleOptions::default());
    }

    #[test]
    fn test_dutch_flag() {
        assert_eq!(
            dutch_flag_partition(&[2, 0, 1, 2, 0, 1, 1], 1),
            vec![0, 0, 1, 1, 1, 2, 2]
        );
        assert_eq!(dutch_flag_partition(&[5, 3, 9, 3], 3), vec![3, 3, 9, 5]);

        let mut values = [2, 0, 1, 2, 0, 1, 1];
        dutch_flag_sort_in_place(&mut values);
        assert_eq!(values, [0, 0, 1, 1, 1, 2, 2]);
    }

    #[test]
    fn test_counting_sort() {
        let mut values = vec![4, 1, 3, 4, 0, 2];
        counting_sort(&mut values, 5).unwrap();
        assert_eq!(values, vec![0, 1, 2, 3, 4, 4]);

        assert!(counting_sort(&mut [1, 6], 5).is_err());
        assert!(counting_sort(&mut [-1], 5).is_err());
    }

    #[test]
    fn test_counting_sort_extreme_ranges() {
        let mut values = vec![1];
        assert!(counting_sort(&mut values, usize::MAX).is_err());
        assert_eq!(values, vec![1]);

        // Counters are sized by the values, not by the range
        let mut values = vec![3, 0, 2];
        counting_sort(&mut values, usize::MAX - 1).unwrap();
        assert_eq!(values, vec![0, 2, 3]);

        let mut empty: Vec<Value> = vec![];
        counting_sort(&mut empty, 10).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_first_occurrence() {
        let values = [-14, -10, 2, 108, 108, 243, 285, 285, 285, 401];
        assert_eq!(find_first_occurrence(&values, 108), Some(3));
        assert_eq!(find_first_occurrence(&values, 285), Some(6));
        assert_eq!(find_first_occurrence(&values, -14), Some(0));
        assert_eq!(find_first_occurrence(&values, 3), None);
        assert_eq!(find_first_occurrence(&[], 3), None);
    }

    #[test]
    fn test_cyclically_sorted() {
        assert_eq!(
            smallest_in_cyclically_sorted(&[378, 478, 550, 631, 103, 203, 220, 234, 279, 368]),
            Some(103)
        );
        assert_eq!(smallest_in_cyclically_sorted(&[1, 2, 3]), Some(1));
        assert_eq!(smallest_in_cyclically_sorted(&[2, 3, 1]), Some(1));
        assert_eq!(smallest_in_cyclically_sorted(&[]), None);
    }

    #[test]
    fn test_binary_representation() {
        assert_eq!(binary_representation(0), "0");
        assert_eq!(binary_representation(1), "1");
        assert_eq!(binary_representation(10), "1010");
        assert_eq!(binary_representation(255), "11111111");
    }

    #[test]
    fn test_merge_two_sorted() {
        assert_eq!(merge_two_sorted(&[1, 4, 9], &[2, 3, 10, 11]), vec![1, 2, 3, 4, 9, 10, 11]);
        assert_eq!(merge_two_sorted(&[], &[2]), vec![2]);
    }

    #[test]
    fn test_merge_into() {
        let mut target = [1, 2, 3, 0, 0, 0];
        merge_into(&mut target, 3, &[2, 5, 6]).unwrap();
        assert_eq!(target, [1, 2, 2, 3, 5, 6]);

        let mut target = [0, 0];
        merge_into(&mut target, 0, &[4, 7]).unwrap();
        assert_eq!(target, [4, 7]);

        assert!(merge_into(&mut [1], 1, &[2]).is_err());
    }
}

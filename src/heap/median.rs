/*!
 * EPIJ 10.5: Compute the median of online data.
 *
 * The median divides the collection into two equal parts. When a value is
 * added, the parts change by at most one element, and the element to move
 * is either the largest of the smaller half or the smallest of the larger
 * half. The smaller half lives in a max-heap, the larger half in a
 * min-heap, and both are kept balanced in size.
 *
 * Time Complexity: O(log n) per value
 */
use log::debug;

use super::{MaxHeap, MinHeap};
use crate::base::{Len, Value};

#[derive(Debug, Clone, Default)]
pub struct MedianTracker {
    /// Smaller half; its size is the one of `upper` or one more
    lower: MaxHeap<Value>,
    /// Larger half
    upper: MinHeap<Value>,
}

impl MedianTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value and returns the median of all the values seen so far
    pub fn observe(&mut self, value: Value) -> f64 {
        match self.lower.peek() {
            Some(&lower_max) if value > lower_max => self.upper.push(value),
            _ => self.lower.push(value),
        }
        self.rebalance();

        // lower is never empty after an insertion
        self.median().unwrap_or(value as f64)
    }

    /// The current median, or None if nothing was observed
    ///
    /// The two middle values are summed exactly; the result is then only as
    /// precise as an `f64` (integers above 2^53 get rounded).
    pub fn median(&self) -> Option<f64> {
        let lower_max = *self.lower.peek()?;
        if self.lower.len() > self.upper.len() {
            return Some(lower_max as f64);
        }
        self.upper
            .peek()
            .map(|&upper_min| (lower_max as i128 + upper_min as i128) as f64 / 2.)
    }

    /// Sizes of the lower and upper halves
    pub fn halves(&self) -> (usize, usize) {
        (self.lower.len(), self.upper.len())
    }

    pub fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }

    fn rebalance(&mut self) {
        if self.lower.len() > self.upper.len() + 1 {
            if let Some(value) = self.lower.pop() {
                debug!("Moving {} to the upper half", value);
                self.upper.push(value);
            }
        } else if self.upper.len() > self.lower.len() {
            if let Some(value) = self.upper.pop() {
                debug!("Moving {} to the lower half", value);
                self.lower.push(value);
            }
        }
    }
}

impl Len for MedianTracker {
    fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }
}

impl Extend<Value> for MedianTracker {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        for value in iter {
            self.observe(value);
        }
    }
}

/// Returns the median of each prefix of the stream
pub fn running_median(stream: &[Value]) -> Vec<f64> {
    let mut tracker = MedianTracker::new();
    stream.iter().map(|&value| tracker.observe(value)).collect()
}

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{bounded::BoundedMaxHeap, HeapKey};

/// A point in space, ordered by its distance to the origin
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Star {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Squared distance to the origin; it orders stars like the true
    /// distance does, without taking a square root
    pub fn squared_distance(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
}

impl HeapKey for Star {
    type Key = f64;

    #[inline]
    fn key(&self) -> f64 {
        self.squared_distance()
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

/**
 * EPIJ 10.4: Compute the k closest stars.
 *
 * Keeps a max-heap of at most k stars, always evicting the farthest one.
 * When several stars are at the same distance on the boundary, which one
 * survives depends on the insertion order.
 *
 * Time Complexity: O(n log k)
 * Space Complexity: O(k)
 */
pub fn k_closest(stars: &[Star], k: usize) -> Vec<Star> {
    let mut heap = BoundedMaxHeap::new(k);
    heap.extend(stars.iter().copied());

    // Farthest first, so reverse
    let mut closest = heap.drain();
    closest.reverse();
    closest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stars() -> Vec<Star> {
        vec![
            Star::new(1., 2., 3.),
            Star::new(4., 5., 6.),
            Star::new(0., 0., 0.),
            Star::new(7., 8., 9.),
        ]
    }

    #[test]
    fn test_k_closest_stars() {
        assert_eq!(
            k_closest(&stars(), 2),
            vec![Star::new(0., 0., 0.), Star::new(1., 2., 3.)]
        );
    }

    #[test]
    fn test_k_zero() {
        assert!(k_closest(&stars(), 0).is_empty());
    }

    #[test]
    fn test_k_larger_than_input() {
        let closest = k_closest(&stars(), 10);
        let distances: Vec<f64> = closest.iter().map(Star::squared_distance).collect();
        assert_eq!(distances, vec![0., 14., 77., 194.]);
    }
}

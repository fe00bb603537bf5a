//! Random data generators and checks shared by the tests and benchmarks

pub mod sequences;
pub mod stars;

use ntest::assert_about_eq;

/// Compares two lists of floats, element by element
pub fn assert_floats_eq(observed: &[f64], expected: &[f64]) {
    assert_eq!(
        observed.len(),
        expected.len(),
        "Size differ {} vs {}",
        observed.len(),
        expected.len()
    );
    for (observed, expected) in observed.iter().zip(expected) {
        assert_about_eq!(*observed, *expected);
    }
}

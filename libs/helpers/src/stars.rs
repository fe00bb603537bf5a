use rand::RngCore;
use rand_distr::{Distribution, Normal};

use algo_exercises::heap::closest::Star;

/// Stars scattered around the origin
pub fn random_stars(count: usize, rng: &mut dyn RngCore) -> Vec<Star> {
    let normal = Normal::<f64>::new(0., 50.).unwrap();
    (0..count)
        .map(|_| Star::new(normal.sample(rng), normal.sample(rng), normal.sample(rng)))
        .collect()
}

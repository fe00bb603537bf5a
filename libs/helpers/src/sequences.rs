use log::debug;
use rand::{seq::SliceRandom, Rng, RngCore};
use rand_distr::{Distribution, Normal, Poisson};

use algo_exercises::base::Value;

/// Random values drawn from a normal distribution
pub fn random_values(count: usize, spread: f64, rng: &mut dyn RngCore) -> Vec<Value> {
    let normal = Normal::<f64>::new(0., spread).unwrap();
    (0..count)
        .map(|_| normal.sample(rng).round() as Value)
        .collect()
}

/// Generates `count` ascending sequences, whose lengths follow a Poisson
/// distribution of mean `lambda_length` (empty sequences are possible)
pub fn random_sorted_sequences(
    count: usize,
    lambda_length: f32,
    rng: &mut dyn RngCore,
) -> Vec<Vec<Value>> {
    let poi = Poisson::new(lambda_length).unwrap();

    let sequences: Vec<Vec<Value>> = (0..count)
        .map(|_| {
            let length = poi.sample(rng) as usize;
            let mut sequence = random_values(length, 100., rng);
            sequence.sort();
            sequence
        })
        .collect();

    debug!(
        "Generated {} sequences ({} values)",
        count,
        sequences.iter().map(Vec::len).sum::<usize>()
    );
    sequences
}

/// Returns an ascending sequence where each value was moved at most `k`
/// positions away from its sorted position, together with the sorted one
pub fn almost_sorted(length: usize, k: usize, rng: &mut dyn RngCore) -> (Vec<Value>, Vec<Value>) {
    let mut sorted = Vec::with_capacity(length);
    let mut current: Value = rng.gen_range(-1000..1000);
    for _ in 0..length {
        current += rng.gen_range(0..10);
        sorted.push(current);
    }

    // Shuffling disjoint blocks of k+1 values moves each value by k at most
    let mut shuffled = sorted.clone();
    for block in shuffled.chunks_mut(k.saturating_add(1)) {
        block.shuffle(&mut *rng);
    }

    (shuffled, sorted)
}

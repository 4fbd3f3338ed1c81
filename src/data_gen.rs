//! Synthetic input distributions for the benchmark driver.
//!
//! Every call regenerates from a fixed seed so all algorithms see
//! identical inputs and runs are reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixed seed for reproducible benchmark runs.
const SEED: u64 = 42;

/// The six input shapes the benchmark exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    Random,
    Sorted,
    ReverseSorted,
    NearlySorted,
    ManyDuplicates,
    FewUnique,
}

impl Distribution {
    /// All distributions, in benchmark order.
    pub const ALL: [Distribution; 6] = [
        Distribution::Random,
        Distribution::Sorted,
        Distribution::ReverseSorted,
        Distribution::NearlySorted,
        Distribution::ManyDuplicates,
        Distribution::FewUnique,
    ];

    /// Human-readable label used in console tables and the CSV report.
    pub fn label(self) -> &'static str {
        match self {
            Distribution::Random => "Random",
            Distribution::Sorted => "Sorted",
            Distribution::ReverseSorted => "Reverse Sorted",
            Distribution::NearlySorted => "Nearly Sorted",
            Distribution::ManyDuplicates => "Many Duplicates",
            Distribution::FewUnique => "Few Unique",
        }
    }
}

/// Generate `size` elements of the given distribution.
pub fn generate(size: usize, distribution: Distribution) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(SEED);

    match distribution {
        Distribution::Random => {
            let upper = (size as i32).saturating_mul(10);
            (0..size).map(|_| rng.gen_range(0..=upper)).collect()
        }
        Distribution::Sorted => (0..size as i32).collect(),
        Distribution::ReverseSorted => (0..size).map(|i| (size - i) as i32).collect(),
        Distribution::NearlySorted => {
            let mut data: Vec<i32> = (0..size as i32).collect();
            // Disturb 5% of the elements with random pair swaps.
            for _ in 0..size / 20 {
                let a = rng.gen_range(0..size);
                let b = rng.gen_range(0..size);
                data.swap(a, b);
            }
            data
        }
        Distribution::ManyDuplicates => (0..size).map(|_| rng.gen_range(0..=10)).collect(),
        Distribution::FewUnique => (0..size).map(|_| rng.gen_range(0..=100)).collect(),
    }
}

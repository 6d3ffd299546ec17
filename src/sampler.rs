//! Progressive-density row sampling over one fixed shuffle.

use crate::view_controller::ViewController;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Holds one uniformly shuffled permutation of row indices, drawn at load.
/// Every sample is a prefix of it, so `sample(p1)` is contained in
/// `sample(p2)` whenever `p1 <= p2`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sampler {
    permutation: Vec<usize>,
}

impl Sampler {
    /// Shuffles with the thread-local generator.
    pub fn new(total_rows: usize) -> Self {
        Self::with_rng(total_rows, &mut rand::rng())
    }

    /// Reproducible shuffle.
    pub fn with_seed(total_rows: usize, seed: u64) -> Self {
        Self::with_rng(total_rows, &mut StdRng::seed_from_u64(seed))
    }

    pub fn with_rng<R: Rng + ?Sized>(total_rows: usize, rng: &mut R) -> Self {
        let mut permutation: Vec<usize> = (0..total_rows).collect();
        permutation.shuffle(rng);
        Self { permutation }
    }

    pub fn total(&self) -> usize {
        self.permutation.len()
    }

    /// The full shuffled order.
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    /// First `round(percentage / 100 * total)` entries of the shuffle. The
    /// percentage is clamped to `[1, 100]`.
    pub fn sample(&self, percentage: i64) -> &[usize] {
        let p = ViewController::clamp_density(percentage);
        let size = ViewController::sample_size(p, self.permutation.len());
        &self.permutation[..size]
    }
}

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of randomness for every stochastic choice in the generator
///
/// Passed explicitly to the sampler, the strategies and the factory so that
/// tests can substitute a seeded or scripted source.
pub trait RandomSource {
    /// Pick an index into `weights` with probability proportional to its weight
    ///
    /// Returns 0 when the weights are empty or sum to zero.
    fn weighted_choice(&mut self, weights: &[u32]) -> usize;

    /// Draw a single uniform bit
    fn random_bit(&mut self) -> bool;
}

/// Random selector backed by the standard RNG
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a selector seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomSource for RandomSelector {
    /// Weighted random selection over the cumulative distribution
    fn weighted_choice(&mut self, weights: &[u32]) -> usize {
        let total: u64 = weights.iter().map(|&w| u64::from(w)).sum();
        if total == 0 {
            return 0;
        }

        let mut rand_val = self.rng.random_range(0..total);
        for (i, &weight) in weights.iter().enumerate() {
            let weight = u64::from(weight);
            if rand_val < weight {
                return i;
            }
            rand_val -= weight;
        }
        weights.len() - 1
    }

    fn random_bit(&mut self) -> bool {
        self.rng.random()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn weighted_choice(&mut self, weights: &[u32]) -> usize {
        (**self).weighted_choice(weights)
    }

    fn random_bit(&mut self) -> bool {
        (**self).random_bit()
    }
}

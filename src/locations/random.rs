use super::LocationSampler;
use super::regions::REGION_MAPPING;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws locations uniformly, with replacement, from [`REGION_MAPPING`].
pub struct RandomSampler<R = StdRng> {
    rng: R,
}

impl RandomSampler<StdRng> {
    /// Sampler seeded from OS entropy. Each run yields different locations.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible sampler for a fixed `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> LocationSampler for RandomSampler<R> {
    fn sample(&mut self) -> &'static str {
        let idx = self.rng.gen_range(0..REGION_MAPPING.len());
        REGION_MAPPING[idx].0
    }
}

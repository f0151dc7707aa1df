use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform indices for move selection.
pub trait MoveRng {
    /// Uniform integer in `[0, len)`. `len` is never zero.
    fn random_index(&mut self, len: usize) -> usize;
}

/// Seedable RNG owned by one game so random play can be replayed from its seed.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}

impl MoveRng for SessionRng {
    fn random_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

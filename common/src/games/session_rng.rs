use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seedable source of randomness owned by one simulation.
///
/// Every spawn decision of a game draws from here, so a game started with
/// the same seed and fed the same commands replays identically.
#[derive(Clone, Debug)]
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

    /// Returns `true` with probability `p`; values outside `[0, 1]` are clamped.
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.random_bool(p.clamp(0.0, 1.0))
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..items.len());
        items.get(index)
    }

    /// Derives an independent generator, used to seed the next game of a session.
    pub fn fork(&mut self) -> SessionRng {
        SessionRng::new(self.rng.random())
    }
}

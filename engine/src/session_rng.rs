use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded source of randomness for the Easy and Medium tiers. Keeping the seed
/// around lets a round be replayed move for move.
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

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn pick_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    /// Derives an independent generator, e.g. one per arena round.
    pub fn fork(&mut self) -> SessionRng {
        SessionRng::new(self.rng.random())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(7);
        let mut b = SessionRng::new(7);

        let first: Vec<usize> = (0..16).map(|_| a.pick_index(9)).collect();
        let second: Vec<usize> = (0..16).map(|_| b.pick_index(9)).collect();

        assert_eq!(first, second);
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn test_pick_index_in_range() {
        let mut rng = SessionRng::new(99);
        for len in 1..=9 {
            for _ in 0..50 {
                assert!(rng.pick_index(len) < len);
            }
        }
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut a = SessionRng::new(3);
        let mut b = SessionRng::new(3);

        assert_eq!(a.fork().seed(), b.fork().seed());
    }
}

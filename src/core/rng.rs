//! Deterministic random number generation for board sampling.
//!
//! Uses ChaCha8 so that a seeded engine replays identically: the same seed
//! produces the same sequence of boards and difficulty draws. Production
//! callers use [`GameRng::from_entropy`]; tests pin a seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for board generation and difficulty draws.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a new RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Sample `amount` distinct indices from `0..len`, uniformly without
    /// replacement. Order of the returned indices is random.
    ///
    /// Panics if `amount > len`; the caller validates board dimensions first.
    #[must_use]
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.inner, len, amount).into_vec()
    }

    /// Choose a random index with weighted probability.
    ///
    /// Weights do not need to sum to 1.0.
    /// Returns `None` if weights are empty or all zero.
    pub fn choose_weighted(&mut self, weights: &[f32]) -> Option<usize> {
        if weights.is_empty() {
            return None;
        }

        let total: f32 = weights.iter().sum();
        if total <= 0.0 {
            return None;
        }

        let mut threshold = self.inner.gen::<f32>() * total;

        for (i, &weight) in weights.iter().enumerate() {
            threshold -= weight;
            if threshold <= 0.0 {
                return Some(i);
            }
        }

        // Floating point edge case - return last non-zero weight
        Some(weights.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..10 {
            assert_eq!(rng1.sample_indices(81, 12), rng2.sample_indices(81, 12));
            assert_eq!(
                rng1.choose_weighted(&[0.3, 0.3, 0.4]),
                rng2.choose_weighted(&[0.3, 0.3, 0.4])
            );
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).flat_map(|_| rng1.sample_indices(81, 12)).collect();
        let seq2: Vec<_> = (0..10).flat_map(|_| rng2.sample_indices(81, 12)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_sample_indices_distinct() {
        let mut rng = GameRng::new(42);

        let sample = rng.sample_indices(81, 12);
        assert_eq!(sample.len(), 12);
        assert!(sample.iter().all(|&i| i < 81));

        let mut sorted = sample.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 12, "sample must not repeat indices");
    }

    #[test]
    fn test_sample_indices_full_range() {
        let mut rng = GameRng::new(42);

        let mut sample = rng.sample_indices(5, 5);
        sample.sort_unstable();
        assert_eq!(sample, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_choose_weighted() {
        let mut rng = GameRng::new(42);

        // Heavily weighted towards index 0
        let weights = vec![100.0, 0.0, 0.0];
        for _ in 0..10 {
            assert_eq!(rng.choose_weighted(&weights), Some(0));
        }

        // Empty weights
        assert_eq!(rng.choose_weighted(&[]), None);

        // All zero weights
        assert_eq!(rng.choose_weighted(&[0.0, 0.0]), None);
    }

    #[test]
    fn test_choose_weighted_skips_zero_entries() {
        let mut rng = GameRng::new(42);

        // Index 0 has zero weight and must never be drawn
        let weights = vec![0.0, 1.0, 1.0];
        for _ in 0..100 {
            let choice = rng.choose_weighted(&weights).unwrap();
            assert!(choice == 1 || choice == 2);
        }
    }
}

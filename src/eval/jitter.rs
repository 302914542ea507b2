//! Tie-break perturbation sources
//!
//! The evaluator adds a small bounded amount to every score so that equally
//! good moves are not always chosen in the same order. The source is passed
//! in by the caller; tests use [`NoJitter`] to make search deterministic.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Score, Weights};

/// Source of the evaluator's tie-break perturbation
pub trait Jitter {
    /// Next perturbation, in `[0, Weights::JITTER_MAX)`
    fn sample(&mut self) -> Score;
}

/// Always zero
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl Jitter for NoJitter {
    #[inline]
    fn sample(&mut self) -> Score {
        0.0
    }
}

/// Uniform perturbation drawn from a random number generator
#[derive(Debug, Clone)]
pub struct RandomJitter<R = StdRng> {
    rng: R,
}

impl RandomJitter<StdRng> {
    /// OS-seeded generator
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomJitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Jitter for RandomJitter<R> {
    #[inline]
    fn sample(&mut self) -> Score {
        self.rng.random_range(0.0..Weights::JITTER_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_jitter_is_zero() {
        let mut j = NoJitter;
        for _ in 0..10 {
            assert_eq!(j.sample(), 0.0);
        }
    }

    #[test]
    fn test_random_jitter_bounded() {
        let mut j = RandomJitter::seeded(7);
        for _ in 0..1000 {
            let s = j.sample();
            assert!((0.0..Weights::JITTER_MAX).contains(&s), "{s} out of range");
        }
    }

    #[test]
    fn test_seeded_jitter_reproducible() {
        let mut a = RandomJitter::seeded(42);
        let mut b = RandomJitter::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.sample(), b.sample());
        }
    }
}

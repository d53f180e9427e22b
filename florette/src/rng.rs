//! Deterministic pseudo-random number generation.
//!
//! Every random decision in florette flows through [`SeededRng`], so a
//! seed fully determines the generated geometry and color assignment.

use rand::Rng as _;

use crate::error::{FloretteError, Result};

/// Modulus of the generator, the Mersenne prime 2^31 - 1.
pub const MODULUS: u64 = 2_147_483_647;

/// Multiplier of the Park-Miller "minimal standard" generator.
pub const MULTIPLIER: u64 = 16_807;

/// A multiplicative linear congruential generator.
///
/// `seed' = seed * 16807 mod (2^31 - 1)`, output `(seed' - 1) / (2^31 - 2)`.
/// The state is an integer and the product fits in a `u64`, so a seed
/// reproduces the same sequence on every platform.
///
/// Every draw takes `&mut self`. Workers generating in parallel each need
/// their own instance.
///
/// # Example
/// ```
/// use florette::rng::SeededRng;
///
/// let mut rng = SeededRng::new(1).unwrap();
/// assert_eq!(rng.next_f64(), 16806.0 / 2147483646.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a generator from an explicit seed.
    ///
    /// Seeds must lie in `1..=2147483646`. Zero is a fixed point of the
    /// recurrence and anything at or above the modulus collapses onto a
    /// smaller seed, so both are rejected.
    pub fn new(seed: u64) -> Result<Self> {
        validate_seed(seed)?;
        Ok(Self { state: seed })
    }

    /// Create a generator seeded from the operating system's entropy.
    pub fn from_entropy() -> Self {
        Self {
            state: entropy_seed(),
        }
    }

    /// Current state. Feeding it back to [`SeededRng::new`] resumes the sequence.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.state
    }

    /// Advance the state and return the raw integer in `1..MODULUS`.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.state = (self.state * MULTIPLIER) % MODULUS;
        self.state as u32
    }

    /// Get a random f64 in the range [0, 1).
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        let raw = self.next_u32() as f64;
        (raw - 1.0) / (MODULUS - 1) as f64
    }
}

/// Reject seeds that would make the generator degenerate.
pub fn validate_seed(seed: u64) -> Result<()> {
    if seed == 0 || seed >= MODULUS {
        return Err(FloretteError::invalid(format!(
            "seed must be in 1..={}, got {seed}",
            MODULUS - 1
        )));
    }
    Ok(())
}

/// Pick a seed in `[1, MODULUS)` from a non-deterministic source.
pub fn entropy_seed() -> u64 {
    rand::rng().random_range(1..MODULUS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        let mut rng1 = SeededRng::new(42).unwrap();
        let mut rng2 = SeededRng::new(42).unwrap();

        for _ in 0..100 {
            assert_eq!(rng1.next_f64().to_bits(), rng2.next_f64().to_bits());
        }
    }

    #[test]
    fn zero_draws_is_trivially_identical() {
        let rng1 = SeededRng::new(7).unwrap();
        let rng2 = SeededRng::new(7).unwrap();
        assert_eq!(rng1, rng2);
    }

    #[test]
    fn first_value_from_seed_one() {
        let mut rng = SeededRng::new(1).unwrap();
        assert_eq!(rng.next_f64(), 16806.0 / 2147483646.0);
        assert_eq!(rng.seed(), 16807);
    }

    #[test]
    fn known_state_sequence() {
        // Park-Miller reference: seed 1 reaches 1043618065 after 10000 steps.
        let mut rng = SeededRng::new(1).unwrap();
        for _ in 0..10_000 {
            rng.next_u32();
        }
        assert_eq!(rng.seed(), 1_043_618_065);
    }

    #[test]
    fn different_seeds_differ() {
        let mut rng1 = SeededRng::new(1).unwrap();
        let mut rng2 = SeededRng::new(2).unwrap();

        let vals1: Vec<_> = (0..10).map(|_| rng1.next_u32()).collect();
        let vals2: Vec<_> = (0..10).map(|_| rng2.next_u32()).collect();

        assert_ne!(vals1, vals2);
    }

    #[test]
    fn f64_in_range() {
        let mut rng = SeededRng::new(12345).unwrap();
        for _ in 0..1000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn largest_seed_still_valid() {
        let mut rng = SeededRng::new(MODULUS - 1).unwrap();
        let v = rng.next_f64();
        assert!((0.0..1.0).contains(&v));
    }

    #[test]
    fn rejects_degenerate_seeds() {
        assert!(matches!(SeededRng::new(0), Err(FloretteError::InvalidArgument(_))));
        assert!(matches!(SeededRng::new(MODULUS), Err(FloretteError::InvalidArgument(_))));
    }

    #[test]
    fn entropy_seed_in_range() {
        for _ in 0..100 {
            let seed = entropy_seed();
            assert!(seed >= 1 && seed < MODULUS);
        }
        let rng = SeededRng::from_entropy();
        assert!(validate_seed(rng.seed()).is_ok());
    }
}

//! Range, choice and shuffle helpers over one owned [`SeededRng`].
//!
//! [`Random`] is the handle the rest of the crate threads through every
//! generation call. An application normally builds one at startup and
//! reseeds it when it wants a reproducible run.

use crate::error::{FloretteError, Result};
use crate::ranges::Range;
use crate::rng::SeededRng;

/// Seeded random helpers.
#[derive(Debug, Clone)]
pub struct Random {
    rng: SeededRng,
}

impl Random {
    /// Seeded from entropy.
    pub fn new() -> Self {
        Self::from_rng(SeededRng::from_entropy())
    }

    /// Seeded explicitly; the same seed reproduces every draw.
    pub fn with_seed(seed: u64) -> Result<Self> {
        Ok(Self::from_rng(SeededRng::new(seed)?))
    }

    pub fn from_rng(rng: SeededRng) -> Self {
        Self { rng }
    }

    /// Current generator state.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Replace the generator with a fresh one for `seed`.
    ///
    /// Values drawn before the call keep whatever they were.
    pub fn set_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = SeededRng::new(seed)?;
        log::debug!("reseeded generator with {seed}");
        Ok(())
    }

    /// Replace the generator with one seeded from entropy.
    pub fn reseed_from_entropy(&mut self) -> u64 {
        self.rng = SeededRng::from_entropy();
        log::debug!("reseeded generator from entropy ({})", self.rng.seed());
        self.rng.seed()
    }

    /// Next raw value in [0, 1).
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.rng.next_f64()
    }

    /// `min + (max - min) * next()`.
    #[inline]
    pub fn range_float(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_f64()
    }

    /// Floor of [`Random::range_float`], bumped to the next even number when odd.
    ///
    /// Odd values always round up, so the top even value of the range
    /// gets slightly more weight and `max` itself can come out when
    /// `max - 1` is odd. Dependent parameter distributions rely on this
    /// exact skew.
    pub fn range_even(&mut self, min: f64, max: f64) -> i64 {
        let value = self.range_float(min, max).floor() as i64;
        if value % 2 == 0 { value } else { value + 1 }
    }

    /// Integer in the half-open range `[min, max)`.
    #[inline]
    pub fn range_int(&mut self, min: i64, max: i64) -> i64 {
        self.range_float(min as f64, max as f64).floor() as i64
    }

    /// [`Random::range_float`] over a [`Range`].
    pub fn range(&mut self, range: Range) -> f64 {
        self.range_float(range.min, range.max)
    }

    /// [`Random::range_even`] over a [`Range`].
    pub fn even_in_range(&mut self, range: Range) -> i64 {
        self.range_even(range.min, range.max)
    }

    /// True with probability one half.
    #[inline]
    pub fn boolean(&mut self) -> bool {
        self.next_f64() < 0.5
    }

    /// Pick one element uniformly.
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        if items.is_empty() {
            return Err(FloretteError::invalid("cannot choose from an empty sequence"));
        }
        let index = self.index(items.len());
        Ok(&items[index])
    }

    /// Fisher-Yates shuffle into a new vector. The input is left as is.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut shuffled = items.to_vec();
        for i in (1..shuffled.len()).rev() {
            let j = self.index(i + 1);
            shuffled.swap(i, j);
        }
        shuffled
    }

    /// Index in `[0, len)`; `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        let index = self.range_int(0, len as i64) as usize;
        index.min(len - 1)
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

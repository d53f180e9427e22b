//! Parameter ranges for randomized superformula shapes.

use crate::error::Result;
use crate::random::Random;
use crate::superformula::SuperformulaParams;

/// A closed-open numeric interval `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Bounds for each superformula parameter.
///
/// `m` is drawn with [`Random::range_even`] so random shapes keep an even
/// symmetry order; `steps` is floored to an integer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRanges {
    pub m: Range,
    pub a: Range,
    pub b: Range,
    pub n1: Range,
    pub n2: Range,
    pub n3: Range,
    pub steps: Range,
}

impl Default for ParameterRanges {
    fn default() -> Self {
        Self {
            m: Range::new(4.0, 12.0),
            a: Range::new(0.5, 1.5),
            b: Range::new(0.5, 1.5),
            n1: Range::new(0.5, 3.5),
            n2: Range::new(0.5, 3.5),
            n3: Range::new(0.5, 3.5),
            steps: Range::new(50.0, 700.0),
        }
    }
}

impl ParameterRanges {
    /// Draw one parameter set.
    ///
    /// Draw order is fixed (m, a, b, n1, n2, n3, steps) so a seed always maps
    /// to the same shape. Fails when the draw lands on values the curve
    /// cannot use, e.g. a range that admits `a = 0`.
    pub fn randomize(&self, random: &mut Random) -> Result<SuperformulaParams> {
        let m = random.even_in_range(self.m) as f64;
        let a = random.range(self.a);
        let b = random.range(self.b);
        let n1 = random.range(self.n1);
        let n2 = random.range(self.n2);
        let n3 = random.range(self.n3);
        let steps = random.range(self.steps).floor().max(0.0) as u32;
        SuperformulaParams::new(m, a, b, n1, n2, n3, steps)
    }
}

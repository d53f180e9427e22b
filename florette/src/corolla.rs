//! Rings of identical petals.
//!
//! A corolla turns one superformula petal into `repetitions` copies spaced
//! evenly around a circle, ready to be handed to the composer as a group.

use crate::error::Result;
use crate::point_set::{PointSet, PointSetGroup};
use crate::random::Random;
use crate::ranges::ParameterRanges;
use crate::superformula::{sample_points, SuperformulaParams};

/// Parameters for one ring of petals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corolla {
    /// Shape of a single petal.
    pub petal: SuperformulaParams,
    /// Number of petals around the ring.
    pub repetitions: usize,
    /// Distance from the flower center to each petal's origin.
    pub radius: f64,
    /// Farthest extent of a petal from its own origin.
    pub petal_scale: f64,
    /// Rotation (degrees) applied to the template petal before replication.
    pub rotation: f64,
}

impl Corolla {
    pub fn new(
        petal: SuperformulaParams,
        repetitions: usize,
        radius: f64,
        petal_scale: f64,
    ) -> Self {
        Self {
            petal,
            repetitions,
            radius,
            petal_scale,
            rotation: 0.0,
        }
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// A corolla with a random petal shape and an even petal count in `[4, 12]`.
    pub fn random(
        random: &mut Random,
        ranges: &ParameterRanges,
        radius: f64,
        petal_scale: f64,
    ) -> Result<Self> {
        let petal = ranges.randomize(random)?;
        let repetitions = random.range_even(4.0, 12.0) as usize;
        let rotation = random.range_float(0.0, 360.0);
        Ok(Self {
            petal,
            repetitions,
            radius,
            petal_scale,
            rotation,
        })
    }

    /// The scaled, rotated template petal.
    pub fn template(&self) -> Result<PointSet> {
        let mut petal = PointSet::new(sample_points(&self.petal)?);
        petal.scale_to_radius(self.petal_scale)?.rotate(self.rotation);
        Ok(petal)
    }

    /// Replicate the template around the ring.
    pub fn build(&self) -> Result<PointSetGroup> {
        let group = self.template()?.create_circular_pattern(self.repetitions, self.radius);
        log::trace!(
            "corolla: {} petals, {} points",
            group.len(),
            group.point_count()
        );
        Ok(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FloretteError;

    #[test]
    fn builds_requested_ring() {
        let corolla = Corolla::new(SuperformulaParams::default(), 6, 20.0, 8.0);
        let group = corolla.build().unwrap();
        assert_eq!(group.len(), 6);
        assert_eq!(group.point_count(), 6 * 51);

        // Petal 0 sits at (20, 0) and reaches at most 8 beyond it.
        for p in group.sets()[0].iter() {
            assert!(p.distance(crate::Point::new(20.0, 0.0)) <= 8.0 + 1e-9);
        }
    }

    #[test]
    fn template_is_scaled_then_rotated() {
        let corolla = Corolla::new(SuperformulaParams::default(), 3, 0.0, 5.0).with_rotation(90.0);
        let template = corolla.template().unwrap();
        assert!((template.max_radius().unwrap() - 5.0).abs() < 1e-9);

        // The first sample starts on +x and ends up on +y.
        let first = template.points()[0];
        assert!(first.x.abs() < 1e-9 && first.y > 0.0);
    }

    #[test]
    fn random_corolla_is_reproducible() {
        let ranges = ParameterRanges::default();
        let a = Corolla::random(&mut Random::with_seed(5).unwrap(), &ranges, 10.0, 4.0).unwrap();
        let b = Corolla::random(&mut Random::with_seed(5).unwrap(), &ranges, 10.0, 4.0).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.repetitions % 2, 0);
        assert_eq!(a.build().unwrap(), b.build().unwrap());
    }

    #[test]
    fn zero_radius_petal_is_degenerate() {
        let flat = SuperformulaParams::new(0.0, 1e-3, 1.0, 1e-3, 1.0, 1.0, 8).unwrap();
        let result = Corolla::new(flat, 4, 10.0, 3.0).build();
        assert!(matches!(result, Err(FloretteError::DegenerateGeometry(_))));
    }
}

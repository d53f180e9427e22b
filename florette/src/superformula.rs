//! Gielis superformula curves.
//!
//! The superformula is defined in polar coordinates as:
//!
//! ```text
//! r(φ) = ( |cos(m·φ/4) / a|^n2 + |sin(m·φ/4) / b|^n3 ) ^ (-1/n1)
//! ```
//!
//! - `m` sets the rotational symmetry order
//! - `n1`, `n2`, `n3` control how sharp or rounded the lobes are
//! - `a`, `b` stretch the lobes
//!
//! Circles, polygons, stars and petal shapes all fall out of the same
//! seven numbers.

use std::f64::consts::TAU;

use crate::error::{FloretteError, Result};
use crate::geometry::Point;
use crate::point_set::PointSet;

/// Validated superformula parameters.
///
/// Fields are private so a value can only exist once [`SuperformulaParams::new`]
/// has accepted it: every float finite, `a`, `b`, `n1` non-zero, `steps >= 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuperformulaParams {
    m: f64,
    a: f64,
    b: f64,
    n1: f64,
    n2: f64,
    n3: f64,
    steps: u32,
}

impl SuperformulaParams {
    pub fn new(m: f64, a: f64, b: f64, n1: f64, n2: f64, n3: f64, steps: u32) -> Result<Self> {
        let named = [("m", m), ("a", a), ("b", b), ("n1", n1), ("n2", n2), ("n3", n3)];
        if let Some((name, value)) = named.iter().find(|(_, v)| !v.is_finite()) {
            return Err(FloretteError::invalid(format!(
                "superformula parameter {name} must be finite, got {value}"
            )));
        }
        // a and b divide inside the equation, n1 divides the exponent.
        for (name, value) in [("a", a), ("b", b), ("n1", n1)] {
            if value == 0.0 {
                return Err(FloretteError::invalid(format!(
                    "superformula parameter {name} must be non-zero"
                )));
            }
        }
        if steps == 0 {
            return Err(FloretteError::invalid("superformula steps must be at least 1"));
        }
        Ok(Self {
            m,
            a,
            b,
            n1,
            n2,
            n3,
            steps,
        })
    }

    pub fn m(&self) -> f64 {
        self.m
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn n1(&self) -> f64 {
        self.n1
    }

    pub fn n2(&self) -> f64 {
        self.n2
    }

    pub fn n3(&self) -> f64 {
        self.n3
    }

    /// Number of angular subdivisions of the full turn.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn with_m(self, m: f64) -> Result<Self> {
        Self::new(m, self.a, self.b, self.n1, self.n2, self.n3, self.steps)
    }

    pub fn with_a(self, a: f64) -> Result<Self> {
        Self::new(self.m, a, self.b, self.n1, self.n2, self.n3, self.steps)
    }

    pub fn with_b(self, b: f64) -> Result<Self> {
        Self::new(self.m, self.a, b, self.n1, self.n2, self.n3, self.steps)
    }

    pub fn with_n1(self, n1: f64) -> Result<Self> {
        Self::new(self.m, self.a, self.b, n1, self.n2, self.n3, self.steps)
    }

    pub fn with_n2(self, n2: f64) -> Result<Self> {
        Self::new(self.m, self.a, self.b, self.n1, n2, self.n3, self.steps)
    }

    pub fn with_n3(self, n3: f64) -> Result<Self> {
        Self::new(self.m, self.a, self.b, self.n1, self.n2, n3, self.steps)
    }

    pub fn with_steps(self, steps: u32) -> Result<Self> {
        Self::new(self.m, self.a, self.b, self.n1, self.n2, self.n3, steps)
    }

    /// Angle between consecutive samples.
    #[inline]
    fn step_size(&self) -> f64 {
        TAU / self.steps as f64
    }
}

impl Default for SuperformulaParams {
    /// A two-lobed, slightly pinched petal.
    fn default() -> Self {
        Self {
            m: 2.0,
            a: 1.5,
            b: 2.0,
            n1: 1.0,
            n2: 3.0,
            n3: 1.4,
            steps: 50,
        }
    }
}

/// Evaluate `r(φ)` for one angle.
#[inline]
pub fn radius_at(params: &SuperformulaParams, phi: f64) -> f64 {
    let angle = params.m * phi / 4.0;
    let cos_part = (angle.cos() / params.a).abs().powf(params.n2);
    let sin_part = (angle.sin() / params.b).abs().powf(params.n3);
    (cos_part + sin_part).powf(-1.0 / params.n1)
}

/// Sample the closed curve at `steps + 1` angles from 0 to 2π inclusive.
///
/// For even `m` the first and last points coincide (up to rounding) so a
/// path drawn through them closes on itself.
///
/// Fails with `InvalidArgument` when `r(φ)` is not finite at any sampled
/// angle, e.g. negative exponents that blow a vanishing term up to infinity.
pub fn sample_points(params: &SuperformulaParams) -> Result<Vec<Point>> {
    let step_size = params.step_size();
    let points = (0..=params.steps)
        .map(|i| {
            let phi = i as f64 * step_size;
            let point = Point::from_polar(finite_radius(params, phi)?, phi);
            Ok(point)
        })
        .collect::<Result<Vec<Point>>>()?;

    log::trace!("sampled {} superformula points", points.len());
    Ok(points)
}

/// `r(φ)`, or `InvalidArgument` when the equation is undefined there.
fn finite_radius(params: &SuperformulaParams, phi: f64) -> Result<f64> {
    let r = radius_at(params, phi);
    if !r.is_finite() {
        log::warn!("superformula {params:?} is undefined at φ = {phi}");
        return Err(FloretteError::invalid(format!(
            "superformula radius is {r} at φ = {phi}"
        )));
    }
    Ok(r)
}

/// Sample `steps` points (no closing duplicate) scaled so the farthest
/// point lies exactly at `max_radius`.
///
/// Fails with `DegenerateGeometry` when every sampled radius is zero, and
/// with `InvalidArgument` when `max_radius` is negative or not finite or
/// the curve is undefined at a sampled angle.
pub fn generate_scaled_shape(params: &SuperformulaParams, max_radius: f64) -> Result<Vec<Point>> {
    if !max_radius.is_finite() || max_radius < 0.0 {
        return Err(FloretteError::invalid(format!(
            "max radius must be finite and non-negative, got {max_radius}"
        )));
    }

    let step_size = params.step_size();
    let radii = (0..params.steps)
        .map(|i| finite_radius(params, i as f64 * step_size))
        .collect::<Result<Vec<f64>>>()?;

    let r_max = radii.iter().copied().fold(0.0_f64, f64::max);
    if r_max == 0.0 {
        return Err(FloretteError::degenerate(format!(
            "superformula {params:?} has maximum radius {r_max}"
        )));
    }

    let scale_factor = max_radius / r_max;
    Ok(radii
        .iter()
        .enumerate()
        .map(|(i, r)| Point::from_polar(r * scale_factor, i as f64 * step_size))
        .collect())
}

/// A superformula curve together with its sampled point set.
#[derive(Debug, Clone)]
pub struct SuperformulaCurve {
    params: SuperformulaParams,
    points: PointSet,
}

impl SuperformulaCurve {
    pub fn new(params: SuperformulaParams) -> Result<Self> {
        let points = PointSet::new(sample_points(&params)?);
        Ok(Self { params, points })
    }

    pub fn params(&self) -> &SuperformulaParams {
        &self.params
    }

    /// Swap in new parameters and resample. Any earlier scaling is discarded.
    ///
    /// On error the curve keeps its previous parameters and points.
    pub fn set_params(&mut self, params: SuperformulaParams) -> Result<&mut Self> {
        self.points = PointSet::new(sample_points(&params)?);
        self.params = params;
        Ok(self)
    }

    /// Rescale the sampled points so the farthest lies at `max_radius`.
    pub fn scale(&mut self, max_radius: f64) -> Result<&mut Self> {
        self.points.scale_to_radius(max_radius)?;
        Ok(self)
    }

    pub fn point_set(&self) -> &PointSet {
        &self.points
    }

    pub fn into_point_set(self) -> PointSet {
        self.points
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn scenario_params() -> SuperformulaParams {
        SuperformulaParams::new(2.0, 1.5, 2.0, 1.0, 3.0, 1.4, 4).unwrap()
    }

    #[test]
    fn default_matches_scenario_shape() {
        let d = SuperformulaParams::default();
        assert_eq!(d.with_steps(4).unwrap(), scenario_params());
    }

    #[test]
    fn scenario_sample_count_and_closure() {
        let points = sample_points(&scenario_params()).unwrap();
        assert_eq!(points.len(), 5);

        let first = points[0];
        let last = points[4];
        assert!(first.distance(last) < EPS, "{first:?} vs {last:?}");
        assert!(points.iter().all(|p| !p.x.is_nan() && !p.y.is_nan()));
    }

    #[test]
    fn closure_within_path_precision() {
        let params = SuperformulaParams::new(6.0, 1.1, 0.9, 0.3, 2.2, 1.7, 333).unwrap();
        let points = sample_points(&params).unwrap();
        let first = points.first().unwrap();
        let last = points.last().unwrap();
        assert!((first.x - last.x).abs() < 5e-4);
        assert!((first.y - last.y).abs() < 5e-4);
    }

    #[test]
    fn first_sample_lies_on_x_axis() {
        // φ = 0: cos part is (1/a)^n2, sin part vanishes.
        let params = scenario_params();
        let expected = (1.0_f64 / 1.5).powf(3.0).powf(-1.0);
        let p = sample_points(&params).unwrap()[0];
        assert!((p.x - expected).abs() < EPS);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn unit_circle() {
        // m = 0 makes every term constant: |1/1|^2 + 0 = 1, r = 1.
        let params = SuperformulaParams::new(0.0, 1.0, 1.0, 2.0, 2.0, 2.0, 36).unwrap();
        for p in sample_points(&params).unwrap() {
            assert!((p.radius() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn sampling_rejects_infinite_radius() {
        // m = 0 zeroes the sine term; n3 = -1 turns 0 into infinity.
        let params = SuperformulaParams::new(0.0, 1.0, 1.0, -1.0, 1.0, -1.0, 4).unwrap();
        let result = sample_points(&params);
        assert!(matches!(result, Err(FloretteError::InvalidArgument(_))), "{result:?}");
    }

    #[test]
    fn square_has_four_fold_symmetry() {
        let params = SuperformulaParams::new(4.0, 1.0, 1.0, 100.0, 100.0, 100.0, 8).unwrap();
        let r0 = radius_at(&params, 0.0);
        for k in 1..4 {
            let r = radius_at(&params, k as f64 * TAU / 4.0);
            assert!((r - r0).abs() < 1e-6, "r({k}) = {r}, r0 = {r0}");
        }
    }

    #[test]
    fn rejects_undefined_parameters() {
        for bad in [
            SuperformulaParams::new(2.0, 0.0, 1.0, 1.0, 1.0, 1.0, 10),
            SuperformulaParams::new(2.0, 1.0, 0.0, 1.0, 1.0, 1.0, 10),
            SuperformulaParams::new(2.0, 1.0, 1.0, 0.0, 1.0, 1.0, 10),
            SuperformulaParams::new(f64::NAN, 1.0, 1.0, 1.0, 1.0, 1.0, 10),
            SuperformulaParams::new(2.0, 1.0, 1.0, 1.0, f64::INFINITY, 1.0, 10),
            SuperformulaParams::new(2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0),
        ] {
            assert!(matches!(bad, Err(FloretteError::InvalidArgument(_))), "{bad:?}");
        }
    }

    #[test]
    fn with_setters_revalidate() {
        let p = SuperformulaParams::default();
        assert_eq!(p.with_m(6.0).unwrap().m(), 6.0);
        assert!(p.with_a(0.0).is_err());
        assert!(p.with_n1(f64::NAN).is_err());
        assert_eq!(p.with_n3(0.25).unwrap().n3(), 0.25);
    }

    #[test]
    fn scaled_shape_hits_max_radius() {
        let params = SuperformulaParams::new(6.0, 1.0, 1.3, 0.8, 1.5, 2.5, 240).unwrap();
        let points = generate_scaled_shape(&params, 40.0).unwrap();
        assert_eq!(points.len(), 240);

        let r_max = points.iter().map(Point::radius).fold(0.0, f64::max);
        assert!((r_max - 40.0).abs() < EPS, "got {r_max}");
    }

    #[test]
    fn scaled_shape_of_zero_radius_curve_is_degenerate() {
        // r = 1000^(-1000) underflows to 0 at every angle.
        let params = SuperformulaParams::new(0.0, 1e-3, 1.0, 1e-3, 1.0, 1.0, 16).unwrap();
        let result = generate_scaled_shape(&params, 10.0);
        assert!(matches!(result, Err(FloretteError::DegenerateGeometry(_))), "{result:?}");
    }

    #[test]
    fn scaled_shape_rejects_nan_radius() {
        let result = generate_scaled_shape(&SuperformulaParams::default(), f64::NAN);
        assert!(matches!(result, Err(FloretteError::InvalidArgument(_))));
    }

    #[test]
    fn scaled_shape_rejects_negative_radius() {
        let result = generate_scaled_shape(&SuperformulaParams::default(), -5.0);
        assert!(matches!(result, Err(FloretteError::InvalidArgument(_))), "{result:?}");
    }

    #[test]
    fn scaled_shape_rejects_infinite_curve() {
        let params = SuperformulaParams::new(0.0, 1.0, 1.0, -1.0, 1.0, -1.0, 4).unwrap();
        let result = generate_scaled_shape(&params, 10.0);
        assert!(matches!(result, Err(FloretteError::InvalidArgument(_))), "{result:?}");
    }

    #[test]
    fn curve_resamples_on_param_change() {
        let mut curve = SuperformulaCurve::new(SuperformulaParams::default()).unwrap();
        assert_eq!(curve.point_set().len(), 51);

        curve.set_params(scenario_params()).unwrap();
        assert_eq!(curve.point_set().len(), 5);
        assert_eq!(curve.params().steps(), 4);
    }

    #[test]
    fn failed_param_change_keeps_curve() {
        let mut curve = SuperformulaCurve::new(scenario_params()).unwrap();
        let bad = SuperformulaParams::new(0.0, 1.0, 1.0, -1.0, 1.0, -1.0, 4).unwrap();
        assert!(curve.set_params(bad).is_err());
        assert_eq!(curve.params(), &scenario_params());
        assert_eq!(curve.point_set().len(), 5);
    }

    #[test]
    fn curve_scale() {
        let mut curve = SuperformulaCurve::new(SuperformulaParams::default()).unwrap();
        curve.scale(25.0).unwrap();
        let r = curve.point_set().max_radius().unwrap();
        assert!((r - 25.0).abs() < EPS);
    }
}

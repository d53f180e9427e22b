//! Core geometry types for florette.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! The `#[derive(...)]` macro auto-generates common functionality:
//! - `Debug` = lets you print with `{:?}`
//! - `Clone` / `Copy` = a `Point` is two floats, so it is copied implicitly
//! - `PartialEq` = can compare with `==`
//!
//! Points are plain values. Transforms build a new `Point` instead of
//! editing fields one at a time.

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` along `angle` (radians) from the origin.
    #[inline]
    pub fn from_polar(radius: f64, angle: f64) -> Self {
        Self::new(radius * angle.cos(), radius * angle.sin())
    }

    /// Euclidean distance from the origin.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Polar angle in radians, in `(-π, π]`.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Rotate around the origin by `radians` (counter-clockwise).
    #[inline]
    pub fn rotated(self, radians: f64) -> Self {
        let (sin_a, cos_a) = radians.sin_cos();
        Self::new(
            self.x * cos_a - self.y * sin_a,
            self.x * sin_a + self.y * cos_a,
        )
    }

    #[inline]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    #[inline]
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// True when both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn point_radius() {
        assert_eq!(Point::new(3.0, 4.0).radius(), 5.0); // 3-4-5 triangle
        assert_eq!(Point::default().radius(), 0.0);
    }

    #[test]
    fn point_distance() {
        let p1 = Point::new(1.0, 1.0);
        let p2 = Point::new(4.0, 5.0);
        assert_eq!(p1.distance(p2), 5.0);
    }

    #[test]
    fn quarter_turn() {
        let p = Point::new(1.0, 0.0).rotated(FRAC_PI_2);
        assert!(close(p.x, 0.0));
        assert!(close(p.y, 1.0));
    }

    #[test]
    fn polar_round_trip_angle() {
        let p = Point::from_polar(2.0, 3.0 * PI / 4.0);
        assert!(close(p.radius(), 2.0));
        assert!(close(p.angle(), 3.0 * PI / 4.0));
    }

    #[test]
    fn translate_and_scale() {
        let p = Point::new(1.0, -2.0).translated(0.5, 0.5).scaled(2.0);
        assert_eq!(p, Point::new(3.0, -3.0));
    }

    #[test]
    fn degrees() {
        assert!(close(deg_to_rad(180.0), PI));
        assert!(close(deg_to_rad(-90.0), -FRAC_PI_2));
    }
}

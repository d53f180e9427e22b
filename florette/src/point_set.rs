//! Owned point sequences and groups of them.
//!
//! ## Rust Lesson #4: Ownership & Vec
//!
//! A [`PointSet`] OWNS its points. Transforms take `&mut self`, so the
//! borrow checker guarantees nobody else is looking while the points
//! change, and they hand the same `&mut` back for chaining:
//!
//! ```
//! use florette::{Point, PointSet};
//!
//! let mut set = PointSet::new(vec![Point::new(1.0, 0.0), Point::new(0.0, 2.0)]);
//! set.rotate(90.0).translate(5.0, 5.0);
//! assert!(set.path().starts_with("M 5.000 6.000"));
//! ```

use std::f64::consts::TAU;
use std::fmt::Write as _;

use crate::error::{FloretteError, Result};
use crate::geometry::{deg_to_rad, Point};

/// Fractional digits used by the cached path string.
pub const PATH_PRECISION: usize = 3;

/// An ordered sequence of points with a cached SVG path string.
///
/// The path is rebuilt before any mutating method returns, so
/// [`PointSet::path`] always describes the current points. Every
/// transform on an empty set is a no-op.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointSet {
    points: Vec<Point>,
    path: String,
}

impl PointSet {
    pub fn new(points: Vec<Point>) -> Self {
        let mut set = Self {
            points,
            path: String::new(),
        };
        set.refresh_path();
        set
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// `M x y L x y ... Z`, three decimals per coordinate. Empty for an empty set.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Largest distance of any point from the origin.
    pub fn max_radius(&self) -> Option<f64> {
        if self.points.is_empty() {
            return None;
        }
        Some(self.points.iter().map(Point::radius).fold(0.0, f64::max))
    }

    /// Mean of all points.
    pub fn centroid(&self) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }
        let n = self.points.len() as f64;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Some(Point::new(sx / n, sy / n))
    }

    /// Rotate every point around the origin, counter-clockwise in degrees.
    pub fn rotate(&mut self, degrees: f64) -> &mut Self {
        if self.points.is_empty() {
            return self;
        }
        let radians = deg_to_rad(degrees);
        self.map_points(|p| p.rotated(radians))
    }

    pub fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        if self.points.is_empty() {
            return self;
        }
        self.map_points(|p| p.translated(dx, dy))
    }

    /// Scale around the origin so the farthest point lies exactly at `max_radius`.
    ///
    /// Shapes are normalized whether they start larger or smaller than the
    /// target. A non-empty set whose points all sit on the origin cannot be
    /// scaled and yields `DegenerateGeometry`. A negative or non-finite
    /// target yields `InvalidArgument`. On error the set is unchanged.
    pub fn scale_to_radius(&mut self, max_radius: f64) -> Result<&mut Self> {
        let Some(factor) = self.scale_factor(max_radius)? else {
            return Ok(self);
        };
        Ok(self.map_points(|p| p.scaled(factor)))
    }

    /// Factor that brings the farthest point to `max_radius`, `None` when empty.
    fn scale_factor(&self, max_radius: f64) -> Result<Option<f64>> {
        check_target_radius(max_radius)?;
        let Some(max_distance) = self.max_radius() else {
            return Ok(None);
        };
        if max_distance == 0.0 || !max_distance.is_finite() {
            return Err(FloretteError::degenerate(format!(
                "cannot scale {} points with maximum radius {max_distance}",
                self.points.len()
            )));
        }
        Ok(Some(max_radius / max_distance))
    }

    /// Copies of this set placed at equal angles around a circle.
    ///
    /// Copy `i` is rotated by `θ = i·2π/repetitions` and moved to
    /// `(radius·cos θ, radius·sin θ)`. `self` is left untouched.
    pub fn create_circular_pattern(&self, repetitions: usize, radius: f64) -> PointSetGroup {
        let increment = TAU / repetitions as f64;
        (0..repetitions)
            .map(|i| {
                let angle = i as f64 * increment;
                let center = Point::from_polar(radius, angle);
                let copy = self
                    .points
                    .iter()
                    .map(|p| p.rotated(angle).translated(center.x, center.y))
                    .collect();
                PointSet::new(copy)
            })
            .collect()
    }

    fn map_points(&mut self, f: impl Fn(Point) -> Point) -> &mut Self {
        for point in &mut self.points {
            *point = f(*point);
        }
        self.refresh_path();
        self
    }

    fn refresh_path(&mut self) {
        self.path.clear();
        if self.points.is_empty() {
            return;
        }
        for (i, p) in self.points.iter().enumerate() {
            let command = if i == 0 { 'M' } else { 'L' };
            if i > 0 {
                self.path.push(' ');
            }
            // Writing into a String cannot fail.
            let _ = write!(
                self.path,
                "{command} {:.prec$} {:.prec$}",
                p.x,
                p.y,
                prec = PATH_PRECISION
            );
        }
        self.path.push_str(" Z");
    }
}

fn check_target_radius(max_radius: f64) -> Result<()> {
    if !max_radius.is_finite() || max_radius < 0.0 {
        return Err(FloretteError::invalid(format!(
            "target radius must be finite and non-negative, got {max_radius}"
        )));
    }
    Ok(())
}

impl From<Vec<Point>> for PointSet {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// An ordered collection of point sets, e.g. a ring of petals.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointSetGroup {
    sets: Vec<PointSet>,
}

impl PointSetGroup {
    pub fn new(sets: Vec<PointSet>) -> Self {
        Self { sets }
    }

    pub fn push(&mut self, set: PointSet) -> &mut Self {
        self.sets.push(set);
        self
    }

    pub fn sets(&self) -> &[PointSet] {
        &self.sets
    }

    pub fn into_sets(self) -> Vec<PointSet> {
        self.sets
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Total number of points across all members.
    pub fn point_count(&self) -> usize {
        self.sets.iter().map(PointSet::len).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PointSet> {
        self.sets.iter()
    }

    /// Rotate every member around the origin.
    pub fn rotate(&mut self, degrees: f64) -> &mut Self {
        for set in &mut self.sets {
            set.rotate(degrees);
        }
        self
    }

    pub fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        for set in &mut self.sets {
            set.translate(dx, dy);
        }
        self
    }

    /// Scale each member independently to `max_radius`.
    ///
    /// Every member is checked before any is touched, so a degenerate member
    /// leaves the whole group unchanged.
    pub fn scale_to_radius(&mut self, max_radius: f64) -> Result<&mut Self> {
        let factors = self
            .sets
            .iter()
            .map(|set| set.scale_factor(max_radius))
            .collect::<Result<Vec<_>>>()?;

        for (set, factor) in self.sets.iter_mut().zip(factors) {
            if let Some(factor) = factor {
                set.map_points(|p| p.scaled(factor));
            }
        }
        Ok(self)
    }
}

impl From<Vec<PointSet>> for PointSetGroup {
    fn from(sets: Vec<PointSet>) -> Self {
        Self::new(sets)
    }
}

impl FromIterator<PointSet> for PointSetGroup {
    fn from_iter<I: IntoIterator<Item = PointSet>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for PointSetGroup {
    type Item = PointSet;
    type IntoIter = std::vec::IntoIter<PointSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.into_iter()
    }
}

impl<'a> IntoIterator for &'a PointSetGroup {
    type Item = &'a PointSet;
    type IntoIter = std::slice::Iter<'a, PointSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================

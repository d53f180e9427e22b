//! Palette assignment over composed geometry.
//!
//! Inputs are walked in order. Input `i` takes the color at
//! `(i + offset) mod colors.len()`. A group counts as one input, so all of
//! its members share a color; color varies per layer, not per petal.

use crate::error::{FloretteError, Result};
use crate::palette::ColorScheme;
use crate::point_set::{PointSet, PointSetGroup};

/// One layer handed to the composer.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryInput {
    /// A bare shape, becomes one part.
    Single(PointSet),
    /// Replicated or assembled shapes, one part per member, one shared color.
    Group(PointSetGroup),
}

impl From<PointSet> for GeometryInput {
    fn from(set: PointSet) -> Self {
        GeometryInput::Single(set)
    }
}

impl From<PointSetGroup> for GeometryInput {
    fn from(group: PointSetGroup) -> Self {
        GeometryInput::Group(group)
    }
}

impl From<Vec<PointSet>> for GeometryInput {
    fn from(sets: Vec<PointSet>) -> Self {
        GeometryInput::Group(PointSetGroup::new(sets))
    }
}

/// A shape and the color it is drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowerPart {
    geometry: PointSet,
    color: String,
}

impl FlowerPart {
    pub fn new(geometry: PointSet, color: impl Into<String>) -> Self {
        Self {
            geometry,
            color: color.into(),
        }
    }

    pub fn geometry(&self) -> &PointSet {
        &self.geometry
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn into_parts(self) -> (PointSet, String) {
        (self.geometry, self.color)
    }
}

/// Palette index for top-level input `index`.
///
/// Negative offsets wrap around, so `offset = -1` starts on the last color.
/// Any `i64` offset is accepted.
pub fn palette_index(index: usize, offset: i64, len: usize) -> Result<usize> {
    if len == 0 {
        return Err(FloretteError::invalid("color scheme has no colors"));
    }
    let wrapped = (index as i128 + offset as i128).rem_euclid(len as i128);
    Ok(wrapped as usize)
}

/// Flatten `inputs` into colored parts.
pub fn compose<I>(inputs: I, scheme: &ColorScheme, offset: i64) -> Result<Vec<FlowerPart>>
where
    I: IntoIterator<Item = GeometryInput>,
{
    let colors = &scheme.colors;
    if colors.is_empty() {
        return Err(FloretteError::invalid(format!(
            "color scheme '{}' has no colors",
            scheme.name
        )));
    }

    let mut parts = Vec::new();
    let mut layers = 0;
    for (i, input) in inputs.into_iter().enumerate() {
        let color = &colors[palette_index(i, offset, colors.len())?];
        match input {
            GeometryInput::Single(set) => parts.push(FlowerPart::new(set, color.as_str())),
            GeometryInput::Group(group) => parts.extend(
                group
                    .into_iter()
                    .map(|set| FlowerPart::new(set, color.as_str())),
            ),
        }
        layers += 1;
    }

    log::debug!(
        "composed {} parts from {layers} layers with scheme '{}' (offset {offset})",
        parts.len(),
        scheme.name
    );
    Ok(parts)
}

/// A composed figure: its scheme, offset and colored parts.
#[derive(Debug, Clone, PartialEq)]
pub struct Flower {
    scheme: ColorScheme,
    offset: i64,
    parts: Vec<FlowerPart>,
}

impl Flower {
    pub fn new<I>(inputs: I, scheme: ColorScheme, offset: i64) -> Result<Self>
    where
        I: IntoIterator<Item = GeometryInput>,
    {
        let parts = compose(inputs, &scheme, offset)?;
        Ok(Self {
            scheme,
            offset,
            parts,
        })
    }

    pub fn scheme(&self) -> &ColorScheme {
        &self.scheme
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn parts(&self) -> &[FlowerPart] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<FlowerPart> {
        self.parts
    }
}

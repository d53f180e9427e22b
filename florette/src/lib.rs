//! # florette
//!
//! Deterministic geometry and palette composition for stylized flowers.
//!
//! The pipeline runs leaves first:
//! - [`rng`] / [`random`]: a seeded generator and the range helpers built on it
//! - [`superformula`]: Gielis superformula sampling into point sequences
//! - [`point_set`]: owned point sequences with rotate/translate/scale and
//!   circular replication into groups
//! - [`compose`]: palette index assignment over single shapes and groups
//!
//! ## Rust Lesson #7: Modules
//!
//! Every module is declared here explicitly. `pub use` lifts the common
//! types to the crate root so callers can write `florette::PointSet`.

pub mod compose;
pub mod corolla;
pub mod error;
pub mod geometry;
pub mod palette;
pub mod point_set;
pub mod random;
pub mod ranges;
pub mod rng;
pub mod superformula;

// Re-export common types at crate root for convenience.
pub use compose::{compose, palette_index, Flower, FlowerPart, GeometryInput};
pub use corolla::Corolla;
pub use error::{FloretteError, Result};
pub use geometry::Point;
pub use palette::ColorScheme;
pub use point_set::{PointSet, PointSetGroup};
pub use random::Random;
pub use ranges::{ParameterRanges, Range};
pub use rng::SeededRng;
pub use superformula::{
    generate_scaled_shape, radius_at, sample_points, SuperformulaCurve, SuperformulaParams,
};

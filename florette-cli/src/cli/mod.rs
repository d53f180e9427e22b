//! CLI command implementations.
//!
//! - `generate` - Build a random flower from a seed
//! - `recipe` - Compose a flower from a YAML recipe
//! - `sample` - Sample a single superformula curve
//! - `palettes` - List builtin color schemes

pub mod common;
pub mod generate;
pub mod recipe;
pub mod sample;

pub use generate::cmd_generate;
pub use recipe::cmd_recipe;
pub use sample::cmd_sample;

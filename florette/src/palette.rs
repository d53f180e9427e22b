//! Color schemes supplied to the composer.
//!
//! The composer only reads colors by index; it never parses or checks
//! them. The builtin catalog below exists so callers have something to
//! draw from without a palette library.

use crate::error::Result;
use crate::random::Random;

/// A named, ordered list of colors (usually `#rrggbb` strings).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    pub name: String,
    pub colors: Vec<String>,
}

impl ColorScheme {
    pub fn new(name: impl Into<String>, colors: Vec<String>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    /// Look up a builtin scheme by name (case-insensitive).
    pub fn builtin(name: &str) -> Option<Self> {
        BUILTIN_SCHEMES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(n, colors)| Self::from_static(n, colors))
    }

    /// Pick one of the builtin schemes with the seeded generator.
    pub fn random_builtin(random: &mut Random) -> Result<Self> {
        let (name, colors) = random.choice(BUILTIN_SCHEMES)?;
        Ok(Self::from_static(name, colors))
    }

    fn from_static(name: &str, colors: &[&str]) -> Self {
        Self::new(name, colors.iter().map(|c| c.to_string()).collect())
    }
}

/// Names of the builtin schemes, in catalog order.
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    BUILTIN_SCHEMES.iter().map(|(name, _)| *name)
}

const BUILTIN_SCHEMES: &[(&str, &[&str])] = &[
    ("Spectral", &["#d7191c", "#fdae61", "#ffffbf", "#abdda4", "#2b83ba"]),
    ("YlOrRd", &["#ffffb2", "#fecc5c", "#fd8d3c", "#f03b20", "#bd0026"]),
    ("RdPu", &["#feebe2", "#fbb4b9", "#f768a1", "#c51b8a", "#7a0177"]),
    ("PuBuGn", &["#f6eff7", "#bdc9e1", "#67a9cf", "#1c9099", "#016c59"]),
    ("Set2", &["#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3", "#a6d854"]),
    ("Pastel1", &["#fbb4ae", "#b3cde3", "#ccebc5", "#decbe4", "#fed9a6"]),
    ("Meadow", &["#2d6a4f", "#52b788", "#b7e4c7", "#ffd166", "#ef476f"]),
    ("Dusk", &["#22223b", "#4a4e69", "#9a8c98", "#c9ada7", "#f2e9e4"]),
    ("Complementary", &["#e76f51", "#2a9d8f"]),
    ("Triadic", &["#e63946", "#457b9d", "#f4a261"]),
];

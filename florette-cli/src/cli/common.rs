//! Common utilities shared across CLI commands.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use florette::{Flower, FloretteError, Point, PointSet};

/// Everything that can stop a command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse recipe {path}: {source}")]
    Recipe {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown palette '{0}' (see `florette palettes`)")]
    UnknownPalette(String),

    #[error("layer '{0}' sets both `shape` and `random`")]
    ConflictingShape(String),

    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Flower(#[from] FloretteError),
}

/// JSON document describing a composed flower.
#[derive(Debug, Serialize)]
pub struct FlowerOutput {
    /// Seed the generator started from, when known.
    pub seed: Option<u64>,
    pub scheme: SchemeOutput,
    pub offset: i64,
    pub parts: Vec<PartOutput>,
}

#[derive(Debug, Serialize)]
pub struct SchemeOutput {
    pub name: String,
    pub colors: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PartOutput {
    pub color: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<[f64; 2]>>,
}

impl FlowerOutput {
    pub fn new(flower: &Flower, seed: Option<u64>, include_points: bool) -> Self {
        let scheme = flower.scheme();
        Self {
            seed,
            scheme: SchemeOutput {
                name: scheme.name.clone(),
                colors: scheme.colors.clone(),
            },
            offset: flower.offset(),
            parts: flower
                .parts()
                .iter()
                .map(|part| PartOutput {
                    color: part.color().to_string(),
                    path: part.geometry().path().to_string(),
                    points: include_points.then(|| point_pairs(part.geometry())),
                })
                .collect(),
        }
    }
}

/// `[[x, y], ...]` for JSON output.
pub fn point_pairs(set: &PointSet) -> Vec<[f64; 2]> {
    set.iter().map(|&Point { x, y }| [x, y]).collect()
}

/// Serialize `value` as pretty JSON to `output` (a file path, or stdout for `None`/`-`).
pub fn write_json<T: Serialize>(value: &T, output: Option<&str>) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;
    match output {
        None | Some("-") => {
            println!("{}", json);
        }
        Some(path) => {
            fs::write(path, json + "\n").map_err(|source| CliError::Write {
                path: PathBuf::from(path),
                source,
            })?;
            eprintln!("Wrote: {}", path);
        }
    }
    Ok(())
}

/// Fetch the value following a flag, or fail with a usage error.
pub fn flag_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, CliError> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| CliError::Usage(format!("{} needs a value", flag)))
}

/// Parse a numeric flag value.
pub fn parse_number<T: std::str::FromStr>(value: &str, flag: &str) -> Result<T, CliError> {
    value
        .parse()
        .map_err(|_| CliError::Usage(format!("invalid value for {}: '{}'", flag, value)))
}

/// Report a command failure and exit with status 1.
pub fn fail(err: CliError) -> ! {
    log::debug!("command failed: {:?}", err);
    eprintln!("Error: {}", err);
    std::process::exit(1);
}

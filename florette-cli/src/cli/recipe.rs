//! Flower recipes: declarative layer composition in YAML.
//!
//! A recipe lists layers from back to front. Each layer is a single
//! shape or, with `repetitions`, a ring of petals. Shapes are given
//! explicitly (missing fields use the superformula defaults) or drawn
//! from ranges with the recipe's seeded generator.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use florette::{
    sample_points, ColorScheme, Corolla, Flower, GeometryInput, ParameterRanges, PointSet, Random,
    Range, SuperformulaParams,
};

use super::common::{fail, flag_value, parse_number, write_json, CliError, FlowerOutput};

/// A complete recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe name/title
    pub name: String,

    /// Seed for every random choice (default: entropy)
    #[serde(default)]
    pub seed: Option<u64>,

    /// Builtin palette name (default: a random builtin)
    #[serde(default)]
    pub palette: Option<String>,

    /// Explicit colors; wins over `palette`
    #[serde(default)]
    pub colors: Option<Vec<String>>,

    /// Palette offset for the first layer
    #[serde(default)]
    pub offset: i64,

    /// Ordered list of layers (back to front)
    pub layers: Vec<Layer>,
}

/// A single layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    /// Layer name (for identification)
    pub name: String,

    /// Explicit curve parameters
    #[serde(default)]
    pub shape: Option<ShapeSpec>,

    /// Ranges to draw the curve parameters from
    #[serde(default)]
    pub random: Option<RangeSpec>,

    /// Petal count; omit for a single shape
    #[serde(default)]
    pub repetitions: Option<usize>,

    /// Ring radius (rings only)
    #[serde(default)]
    pub radius: f64,

    /// Farthest extent of the shape (or of each petal)
    #[serde(default = "default_scale")]
    pub scale: f64,

    /// Rotation in degrees, applied before replication
    #[serde(default)]
    pub rotation: f64,

    /// Final offset of the whole layer
    #[serde(default)]
    pub translate: Option<[f64; 2]>,

    /// Whether this layer is enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_scale() -> f64 {
    20.0
}

fn default_enabled() -> bool {
    true
}

/// Superformula parameters; missing fields fall back to the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShapeSpec {
    pub m: Option<f64>,
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub n1: Option<f64>,
    pub n2: Option<f64>,
    pub n3: Option<f64>,
    pub steps: Option<u32>,
}

impl ShapeSpec {
    pub fn to_params(&self) -> Result<SuperformulaParams, CliError> {
        let d = SuperformulaParams::default();
        Ok(SuperformulaParams::new(
            self.m.unwrap_or(d.m()),
            self.a.unwrap_or(d.a()),
            self.b.unwrap_or(d.b()),
            self.n1.unwrap_or(d.n1()),
            self.n2.unwrap_or(d.n2()),
            self.n3.unwrap_or(d.n3()),
            self.steps.unwrap_or(d.steps()),
        )?)
    }
}

/// `[min, max]` pairs; missing fields use the default ranges.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RangeSpec {
    pub m: Option<[f64; 2]>,
    pub a: Option<[f64; 2]>,
    pub b: Option<[f64; 2]>,
    pub n1: Option<[f64; 2]>,
    pub n2: Option<[f64; 2]>,
    pub n3: Option<[f64; 2]>,
    pub steps: Option<[f64; 2]>,
}

impl RangeSpec {
    pub fn to_ranges(&self) -> ParameterRanges {
        let d = ParameterRanges::default();
        let pick = |spec: Option<[f64; 2]>, fallback: Range| {
            spec.map(|[min, max]| Range::new(min, max)).unwrap_or(fallback)
        };
        ParameterRanges {
            m: pick(self.m, d.m),
            a: pick(self.a, d.a),
            b: pick(self.b, d.b),
            n1: pick(self.n1, d.n1),
            n2: pick(self.n2, d.n2),
            n3: pick(self.n3, d.n3),
            steps: pick(self.steps, d.steps),
        }
    }
}

impl Layer {
    fn params(&self, random: &mut Random) -> Result<SuperformulaParams, CliError> {
        match (&self.shape, &self.random) {
            (Some(_), Some(_)) => Err(CliError::ConflictingShape(self.name.clone())),
            (Some(shape), None) => shape.to_params(),
            (None, Some(ranges)) => Ok(ranges.to_ranges().randomize(random)?),
            (None, None) => Ok(SuperformulaParams::default()),
        }
    }

    /// Build this layer's geometry.
    pub fn build(&self, random: &mut Random) -> Result<GeometryInput, CliError> {
        let params = self.params(random)?;
        let (dx, dy) = self.translate.map_or((0.0, 0.0), |[x, y]| (x, y));

        let input = match self.repetitions {
            Some(repetitions) => {
                let corolla = Corolla::new(params, repetitions, self.radius, self.scale)
                    .with_rotation(self.rotation);
                let mut ring = corolla.build()?;
                ring.translate(dx, dy);
                GeometryInput::Group(ring)
            }
            None => {
                let mut shape = PointSet::new(sample_points(&params)?);
                shape.scale_to_radius(self.scale)?.rotate(self.rotation).translate(dx, dy);
                GeometryInput::Single(shape)
            }
        };
        Ok(input)
    }
}

impl Recipe {
    /// Load a recipe from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse recipe YAML; `origin` only labels errors.
    pub fn parse(content: &str, origin: &Path) -> Result<Self, CliError> {
        serde_yaml::from_str(content).map_err(|source| CliError::Recipe {
            path: PathBuf::from(origin),
            source,
        })
    }

    fn scheme(&self, random: &mut Random) -> Result<ColorScheme, CliError> {
        if let Some(colors) = &self.colors {
            return Ok(ColorScheme::new(self.name.clone(), colors.clone()));
        }
        match &self.palette {
            Some(name) => {
                ColorScheme::builtin(name).ok_or_else(|| CliError::UnknownPalette(name.clone()))
            }
            None => Ok(ColorScheme::random_builtin(random)?),
        }
    }

    /// Compose the recipe with `random`. Disabled layers are skipped and do
    /// not take a palette slot.
    pub fn render(&self, random: &mut Random) -> Result<Flower, CliError> {
        let scheme = self.scheme(random)?;
        let inputs = self
            .layers
            .iter()
            .filter(|layer| layer.enabled)
            .map(|layer| layer.build(random))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Flower::new(inputs, scheme, self.offset)?)
    }

    /// Generator for this recipe, honoring an override seed.
    pub fn random(&self, seed_override: Option<u64>) -> Result<Random, CliError> {
        Ok(match seed_override.or(self.seed) {
            Some(seed) => Random::with_seed(seed)?,
            None => Random::new(),
        })
    }
}

/// Execute the recipe command.
pub fn cmd_recipe(args: &[String]) {
    if args.is_empty() {
        print_usage();
        return;
    }
    if let Err(e) = run(args) {
        fail(e);
    }
}

fn run(args: &[String]) -> Result<(), CliError> {
    let mut recipe_path: Option<&str> = None;
    let mut output_path: Option<&str> = None;
    let mut seed: Option<u64> = None;
    let mut include_points = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                output_path = Some(flag_value(args, &mut i, "--output")?);
            }
            "-s" | "--seed" => {
                seed = Some(parse_number(flag_value(args, &mut i, "--seed")?, "--seed")?);
            }
            "--points" => include_points = true,
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            "--example" => {
                print_example();
                return Ok(());
            }
            arg if !arg.starts_with('-') => {
                recipe_path = Some(arg);
            }
            other => {
                return Err(CliError::Usage(format!("unknown argument '{}'", other)));
            }
        }
        i += 1;
    }

    let recipe_path =
        recipe_path.ok_or_else(|| CliError::Usage("no recipe file specified".to_string()))?;

    eprintln!("Loading recipe: {}", recipe_path);
    let recipe = Recipe::load(recipe_path)?;
    eprintln!("Recipe: {}", recipe.name);
    eprintln!("Layers: {}", recipe.layers.len());

    let mut random = recipe.random(seed)?;
    let start_seed = random.seed();
    let flower = recipe.render(&mut random)?;
    eprintln!("Generated {} parts", flower.parts().len());

    write_json(&FlowerOutput::new(&flower, Some(start_seed), include_points), output_path)
}

fn print_usage() {
    eprintln!("florette recipe - Compose a flower from YAML");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    florette recipe <recipe.yaml> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -o, --output <file>    Output JSON file (- for stdout, default: stdout)");
    eprintln!("    -s, --seed <n>         Override the recipe's seed");
    eprintln!("    --points               Include raw points next to each path");
    eprintln!("    --example              Print an example recipe YAML");
    eprintln!("    -h, --help             Show this help");
}

fn print_example() {
    println!("{}", EXAMPLE_RECIPE);
}

const EXAMPLE_RECIPE: &str = r##"# Example florette recipe
name: "Sunrise"
seed: 42
palette: "Spectral"
offset: 0

layers:
  - name: sepals
    random:
      m: [4, 8]
      steps: [80, 160]
    repetitions: 6
    radius: 40
    scale: 30
    rotation: 30

  - name: petals
    shape:
      m: 2
      a: 1.5
      b: 2
      n1: 1
      n2: 3
      n3: 1.4
      steps: 120
    repetitions: 8
    radius: 24
    scale: 22

  - name: center
    shape:
      m: 12
      n1: 2
      n2: 2
      n3: 2
    scale: 12
"##;

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> Recipe {
        Recipe::parse(yaml, Path::new("test.yaml")).unwrap()
    }

    #[test]
    fn example_recipe_renders() {
        let recipe = parse(EXAMPLE_RECIPE);
        assert_eq!(recipe.layers.len(), 3);

        let mut random = recipe.random(None).unwrap();
        let flower = recipe.render(&mut random).unwrap();
        assert_eq!(flower.parts().len(), 6 + 8 + 1);

        let colors = &flower.scheme().colors;
        assert!(flower.parts()[..6].iter().all(|p| p.color() == colors[0]));
        assert!(flower.parts()[6..14].iter().all(|p| p.color() == colors[1]));
        assert_eq!(flower.parts()[14].color(), colors[2]);
    }

    #[test]
    fn seeded_recipe_is_reproducible() {
        let recipe = parse(EXAMPLE_RECIPE);
        let a = recipe.render(&mut recipe.random(None).unwrap()).unwrap();
        let b = recipe.render(&mut recipe.random(None).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn explicit_colors_and_defaults() {
        let recipe = parse(
            r##"
name: plain
colors: ["#000000", "#ffffff"]
offset: 1
layers:
  - name: one
  - name: two
    enabled: false
  - name: three
    translate: [5, 5]
"##,
        );
        assert_eq!(recipe.seed, None);
        let flower = recipe.render(&mut Random::with_seed(3).unwrap()).unwrap();
        assert_eq!(flower.parts().len(), 2);
        assert_eq!(flower.parts()[0].color(), "#ffffff");
        assert_eq!(flower.parts()[1].color(), "#000000");

        // Default shape, default scale of 20.
        let first = flower.parts()[0].geometry();
        assert_eq!(first.len(), 51);
        assert!((first.max_radius().unwrap() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_palette_is_reported() {
        let recipe = parse("name: x\npalette: Nope\nlayers: []\n");
        let result = recipe.render(&mut Random::with_seed(1).unwrap());
        assert!(matches!(result, Err(CliError::UnknownPalette(name)) if name == "Nope"));
    }

    #[test]
    fn shape_and_random_conflict() {
        let recipe =
            parse("name: x\nlayers:\n  - name: both\n    shape: {m: 4}\n    random: {m: [2, 6]}\n");
        let result = recipe.render(&mut Random::with_seed(1).unwrap());
        assert!(matches!(result, Err(CliError::ConflictingShape(_))));
    }

    #[test]
    fn invalid_shape_surfaces_library_error() {
        let recipe = parse("name: x\nlayers:\n  - name: flat\n    shape: {a: 0}\n");
        let result = recipe.render(&mut Random::with_seed(1).unwrap());
        assert!(matches!(result, Err(CliError::Flower(_))));
    }

    #[test]
    fn empty_colors_rejected() {
        let recipe = parse("name: x\ncolors: []\nlayers:\n  - name: one\n");
        let result = recipe.render(&mut Random::with_seed(1).unwrap());
        assert!(matches!(result, Err(CliError::Flower(_))));
    }

    #[test]
    fn seed_override_wins() {
        let recipe = parse("name: x\nseed: 5\nlayers: []\n");
        assert_eq!(recipe.random(Some(6)).unwrap().seed(), 6);
        assert_eq!(recipe.random(None).unwrap().seed(), 5);
        assert!(recipe.random(Some(0)).is_err());
    }

    #[test]
    fn malformed_yaml_is_a_recipe_error() {
        let result = Recipe::parse("name: [unclosed", Path::new("bad.yaml"));
        assert!(matches!(result, Err(CliError::Recipe { .. })));
    }
}

//! Generate a random flower from a seed.
//!
//! The whole figure (palette, ring count, petal shapes, palette offset)
//! comes from one seeded generator, so the same seed always prints the
//! same JSON.

use florette::{
    sample_points, ColorScheme, Corolla, Flower, GeometryInput, ParameterRanges, PointSet, Random,
};

use super::common::{fail, flag_value, parse_number, write_json, CliError, FlowerOutput};

/// Radius of the outermost ring, in output units.
const OUTER_RADIUS: f64 = 60.0;
/// Extent of an outermost petal.
const OUTER_PETAL: f64 = 35.0;
/// Extent of the center disc.
const CENTER_RADIUS: f64 = 18.0;

/// Build a flower: 2-3 corolla rings, largest first, then a center shape.
pub fn random_flower(random: &mut Random) -> Result<Flower, CliError> {
    let scheme = ColorScheme::random_builtin(random)?;
    let ranges = ParameterRanges::default();

    let ring_count = random.range_int(2, 4);
    let mut inputs: Vec<GeometryInput> = Vec::new();

    for ring in 0..ring_count {
        let shrink = 1.0 - ring as f64 / (ring_count as f64 + 1.0);
        let corolla =
            Corolla::random(random, &ranges, OUTER_RADIUS * shrink, OUTER_PETAL * shrink)?;
        log::debug!(
            "ring {}: {} petals, m={}, steps={}",
            ring,
            corolla.repetitions,
            corolla.petal.m(),
            corolla.petal.steps()
        );
        inputs.push(corolla.build()?.into());
    }

    let center_params = ranges.randomize(random)?;
    let mut center = PointSet::new(sample_points(&center_params)?);
    center.scale_to_radius(CENTER_RADIUS)?;
    inputs.push(center.into());

    let offset = random.range_int(0, scheme.colors.len() as i64);
    Ok(Flower::new(inputs, scheme, offset)?)
}

/// Execute the generate command.
pub fn cmd_generate(args: &[String]) {
    if let Err(e) = run(args) {
        fail(e);
    }
}

fn run(args: &[String]) -> Result<(), CliError> {
    let mut seed: Option<u64> = None;
    let mut output_path: Option<&str> = None;
    let mut include_points = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-s" | "--seed" => {
                seed = Some(parse_number(flag_value(args, &mut i, "--seed")?, "--seed")?);
            }
            "-o" | "--output" => {
                output_path = Some(flag_value(args, &mut i, "--output")?);
            }
            "--points" => include_points = true,
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            other => {
                return Err(CliError::Usage(format!("unknown argument '{}'", other)));
            }
        }
        i += 1;
    }

    let mut random = match seed {
        Some(seed) => Random::with_seed(seed)?,
        None => Random::new(),
    };
    let start_seed = random.seed();
    eprintln!("Seed: {}", start_seed);

    let flower = random_flower(&mut random)?;
    eprintln!("Generated {} parts", flower.parts().len());

    write_json(&FlowerOutput::new(&flower, Some(start_seed), include_points), output_path)
}

fn print_usage() {
    eprintln!("florette generate - Build a random flower");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    florette generate [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -s, --seed <n>         Seed in 1..=2147483646 (default: random)");
    eprintln!("    -o, --output <file>    Output JSON file (- for stdout, default: stdout)");
    eprintln!("    --points               Include raw points next to each path");
    eprintln!("    -h, --help             Show this help");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_flower() {
        let a = random_flower(&mut Random::with_seed(4242).unwrap()).unwrap();
        let b = random_flower(&mut Random::with_seed(4242).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn flower_has_rings_and_center() {
        let flower = random_flower(&mut Random::with_seed(1).unwrap()).unwrap();
        let parts = flower.parts();
        // At least two rings of >= 4 petals plus the center.
        assert!(parts.len() >= 9, "got {} parts", parts.len());

        let center = parts.last().unwrap().geometry();
        assert!((center.max_radius().unwrap() - CENTER_RADIUS).abs() < 1e-9);
    }

    #[test]
    fn colors_come_from_scheme() {
        let flower = random_flower(&mut Random::with_seed(99).unwrap()).unwrap();
        for part in flower.parts() {
            assert!(flower.scheme().colors.iter().any(|c| c == part.color()));
        }
    }
}

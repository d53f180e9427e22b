//! Sample a single superformula curve.

use serde::Serialize;

use florette::{generate_scaled_shape, sample_points, Point, PointSet, SuperformulaParams};

use super::common::{fail, flag_value, parse_number, point_pairs, write_json, CliError};

#[derive(Debug, Serialize)]
struct SampleOutput {
    m: f64,
    a: f64,
    b: f64,
    n1: f64,
    n2: f64,
    n3: f64,
    steps: u32,
    /// Target radius when the shape was scaled
    #[serde(skip_serializing_if = "Option::is_none")]
    radius: Option<f64>,
    path: String,
    points: Vec<[f64; 2]>,
}

/// Sample `params`, scaled to `radius` when given.
///
/// Unscaled output includes the closing duplicate point; scaled output
/// has exactly `steps` points.
pub fn sample(params: &SuperformulaParams, radius: Option<f64>) -> Result<PointSet, CliError> {
    let points: Vec<Point> = match radius {
        Some(r) => generate_scaled_shape(params, r)?,
        None => sample_points(params)?,
    };
    Ok(PointSet::new(points))
}

/// Execute the sample command.
pub fn cmd_sample(args: &[String]) {
    if let Err(e) = run(args) {
        fail(e);
    }
}

fn run(args: &[String]) -> Result<(), CliError> {
    let mut params = SuperformulaParams::default();
    let mut radius: Option<f64> = None;
    let mut output_path: Option<&str> = None;

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--m" => params = params.with_m(parse_number(flag_value(args, &mut i, flag)?, flag)?)?,
            "--a" => params = params.with_a(parse_number(flag_value(args, &mut i, flag)?, flag)?)?,
            "--b" => params = params.with_b(parse_number(flag_value(args, &mut i, flag)?, flag)?)?,
            "--n1" => {
                params = params.with_n1(parse_number(flag_value(args, &mut i, flag)?, flag)?)?
            }
            "--n2" => {
                params = params.with_n2(parse_number(flag_value(args, &mut i, flag)?, flag)?)?
            }
            "--n3" => {
                params = params.with_n3(parse_number(flag_value(args, &mut i, flag)?, flag)?)?
            }
            "--steps" => {
                params = params.with_steps(parse_number(flag_value(args, &mut i, flag)?, flag)?)?
            }
            "-r" | "--radius" => {
                radius = Some(parse_number(flag_value(args, &mut i, flag)?, flag)?);
            }
            "-o" | "--output" => {
                output_path = Some(flag_value(args, &mut i, flag)?);
            }
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

    let set = sample(&params, radius)?;
    let output = SampleOutput {
        m: params.m(),
        a: params.a(),
        b: params.b(),
        n1: params.n1(),
        n2: params.n2(),
        n3: params.n3(),
        steps: params.steps(),
        radius,
        path: set.path().to_string(),
        points: point_pairs(&set),
    };
    write_json(&output, output_path)
}

fn print_usage() {
    eprintln!("florette sample - Sample one superformula curve");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    florette sample [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS (defaults: m=2 a=1.5 b=2 n1=1 n2=3 n3=1.4 steps=50):");
    eprintln!("    --m, --a, --b <n>      Symmetry order and lobe stretch");
    eprintln!("    --n1, --n2, --n3 <n>   Lobe sharpness exponents");
    eprintln!("    --steps <n>            Angular subdivisions");
    eprintln!("    -r, --radius <n>       Scale so the farthest point lies at <n>");
    eprintln!("    -o, --output <file>    Output JSON file (- for stdout, default: stdout)");
    eprintln!("    -h, --help             Show this help");
}

//! florette - seeded superformula flowers from the command line
//!
//! Usage:
//!   florette generate [-s seed]       Random flower as JSON
//!   florette recipe <recipe.yaml>     Flower from a YAML recipe
//!   florette sample [--m n ...]       One superformula curve
//!   florette palettes                 List builtin color schemes
//!
//! Diagnostics go to stderr; set `RUST_LOG=debug` for more.

use std::env;

mod cli;

use cli::{cmd_generate, cmd_recipe, cmd_sample};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    match args[1].as_str() {
        "generate" => cmd_generate(&args[2..]),
        "recipe" => cmd_recipe(&args[2..]),
        "sample" => cmd_sample(&args[2..]),
        "palettes" => cmd_palettes(),
        "help" | "--help" | "-h" => print_usage(&args[0]),
        other => {
            eprintln!("Unknown command: {}", other);
            eprintln!();
            print_usage(&args[0]);
            std::process::exit(1);
        }
    }
}

/// List builtin color schemes.
fn cmd_palettes() {
    println!("Available palettes:");
    for name in florette::palette::builtin_names() {
        if let Some(scheme) = florette::ColorScheme::builtin(name) {
            println!("  {:<14} {}", scheme.name, scheme.colors.join(" "));
        }
    }
}

fn print_usage(prog: &str) {
    eprintln!("florette - seeded superformula flowers");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {} generate [-s seed] [-o file] [--points]", prog);
    eprintln!("  {} recipe <recipe.yaml> [-s seed] [-o file] [--points]", prog);
    eprintln!(
        "  {} sample [--m n] [--a n] [--b n] [--n1 n] [--n2 n] [--n3 n] [--steps n] [-r radius]",
        prog
    );
    eprintln!("  {} palettes", prog);
    eprintln!();
    eprintln!("Run '{} <command> --help' for command options.", prog);
}

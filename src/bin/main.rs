use std::io;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use log::error;

use revised_simplex::algorithm::{solve, solve_with};
use revised_simplex::algorithm::revised_simplex::config::{Config, Limit, MAX_CONSTRAINTS, MAX_ITERATIONS, MAX_VARIABLES, TOLERANCE};
use revised_simplex::io::{import, read};
use revised_simplex::io::report::{Printer, Problem};

/// Solve a standard form linear program with the revised simplex method.
///
/// The input consists of the number of constraints `m` and variables `n`, the `n` objective
/// coefficients and, for every constraint, `n` coefficients followed by the right-hand side.
#[derive(Parser, Debug)]
#[command(name = "revised-simplex")]
#[command(version)]
struct Opts {
    /// File containing the problem description, standard input if absent
    #[arg(value_name = "FILE")]
    problem_file: Option<PathBuf>,

    /// Maximum number of iterations
    #[arg(long, default_value_t = MAX_ITERATIONS)]
    max_iterations: usize,

    /// Maximum number of variables, excluding slacks
    #[arg(long, default_value_t = MAX_VARIABLES)]
    max_variables: usize,

    /// Maximum number of constraints
    #[arg(long, default_value_t = MAX_CONSTRAINTS)]
    max_constraints: usize,

    /// Basic values of smaller magnitude are rounded to zero, at least 0
    #[arg(long, default_value_t = TOLERANCE, value_parser = parse_tolerance)]
    tolerance: f64,

    /// Only print the problem and the result, not every iteration
    #[arg(short, long)]
    quiet: bool,

    /// Wait for enter before exiting
    #[arg(long)]
    pause: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let opts = Opts::parse();
    init_logging(opts.verbose);

    let config = Config::<f64>::default()
        .with_limit(Limit::Iterations, opts.max_iterations)
        .with_limit(Limit::Variables, opts.max_variables)
        .with_limit(Limit::Constraints, opts.max_constraints)
        .with_tolerance(opts.tolerance);

    println!("RevisedSimplex {}", env!("CARGO_PKG_VERSION"));
    let imported = match &opts.problem_file {
        Some(path) => import(path, &config),
        None => {
            print!("Input >> ");
            // The prompt is cosmetic
            let _ = io::stdout().flush();
            read(io::stdin().lock(), &config)
        },
    };
    let problem = match imported {
        Ok(problem) => problem,
        Err(error) => {
            error!("Couldn't load the problem");
            eprintln!("{}", error);
            end(opts.pause, 1);
        },
    };

    println!();
    println!("--- output ---");
    println!();
    println!("{}", Problem(&problem));

    let result = if opts.quiet {
        solve(&problem, config)
    } else {
        let mut printer = Printer::new(io::stdout());
        let result = solve_with(&problem, config, &mut printer);
        if let Err(error) = printer.finish() {
            error!("Couldn't print all iterations: {}", error);
        }
        result
    };

    match result {
        Ok(result) => {
            println!("{}", result);
            end(opts.pause, 0);
        },
        Err(error) => {
            eprintln!("{}", error);
            end(opts.pause, 1);
        },
    }
}

fn parse_tolerance(value: &str) -> Result<f64, String> {
    let tolerance = value.parse::<f64>().map_err(|error| error.to_string())?;
    if tolerance >= 0f64 {
        Ok(tolerance)
    } else {
        Err(format!("should be nonnegative, got {}", value))
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Politely end the program.
fn end(pause: bool, code: i32) -> ! {
    if pause {
        println!("Press enter to end program");
        let mut line = String::new();
        let _ = io::stdin().lock().read_line(&mut line);
    }

    exit(code)
}

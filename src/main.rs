//! knapsack-anneal: command-line 0/1 knapsack solver.
//!
//! Loads a plain-text instance (capacity / profits / weights on three
//! lines), runs one Simulated Annealing search, and prints the best
//! selection found.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use knapsack_anneal::knapsack::{list_instances, load_instance};
use knapsack_anneal::sa::{SaConfig, SaRunner};
use knapsack_anneal::Error;

#[derive(Parser)]
#[command(name = "knapsack-anneal")]
#[command(author, version, about)]
struct Args {
    /// Instance file to solve.
    instance: Option<PathBuf>,

    /// List the .txt instance files in a directory and exit.
    #[arg(short, long, value_name = "DIR")]
    list: Option<PathBuf>,

    /// Cooling speed (must be positive).
    #[arg(long, default_value_t = 0.02)]
    cooling_rate: f64,

    /// Neighborhood passes per outer restart.
    #[arg(long, default_value_t = 100)]
    iterations: usize,

    /// Temperature floor that ends the search.
    #[arg(long, default_value_t = 1e-3)]
    min_temperature: f64,

    /// Accepted non-improving moves tolerated before stopping.
    #[arg(long, default_value_t = 10)]
    no_improve_limit: usize,

    /// Random seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
}

fn solve(args: &Args) -> Result<(), Error> {
    if let Some(dir) = &args.list {
        for path in list_instances(dir)? {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                println!("{stem}");
            }
        }
        return Ok(());
    }

    let Some(path) = &args.instance else {
        return Err(Error::Input(
            "no instance file given (see --help)".into(),
        ));
    };

    let instance = load_instance(path)?;
    println!("capacity: {}", instance.capacity());
    println!("items: {}", instance.len());
    println!("profits: {:?}", instance.profit());
    println!("weights: {:?}", instance.weight());

    let mut config = SaConfig::default()
        .with_cooling_rate(args.cooling_rate)
        .with_max_inner_iterations(args.iterations)
        .with_min_temperature(args.min_temperature)
        .with_no_improve_limit(args.no_improve_limit);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let result = SaRunner::run(&instance, &config)?;

    let bits: String = result
        .best
        .iter()
        .map(|&b| if b { '1' } else { '0' })
        .collect();
    println!("solution: {bits}");
    println!("cost: {}", result.best_cost);
    println!(
        "evaluations: {} (accepted {}, improving {})",
        result.iterations, result.accepted_moves, result.improving_moves
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    match solve(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

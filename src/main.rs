//! Demo driver: prints an input sequence next to the output of every sort, and walks through the
//! zoo example.

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use rand::distributions::Uniform;
use rand::prelude::*;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use sorters::zoo::{Animal, Cat, PositivePoint};
use sorters::{SortFn, ALGORITHMS};

const DEFAULT_INPUT: [i32; 8] = [1, 3, 5, 3, 7, 4, 8, 2];

#[derive(Debug, Parser)]
#[command(name = "sorters", version, about = "Classic sorting algorithms side by side")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sort a sequence with every algorithm and print the results.
    Sort(SortArgs),
    /// Run the animal and point example.
    Zoo,
}

#[derive(Debug, Default, Args)]
struct SortArgs {
    /// Values to sort. Defaults to `1 3 5 3 7 4 8 2`.
    #[arg(allow_negative_numbers = true, conflicts_with = "random")]
    values: Vec<i32>,

    /// Only run the named algorithm. Can be given multiple times.
    #[arg(long = "only", value_name = "NAME")]
    only: Vec<String>,

    /// Sort `LEN` random values in `0..100` instead of explicit ones.
    #[arg(long, value_name = "LEN")]
    random: Option<usize>,

    /// Seed for `--random`. Picked at random when not set.
    #[arg(long, requires = "random")]
    seed: Option<u64>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("unknown algorithm `{name}`, expected one of: {known}")]
    UnknownAlgorithm { name: String, known: String },
}

fn selected_algorithms(only: &[String]) -> Result<Vec<(&'static str, SortFn)>, CliError> {
    if only.is_empty() {
        return Ok(ALGORITHMS.to_vec());
    }

    only.iter()
        .map(|name| {
            ALGORITHMS
                .iter()
                .find(|(algo_name, _)| algo_name == name)
                .copied()
                .ok_or_else(|| CliError::UnknownAlgorithm {
                    name: name.clone(),
                    known: ALGORITHMS.map(|(algo_name, _)| algo_name).join(", "),
                })
        })
        .collect()
}

fn input_values(args: &SortArgs) -> Vec<i32> {
    if let Some(len) = args.random {
        let seed = args.seed.unwrap_or_else(|| thread_rng().gen());
        debug!(len, seed, "generating random input");

        let mut rng = StdRng::seed_from_u64(seed);
        let dist = Uniform::from(0..100);
        return (0..len).map(|_| dist.sample(&mut rng)).collect();
    }

    if args.values.is_empty() {
        DEFAULT_INPUT.to_vec()
    } else {
        args.values.clone()
    }
}

fn run_sort(args: &SortArgs) -> Result<(), Box<dyn std::error::Error>> {
    let algorithms = selected_algorithms(&args.only)?;
    let values = input_values(args);

    println!("BEFORE: {values:?}");
    for (name, sort_fn) in algorithms {
        debug!(algorithm = name, len = values.len(), "sorting");
        println!("AFTER {name}: {:?}", sort_fn(&values));
    }

    Ok(())
}

fn run_zoo() -> Result<(), Box<dyn std::error::Error>> {
    let mut cat = Cat::new("Tom", 2)?;
    println!("{}", cat.movement());
    println!("{}", cat.info());
    println!("{}", cat.make_sound());

    let paws = cat.paws_count();
    println!("У котика {paws} {}", Cat::paws_text(paws));

    cat.set_paws_count(5)?;
    cat.set_paws_count(12)?;

    println!("С котиками закончили, переходим к точкам");

    let point = PositivePoint::new_xy(10, 20)?;
    let point2 = PositivePoint::new(10, 20, 30)?;
    println!("{}", point > point2);

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Sort(args)) => run_sort(&args),
        Some(Command::Zoo) => run_zoo(),
        None => run_sort(&SortArgs::default()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

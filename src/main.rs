use anyhow::Context;
use bounded_sample::{
    driving_sequence_with, sample, DEFAULT_AMOUNT, DEFAULT_LENGTH, DEFAULT_LIMIT,
};
use clap::Parser;
use rand::SeedableRng;
use tracing_subscriber::filter::LevelFilter;

/// Print a random sample of bounded square roots
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Number of integers (starting from 0) fed through the transform
    #[arg(long, default_value_t = DEFAULT_LENGTH)]
    population: usize,

    /// Number of values to draw without replacement
    #[arg(long, default_value_t = DEFAULT_AMOUNT)]
    amount: usize,

    /// Square roots are halved until they do not exceed this value
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    limit: f64,

    /// Seed for a reproducible sample
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries only the sample
    tracing_subscriber::fmt()
        .with_max_level(level(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    let values = driving_sequence_with(cli.population, cli.limit)
        .context("Failed to compute the driving sequence")?;

    let drawn = match cli.seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded generator");
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            sample(&mut rng, &values, cli.amount)
        }
        None => sample(&mut rand::thread_rng(), &values, cli.amount),
    };
    let s = drawn.context("Failed to draw the sample")?;

    tracing::info!(positions = ?s.positions(), "sampled");
    println!("{s}");
    Ok(())
}

//! worked-example - prints the median of two sorted lists
//!
//! Usage:
//!   worked-example [--first 1,3,7,8] [--second 3,4]
//!
//! Set `RUST_LOG=sorted_median=trace` to see each candidate partition.

use anyhow::{Result, bail};
use clap::Parser;
use sorted_median::MedianFinder;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "worked-example")]
#[command(about = "Median of two sorted lists by partition search")]
struct Cli {
    /// First sorted list, comma separated
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true, default_values_t = [1.0, 3.0, 7.0, 8.0])]
    first: Vec<f64>,

    /// Second sorted list, comma separated
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true, default_values_t = [3.0, 4.0])]
    second: Vec<f64>,
}

fn ensure_sorted(name: &str, sequence: &[f64]) -> Result<()> {
    if !sequence.is_sorted() {
        bail!("--{name} must be sorted ascending, got {sequence:?}");
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    ensure_sorted("first", &cli.first)?;
    ensure_sorted("second", &cli.second)?;

    let finder = MedianFinder::new(&cli.first, &cli.second);
    let (median, stats) = finder.median_with_stats()?;
    tracing::info!(iterations = stats.iterations, "median found");

    println!("median {median}");
    Ok(())
}

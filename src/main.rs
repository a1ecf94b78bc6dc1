use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::{Builder, Env};

use tsp_randopt::experiment::{CsvFileSink, ExperimentConfig, ExperimentHarness};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Root directory for result files
    #[arg(long, default_value = "Optimization_Results")]
    output_dir: PathBuf,

    /// Result file name inside the dated directory
    #[arg(long, default_value = "travelingsalesman_results.csv")]
    file_name: String,

    /// Trials per iteration budget
    #[arg(long, default_value_t = 10)]
    test_runs: usize,

    /// Cities per generated instance
    #[arg(long, default_value_t = 50)]
    cities: usize,

    /// Master seed for a reproducible experiment
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = ExperimentConfig::default()
        .with_cities(args.cities)
        .with_test_runs(args.test_runs);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let harness = ExperimentHarness::new(config).context("invalid experiment configuration")?;

    let mut sink = CsvFileSink::new(args.output_dir, args.file_name);
    log::info!("appending results to {}", sink.path().display());
    let rows = harness.run(&mut sink);
    log::info!("finished {} iteration budgets", rows.len());
    Ok(())
}

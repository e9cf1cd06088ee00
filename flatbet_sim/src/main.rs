use clap::Parser;
use flatbet_sim::prelude::*;
use flatbet_sim::report;
use std::error::Error;
use std::io;
use std::process::ExitCode;

/// Simulates generations of flat-bet blackjack and reports the bankroll
/// trajectories.
#[derive(Debug, Parser)]
#[command(name = "flatbet", version)]
struct Cli {
    /// Number of independent generations to simulate
    #[arg(long, default_value_t = 100)]
    generations: u32,

    /// Maximum number of rounds attempted per generation
    #[arg(long, default_value_t = 10_000)]
    hands: u32,

    /// Starting bankroll for every generation
    #[arg(long, default_value_t = 1000.0)]
    bankroll: f64,

    /// Base seed for reproducible runs; omitted means entropy seeding
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the full result set as JSON instead of the console report
    #[arg(long)]
    json: bool,

    /// Print only the summary, skipping the charts
    #[arg(long)]
    quiet: bool,
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut builder = GenerationConfig::new();
    builder
        .n_generations(cli.generations)
        .n_hands_per_generation(cli.hands)
        .initial_bankroll(cli.bankroll);
    if let Some(seed) = cli.seed {
        builder.seed(seed);
    }
    let config = builder.build();

    let runner = GenerationRunner::new(config)?;
    let set = runner.run()?;

    let stdout = io::stdout();
    if cli.json {
        report::write_json(&set, stdout.lock())?;
        return Ok(());
    }

    report::write_summary(&set, stdout.lock())?;
    if !cli.quiet {
        report::write_tally_chart(&set.aggregate_tally(), stdout.lock())?;
        report::write_bankroll_chart(
            set.best(),
            set.worst(),
            config.initial_bankroll,
            stdout.lock(),
        )?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

//! acos-compare
//!
//! Sweeps x over [-1, 1] and prints, tab-separated, the reference `acos`,
//! every approximation in `fastacos`, and each approximation's signed error
//! (reference minus approximation).

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use fastacos::approx;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

mod error;
mod report;

use error::CompareError;
use report::{write_summary, write_table, SweepConfig};

/// Compare arccosine approximations against the reference implementation.
#[derive(Parser, Debug)]
#[command(name = "acos-compare")]
#[command(version)]
#[command(about = "Tabulate arccosine approximations and their errors over [-1, 1]")]
struct Cli {
    /// Binomial series terms beyond the leading x (clamped to 29)
    rounds: u32,

    /// Distance between consecutive samples
    #[arg(allow_negative_numbers = true)]
    step: f32,

    /// Decimal places for every printed value
    #[arg(long, default_value_t = 6)]
    precision: usize,

    /// Print per-approximation error statistics to stderr after the table
    #[arg(long)]
    summary: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), CompareError> {
    let config = SweepConfig::new(cli.rounds, cli.step)?;
    info!(
        rounds = config.rounds,
        step = config.step,
        precision = cli.precision,
        "starting sweep"
    );
    debug!(hardware_fma = approx::hardware_fma(), "polynomial backend");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summaries = write_table(&mut out, &config, cli.precision)?;
    out.flush()?;

    if cli.summary {
        let stderr = io::stderr();
        write_summary(&mut stderr.lock(), &summaries)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("acos-compare: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

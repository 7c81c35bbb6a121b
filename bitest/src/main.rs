//! Random-case generator and replay harness for [`big_int`].
//!
//! `bitest gen` writes tab-separated `lhs op rhs expected` lines with the
//! expected value computed up front; `bitest run` recomputes every line and
//! reports each mismatch, then a pass/fail summary.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

mod cases;
mod harness;

/// bitest CLI.
#[derive(Parser)]
#[command(name = "bitest", about = "Arithmetic case harness for big_int")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a case file and report mismatches.
    Run(RunArgs),
    /// Generate a random case file.
    Gen(GenArgs),
}

#[derive(Parser)]
struct RunArgs {
    /// Input case file (tab-separated: lhs, operator, rhs, expected).
    file: PathBuf,
}

#[derive(Parser)]
struct GenArgs {
    /// Number of cases to generate.
    #[arg(long, default_value_t = 10_000)]
    count: u32,

    /// Seed for reproducible output; drawn from the OS when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Output file; stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(if cli.verbose { "debug" } else { "info" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let result = match cli.command {
        Commands::Run(args) => cmd_run(args),
        Commands::Gen(args) => cmd_gen(args),
    };
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let input = BufReader::new(File::open(&args.file)?);
    let mut out = io::stdout();
    let report = harness::run(input, &mut out)?;
    writeln!(out, "SUCCESS/FAILED: {}/{}", report.passed, report.failed)?;
    info!(passed = report.passed, failed = report.failed, "replay complete");
    Ok(())
}

fn cmd_gen(args: GenArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    match args.output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(&path)?);
            cases::generate(&mut rng, args.count, &mut out)?;
            out.flush()?;
            info!(cases = args.count, file = %path.display(), "cases written");
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            cases::generate(&mut rng, args.count, &mut out)?;
            out.flush()?;
        }
    }
    Ok(())
}

//! E20 cache simulator CLI.
//!
//! This binary loads an E20 machine-code file, runs it to completion over the
//! configured cache hierarchy, and prints the access log. It performs:
//! 1. **Argument parsing:** `[-h] [--cache CACHE] [--format text|json] [--stats] filename`.
//! 2. **Logging setup:** `tracing` diagnostics to stderr, filtered by `RUST_LOG`.
//! 3. **Termination:** The only place where errors become a non-zero exit status.

mod output;

use std::error::Error;
use std::fs;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use e20_core::common::LoadError;
use e20_core::config::CacheHierarchyConfig;
use e20_core::sim::load_machine_code;
use e20_core::Cpu;

use crate::output::{Format, Printer};

#[derive(Parser, Debug)]
#[command(
    name = "simcache",
    version,
    about = "Simulate E20 cache",
    long_about = "Simulate E20 cache.\n\nRuns an E20 machine-code program and logs every load and store as it is classified by a one- or two-level LRU cache.\n\nExamples:\n  simcache --cache 4,1,1 program.bin\n  simcache --cache 8,2,2,32,4,4 --stats program.bin"
)]
struct Cli {
    /// Cache configuration: size,associativity,blocksize (for one cache) or
    /// size,associativity,blocksize,size,associativity,blocksize (for two caches)
    #[arg(long, value_name = "CACHE")]
    cache: Option<String>,

    /// Access log format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print simulation statistics to stderr after the run.
    #[arg(long)]
    stats: bool,

    /// The file containing machine code, typically with .bin suffix
    filename: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Loads the program, simulates it, and writes the access log to stdout.
///
/// Without `--cache` the file is only checked for readability.
fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let text = fs::read_to_string(&cli.filename).map_err(LoadError::from)?;
    let Some(cache) = cli.cache.as_deref() else {
        tracing::warn!("no --cache given; nothing to simulate");
        return Ok(());
    };

    let config: CacheHierarchyConfig = cache.parse()?;
    let memory = load_machine_code(&text)?;
    let mut cpu = Cpu::with_config(memory, &config)?;

    let mut printer = Printer::new(BufWriter::new(io::stdout().lock()), cli.format);
    for (level, level_config) in config.levels() {
        printer.config(level, level_config);
    }
    cpu.run(&mut printer)?;
    let _ = printer.finish()?;

    if cli.stats {
        eprintln!("{}", cpu.stats);
    }
    Ok(())
}

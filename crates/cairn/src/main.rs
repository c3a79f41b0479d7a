//! cairn CLI: solve puzzle inputs with a single reusable arena.

mod config;
mod runner;

use std::path::PathBuf;

use anyhow::Result;
use cairn::prelude::*;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::RunConfig;
use crate::runner::Runner;

/// Arena-backed puzzle solvers.
#[derive(Parser)]
#[command(name = "cairn")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Size of the arena's first region in bytes
    #[arg(long, default_value_t = ArenaConfig::DEFAULT_INITIAL_CAPACITY, global = true)]
    arena_capacity: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a single day
    Run {
        /// Day number
        day: u8,

        /// Input file (default: <input-dir>/dayNNN/input.txt)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Directory holding dayNNN/input.txt files
        #[arg(long, default_value = ".")]
        input_dir: PathBuf,
    },

    /// Solve every day whose input exists
    All {
        /// Directory holding dayNNN/input.txt files
        #[arg(long, default_value = ".")]
        input_dir: PathBuf,
    },

    /// List the registered puzzles
    List,
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            day,
            input,
            input_dir,
        } => {
            let mut runner = Runner::new(RunConfig::new(input_dir, cli.arena_capacity))?;
            let report = runner.run(Day(day), input.as_deref())?;
            println!("{report}");
        }
        Commands::All { input_dir } => {
            let mut runner = Runner::new(RunConfig::new(input_dir, cli.arena_capacity))?;
            for report in runner.run_all()? {
                println!("{report}");
            }
        }
        Commands::List => {
            for puzzle in PuzzleRegistry::with_all().iter() {
                println!("{:>3}  {}", puzzle.day().0, puzzle.title());
            }
        }
    }
    Ok(())
}

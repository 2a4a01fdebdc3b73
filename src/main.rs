//! Arbor CLI - evolve expression trees from the command line.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Arbor - genetic programming over expression trees
#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Log progress (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Evolve a formula that fits a dataset
    Regress {
        #[command(flatten)]
        run: cli::RunArgs,

        /// Dataset JSON file: [{"inputs": [..], "output": n}, ..] (default: hidden function)
        #[arg(short, long)]
        dataset: Option<PathBuf>,

        /// Rows to sample from the hidden function when no dataset is given
        #[arg(long, default_value = "200")]
        rows: usize,
    },

    /// Evolve grid-game players by round-robin tournament
    Compete {
        #[command(flatten)]
        run: cli::RunArgs,
    },

    /// Evolve a grid-game player, then play against it
    Play {
        #[command(flatten)]
        run: cli::RunArgs,

        /// Let the evolved player move first
        #[arg(long)]
        second: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = match args.command {
        Commands::Regress { run, dataset, rows } => cli::regress::execute(&run, dataset.as_deref(), rows),
        Commands::Compete { run } => cli::compete::execute(&run),
        Commands::Play { run, second } => cli::play::execute(&run, second),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

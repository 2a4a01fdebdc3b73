//! CLI command implementations for Arbor.

pub(crate) mod compete;
pub(crate) mod play;
pub(crate) mod regress;

mod output;

use arbor::gp::{EvolutionError, GenerationStats};
use arbor::{ConfigFileError, GameError, RunConfig};
use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Output format for evolution reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Flags shared by every evolving command.
#[derive(clap::Args, Debug)]
pub(crate) struct RunArgs {
    /// Random seed (default: from the clock)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Population size (overrides the config file)
    #[arg(short, long)]
    population: Option<usize>,

    /// Maximum generations (overrides the config file)
    #[arg(short, long)]
    generations: Option<usize>,

    /// JSON run configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Show progress bar
    #[arg(long)]
    progress: bool,
}

impl RunArgs {
    /// Load the configuration file, if any, and apply command-line overrides.
    fn run_config(&self) -> Result<RunConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };
        if let Some(population) = self.population {
            config.evolution.population_size = population;
        }
        if let Some(generations) = self.generations {
            config.evolution.max_generations = generations;
        }
        Ok(config)
    }

    fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(42)
        })
    }

    fn progress_bar(&self, generations: usize) -> ProgressBar {
        if !self.progress || self.format == OutputFormat::Json {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(generations as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} generations {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
        );
        pb
    }
}

/// Seeded generator plus the seed, for reporting.
fn seeded(args: &RunArgs) -> (u64, SmallRng) {
    let seed = args.seed();
    log::info!("using seed {seed}");
    (seed, SmallRng::seed_from_u64(seed))
}

/// Progress callback for `evolve_with`.
fn track(pb: &ProgressBar) -> impl FnMut(&GenerationStats) + '_ {
    move |stats| {
        pb.set_position(stats.generation as u64 + 1);
        pb.set_message(format!("best {}", stats.best_fitness));
    }
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<EvolutionError> for CliError {
    fn from(e: EvolutionError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<GameError> for CliError {
    fn from(e: GameError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(e.to_string())
    }
}

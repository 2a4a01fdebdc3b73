//! CLI command for symbolic regression.

use crate::cli::{output, seeded, track, CliError, RunArgs};
use arbor::gp::{evolve_with, ByScore, Dataset, RegressionScorer};
use std::path::Path;

/// Execute the regress command.
pub(crate) fn execute(args: &RunArgs, dataset: Option<&Path>, rows: usize) -> Result<(), CliError> {
    let config = args.run_config()?;
    let registry = config.registry()?;
    let (seed, mut rng) = seeded(args);

    let dataset = match dataset {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            let dataset: Dataset = serde_json::from_str(&text)?;
            log::info!("loaded {} rows from {}", dataset.len(), path.display());
            dataset
        }
        None => Dataset::hidden(rows, &mut rng),
    };
    if dataset.is_empty() {
        return Err(CliError::new("dataset has no rows"));
    }

    let param_count = dataset.param_count();
    let ranker = ByScore(RegressionScorer::new(dataset));

    let pb = args.progress_bar(config.evolution.max_generations);
    let evolution = evolve_with(&config.evolution, &registry, param_count, &ranker, &mut rng, track(&pb))?;
    pb.finish_and_clear();

    println!("{}", output::render(args.format, seed, &evolution)?);
    Ok(())
}

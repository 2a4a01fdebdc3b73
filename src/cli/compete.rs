//! CLI command for evolving grid-game players.

use crate::cli::{output, seeded, track, CliError, RunArgs};
use arbor::game::OBSERVATION_LEN;
use arbor::gp::evolve_with;
use arbor::TournamentRanker;

/// Execute the compete command.
pub(crate) fn execute(args: &RunArgs) -> Result<(), CliError> {
    let config = args.run_config()?;
    let registry = config.registry()?;
    let (seed, mut rng) = seeded(args);

    let ranker = TournamentRanker::new(config.game);

    let pb = args.progress_bar(config.evolution.max_generations);
    let evolution = evolve_with(
        &config.evolution,
        &registry,
        OBSERVATION_LEN,
        &ranker,
        &mut rng,
        track(&pb),
    )?;
    pb.finish_and_clear();

    println!("{}", output::render(args.format, seed, &evolution)?);
    Ok(())
}

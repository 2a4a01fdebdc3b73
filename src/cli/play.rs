//! CLI command for playing against an evolved grid-game player.

use crate::cli::{seeded, track, CliError, RunArgs};
use arbor::game::{HumanPlayer, MatchOutcome, PursuitGame, WinReason, OBSERVATION_LEN};
use arbor::gp::evolve_with;
use arbor::TournamentRanker;
use std::io;

/// Execute the play command.
pub(crate) fn execute(args: &RunArgs, evolved_first: bool) -> Result<(), CliError> {
    let config = args.run_config()?;
    let registry = config.registry()?;
    let (seed, mut rng) = seeded(args);

    println!("Evolving an opponent (seed: {seed})...");
    let pb = args.progress_bar(config.evolution.max_generations);
    let evolution = evolve_with(
        &config.evolution,
        &registry,
        OBSERVATION_LEN,
        &TournamentRanker::new(config.game),
        &mut rng,
        track(&pb),
    )?;
    pb.finish_and_clear();
    log::info!("opponent: {}", evolution.best);

    let mut machine = evolution.best;
    let mut human = HumanPlayer::new(io::stdin().lock(), io::stdout(), config.game.size);
    let mut game = PursuitGame::new(config.game, &mut rng);

    let (outcome, human_index) = if evolved_first {
        (game.play(&mut machine, &mut human)?, 1)
    } else {
        (game.play(&mut human, &mut machine)?, 0)
    };

    match outcome {
        MatchOutcome::Win { winner, round, reason } => {
            let who = if winner == human_index { "You win" } else { "You lose" };
            let how = match reason {
                WinReason::Capture => "capture",
                WinReason::RepeatedMove => "repeated move",
            };
            println!("{who} in round {} by {how}.", round + 1);
        }
        MatchOutcome::Draw => println!("Draw after {} rounds.", config.game.max_rounds),
    }
    Ok(())
}

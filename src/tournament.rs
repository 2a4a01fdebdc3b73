//! Round-robin tournaments over the pursuit game.
//!
//! Every player meets every other player twice, once moving first and once
//! moving second. Losses are tallied as points:
//!
//! | Result | Points                 |
//! |--------|------------------------|
//! | Win    | loser +2               |
//! | Draw   | both +1                |
//!
//! The tally is a fitness in the usual sense: lower is better.

use crate::error::GameError;
use crate::game::{GridConfig, MatchOutcome, Player, PursuitGame};
use crate::gp::{sort_scores, Fitness, Ranker, Score, Tree};
use rand::Rng;

/// Loss points for the losing side of a decided match.
pub const LOSS_POINTS: Fitness = 2;

/// Loss points for each side of a drawn match.
pub const DRAW_POINTS: Fitness = 1;

/// Play every ordered pair of `players` once and return each player's loss
/// points, indexed like `players`.
///
/// # Errors
///
/// Returns the first error raised by any player.
pub fn tournament<P: Player, R: Rng + ?Sized>(
    players: &mut [P],
    config: GridConfig,
    rng: &mut R,
) -> Result<Vec<Fitness>, GameError> {
    let mut losses = vec![0; players.len()];

    for i in 0..players.len() {
        for j in 0..players.len() {
            if i == j {
                continue;
            }
            let (first, second) = pair_mut(players, i, j);
            let outcome = PursuitGame::new(config, rng).play(first, second)?;

            match outcome {
                MatchOutcome::Win { winner: 0, .. } => losses[j] += LOSS_POINTS,
                MatchOutcome::Win { .. } => losses[i] += LOSS_POINTS,
                MatchOutcome::Draw => {
                    losses[i] += DRAW_POINTS;
                    losses[j] += DRAW_POINTS;
                }
            }
        }
    }

    log::debug!("tournament of {} players: losses {losses:?}", players.len());
    Ok(losses)
}

/// Two distinct mutable elements of a slice.
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(a, b);
    if a < b {
        let (head, tail) = items.split_at_mut(b);
        (&mut head[a], &mut tail[0])
    } else {
        let (head, tail) = items.split_at_mut(a);
        (&mut tail[0], &mut head[b])
    }
}

/// Ranks a population by tournament losses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TournamentRanker {
    /// Board used for every match.
    pub config: GridConfig,
}

impl TournamentRanker {
    /// Create a ranker playing on `config`.
    #[must_use]
    pub const fn new(config: GridConfig) -> Self {
        Self { config }
    }
}

impl Ranker for TournamentRanker {
    type Error = GameError;

    fn rank<R: Rng + ?Sized>(&self, mut population: Vec<Tree>, rng: &mut R) -> Result<Vec<Score>, GameError> {
        let losses = tournament(&mut population, self.config, rng)?;
        let mut scores: Vec<Score> = losses
            .into_iter()
            .zip(population)
            .map(|(fitness, tree)| Score { fitness, tree })
            .collect();
        sort_scores(&mut scores);
        Ok(scores)
    }
}

//! Two-player pursuit on a bounded grid.
//!
//! Each round both players move in turn. A player that repeats its previous
//! move loses; a player that lands on its opponent wins. If neither happens
//! within the round limit the match is drawn.

use crate::error::GameError;
use crate::game::board::{GridConfig, Move, Position};
use crate::game::player::{Player, NO_MOVE, OBSERVATION_LEN};
use crate::gp::Value;
use rand::Rng;
use serde::Serialize;

/// Why a match ended with a winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WinReason {
    /// The winner moved onto the loser's cell.
    Capture,
    /// The loser repeated its previous move.
    RepeatedMove,
}

/// Result of a single match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum MatchOutcome {
    /// One player won.
    Win {
        /// Index of the winner, 0 for the first mover.
        winner: usize,
        /// Zero-based round the match ended in.
        round: usize,
        /// How the match was decided.
        reason: WinReason,
    },
    /// The round limit was reached.
    Draw,
}

impl MatchOutcome {
    /// Index of the winning player, if any.
    #[must_use]
    pub const fn winner(&self) -> Option<usize> {
        match self {
            Self::Win { winner, .. } => Some(*winner),
            Self::Draw => None,
        }
    }
}

/// Mutable state of one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PursuitGame {
    config: GridConfig,
    positions: [Position; 2],
    last_moves: [Value; 2],
}

impl PursuitGame {
    /// Start a match with the first player placed uniformly at random and the
    /// second player offset from it.
    ///
    /// Boards below the minimum size are rejected when the match is played.
    pub fn new<R: Rng + ?Sized>(config: GridConfig, rng: &mut R) -> Self {
        let size = config.size.max(1);
        let first = Position::new(rng.gen_range(0..size), rng.gen_range(0..size));
        Self::with_positions(config, first, first.opposite(size))
    }

    /// Start a match from fixed positions.
    #[must_use]
    pub const fn with_positions(config: GridConfig, first: Position, second: Position) -> Self {
        Self {
            config,
            positions: [first, second],
            last_moves: [NO_MOVE, NO_MOVE],
        }
    }

    /// Current positions of both players.
    #[must_use]
    pub const fn positions(&self) -> [Position; 2] {
        self.positions
    }

    /// Last move of each player, `-1` before its first move.
    #[must_use]
    pub const fn last_moves(&self) -> [Value; 2] {
        self.last_moves
    }

    /// What `player` sees: `[my_x, my_y, opp_x, opp_y, my_last_move]`.
    #[must_use]
    pub const fn observation(&self, player: usize) -> [Value; OBSERVATION_LEN] {
        let me = self.positions[player];
        let opponent = self.positions[1 - player];
        [me.x, me.y, opponent.x, opponent.y, self.last_moves[player]]
    }

    /// Apply `value` as `player`'s move. Returns how the match ended, if it did.
    pub fn apply(&mut self, player: usize, value: Value) -> Option<(usize, WinReason)> {
        let direction = Move::from_value(value);
        if self.last_moves[player] == direction.code() {
            return Some((1 - player, WinReason::RepeatedMove));
        }
        self.last_moves[player] = direction.code();
        self.positions[player] = self.positions[player].step(direction, self.config.size);

        (self.positions[player] == self.positions[1 - player])
            .then_some((player, WinReason::Capture))
    }

    /// Play the match to completion.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::BoardTooSmall`] for an undersized board, otherwise
    /// the first error raised by either player.
    pub fn play(
        &mut self,
        first: &mut dyn Player,
        second: &mut dyn Player,
    ) -> Result<MatchOutcome, GameError> {
        self.config.validate()?;
        let mut players: [&mut dyn Player; 2] = [first, second];

        for round in 0..self.config.max_rounds {
            for (player, program) in players.iter_mut().enumerate() {
                let value = program.next_move(&self.observation(player))?;
                if let Some((winner, reason)) = self.apply(player, value) {
                    log::trace!("player {winner} wins in round {round} by {reason:?}");
                    return Ok(MatchOutcome::Win {
                        winner,
                        round,
                        reason,
                    });
                }
            }
        }

        log::trace!("draw after {} rounds", self.config.max_rounds);
        Ok(MatchOutcome::Draw)
    }
}

/// Play one match between two players from a random start.
///
/// # Errors
///
/// Returns the first error raised by either player.
pub fn play_match<R: Rng + ?Sized>(
    first: &mut dyn Player,
    second: &mut dyn Player,
    config: GridConfig,
    rng: &mut R,
) -> Result<MatchOutcome, GameError> {
    PursuitGame::new(config, rng).play(first, second)
}

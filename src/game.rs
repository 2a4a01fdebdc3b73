//! Grid pursuit game used for adversarial fitness.
//!
//! Two players share a small square board. Each turn a player sees its own
//! position, its opponent's position and its own last move, and answers
//! with a number whose euclidean remainder by 4 picks a direction:
//!
//! ```text
//!        0
//!        ↑
//!   2 ←  ·  → 3
//!        ↓
//!        1
//! ```
//!
//! Evolved trees, people at a terminal and anything else that implements
//! [`Player`] can take part.

mod board;
mod player;
mod pursuit;

pub use board::{GridConfig, Move, Position, MIN_BOARD_SIZE};
pub use player::{HumanPlayer, Player, NO_MOVE, OBSERVATION_LEN};
pub use pursuit::{play_match, MatchOutcome, PursuitGame, WinReason};

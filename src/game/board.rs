//! Board geometry for the pursuit game.

use crate::error::GameError;
use crate::gp::Value;
use serde::{Deserialize, Serialize};

/// Smallest board on which the starting offset separates the players.
pub const MIN_BOARD_SIZE: Value = 3;

/// Board and round limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Side length of the square board.
    pub size: Value,
    /// Rounds (one move per player) before the game is a draw.
    pub max_rounds: usize,
}

impl GridConfig {
    /// Check the board can hold two separated players.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::BoardTooSmall`] if `size` is below [`MIN_BOARD_SIZE`].
    pub const fn validate(&self) -> Result<(), GameError> {
        if self.size < MIN_BOARD_SIZE {
            return Err(GameError::BoardTooSmall(self.size));
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: 4,
            max_rounds: 50,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row, `0..size`.
    pub x: Value,
    /// Column, `0..size`.
    pub y: Value,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(x: Value, y: Value) -> Self {
        Self { x, y }
    }

    /// The cell two steps away on both axes, wrapping on a board of `size` cells.
    #[must_use]
    pub const fn opposite(self, size: Value) -> Self {
        Self {
            x: (self.x + 2).rem_euclid(size),
            y: (self.y + 2).rem_euclid(size),
        }
    }

    /// Step once in `direction`, staying on a `size x size` board.
    #[must_use]
    pub fn step(self, direction: Move, size: Value) -> Self {
        let (dx, dy) = direction.delta();
        let edge = (size - 1).max(0);
        Self {
            x: (self.x + dx).clamp(0, edge),
            y: (self.y + dy).clamp(0, edge),
        }
    }
}

/// One of the four moves a player can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Row minus one.
    Up = 0,
    /// Row plus one.
    Down = 1,
    /// Column minus one.
    Left = 2,
    /// Column plus one.
    Right = 3,
}

impl Move {
    /// Interpret a program output as a move (euclidean remainder by 4).
    #[must_use]
    pub const fn from_value(value: Value) -> Self {
        match value.rem_euclid(4) {
            0 => Self::Up,
            1 => Self::Down,
            2 => Self::Left,
            _ => Self::Right,
        }
    }

    /// Numeric code fed back to programs as their last move.
    #[must_use]
    pub const fn code(self) -> Value {
        self as Value
    }

    const fn delta(self) -> (Value, Value) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

//! Error types for expression trees and games.

use crate::game::MIN_BOARD_SIZE;
use std::fmt;
use std::io;

/// Structural failures raised while building or evaluating a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A parameter node addressed an input the caller did not supply.
    ParamOutOfRange {
        /// Index held by the parameter node.
        index: usize,
        /// Length of the supplied input vector.
        len: usize,
    },
    /// A function node was built with the wrong number of children.
    ArityMismatch {
        /// Name of the function.
        function: String,
        /// Declared arity of the function.
        expected: usize,
        /// Number of children supplied.
        found: usize,
    },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::ParamOutOfRange { index, len } => {
                write!(f, "parameter p{index} out of range for {len} inputs")
            }
            TreeError::ArityMismatch {
                function,
                expected,
                found,
            } => write!(
                f,
                "function '{function}' takes {expected} arguments but {found} were supplied"
            ),
        }
    }
}

impl std::error::Error for TreeError {}

/// Result type for tree construction and evaluation.
pub type TreeResult<T> = Result<T, TreeError>;

/// Failures raised while a player picks a move.
#[derive(Debug)]
pub enum GameError {
    /// The player's program failed to evaluate.
    Tree(TreeError),
    /// An interactive player could not read or write.
    Io(io::Error),
    /// An interactive player's input ended before a move was entered.
    InputClosed,
    /// The board is too small to keep the starting players apart.
    BoardTooSmall(i64),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Tree(e) => write!(f, "player program failed: {e}"),
            GameError::Io(e) => write!(f, "player I/O error: {e}"),
            GameError::InputClosed => write!(f, "player input closed"),
            GameError::BoardTooSmall(size) => {
                write!(f, "board size {size} is too small, need at least {MIN_BOARD_SIZE}")
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Tree(e) => Some(e),
            GameError::Io(e) => Some(e),
            GameError::InputClosed | GameError::BoardTooSmall(_) => None,
        }
    }
}

impl From<TreeError> for GameError {
    fn from(e: TreeError) -> Self {
        Self::Tree(e)
    }
}

impl From<io::Error> for GameError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

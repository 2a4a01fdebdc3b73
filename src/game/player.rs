//! Players: anything that maps a board observation to a move.

use crate::error::GameError;
use crate::game::board::{Move, Position};
use crate::gp::{Tree, Value};
use std::io::{BufRead, Write};

/// Width of the observation vector handed to players:
/// `[my_x, my_y, opponent_x, opponent_y, my_last_move]`.
pub const OBSERVATION_LEN: usize = 5;

/// Last-move code before a player has moved.
pub const NO_MOVE: Value = -1;

/// A game participant.
pub trait Player {
    /// Choose a move for the given observation. Only the value modulo 4 matters.
    ///
    /// # Errors
    ///
    /// Returns an error if the player cannot produce a move.
    fn next_move(&mut self, observation: &[Value]) -> Result<Value, GameError>;
}

impl Player for Tree {
    fn next_move(&mut self, observation: &[Value]) -> Result<Value, GameError> {
        Ok(self.evaluate(observation)?)
    }
}

impl<P: Player + ?Sized> Player for &mut P {
    fn next_move(&mut self, observation: &[Value]) -> Result<Value, GameError> {
        (**self).next_move(observation)
    }
}

/// A player driven by a person at a terminal.
#[derive(Debug)]
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
    size: Value,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Create a player reading moves from `input` and drawing to `output`.
    #[must_use]
    pub fn new(input: R, output: W, size: Value) -> Self {
        Self { input, output, size }
    }

    fn draw(&mut self, observation: &[Value]) -> std::io::Result<()> {
        let me = Position::new(observation[0], observation[1]);
        let others: Vec<Position> = observation[2..observation.len() - 1]
            .chunks_exact(2)
            .map(|pair| Position::new(pair[0], pair[1]))
            .collect();

        for x in 0..self.size {
            let row: Vec<&str> = (0..self.size)
                .map(|y| {
                    let cell = Position::new(x, y);
                    if cell == me {
                        "O"
                    } else if others.contains(&cell) {
                        "X"
                    } else {
                        "."
                    }
                })
                .collect();
            writeln!(self.output, "{}", row.join("  "))?;
        }

        writeln!(self.output, "Your last move was {}", observation[observation.len() - 1])?;
        writeln!(self.output, " {}", Move::Up.code())?;
        writeln!(self.output, "{} {}", Move::Left.code(), Move::Right.code())?;
        writeln!(self.output, " {}", Move::Down.code())?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn next_move(&mut self, observation: &[Value]) -> Result<Value, GameError> {
        if observation.len() < OBSERVATION_LEN {
            return Err(GameError::Tree(crate::error::TreeError::ParamOutOfRange {
                index: OBSERVATION_LEN - 1,
                len: observation.len(),
            }));
        }
        self.draw(observation)?;

        let mut line = String::new();
        loop {
            write!(self.output, "Enter move: ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(GameError::InputClosed);
            }
            match line.trim().parse::<Value>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "Not a number: {}", line.trim())?,
            }
        }
    }
}

// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Arbor: genetic programming over small expression trees.
//!
//! Trees of functions, input parameters and constants are evolved toward a
//! target behavior with rank-biased selection, subtree crossover and subtree
//! mutation. Two fitness regimes are built in:
//! - Symbolic regression against a numeric dataset
//! - Round-robin tournaments of a two-player grid pursuit game
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     CLI (regress/compete/play)      │
//! ├──────────────────┬──────────────────┤
//! │    Regression    │   Tournament     │
//! │     Scorer       │  (pursuit game)  │
//! ├──────────────────┴──────────────────┤
//! │     Evolution Loop & Operators      │
//! ├─────────────────────────────────────┤
//! │    Expression Trees & Registry      │
//! └─────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod gp;
pub mod tournament;

pub use config::{ConfigFileError, RunConfig};
pub use error::{GameError, TreeError, TreeResult};

// Re-export the types most callers need at crate root
pub use gp::{evolve, Evolution, EvolutionConfig, Registry, Tree, Value};
pub use tournament::{tournament, TournamentRanker};

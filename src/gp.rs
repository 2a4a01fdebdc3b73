//! Genetic programming over expression trees.
//!
//! This module provides the evolutionary core: the tree representation,
//! random generation, subtree mutation and crossover, fitness ranking and the
//! generational loop. Scoring is pluggable through [`Scorer`] (one tree at a
//! time) or [`Ranker`] (a whole population, e.g. a tournament).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │         Evolution Loop              │
//! ├─────────────────────────────────────┤
//! │  Selection │ Crossover │ Mutation   │
//! ├─────────────────────────────────────┤
//! │   Fitness Ranking  │  Generation    │
//! ├─────────────────────────────────────┤
//! │    Expression Tree │ Registry       │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use arbor::gp::{evolve, ByScore, Dataset, EvolutionConfig, Registry, RegressionScorer, Row};
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let dataset: Dataset = [([2, 3], 5), ([4, 1], 5)]
//!     .into_iter()
//!     .map(|(inputs, output)| Row { inputs: inputs.to_vec(), output })
//!     .collect();
//! let config = EvolutionConfig { population_size: 50, max_generations: 10, ..Default::default() };
//! let mut rng = SmallRng::seed_from_u64(42);
//!
//! let result = evolve(&config, &Registry::arithmetic(), 2, &ByScore(RegressionScorer::new(dataset)), &mut rng)?;
//! println!("{}", result.best.display());
//! # Ok::<(), arbor::gp::EvolutionError>(())
//! ```

mod crossover;
mod evolution;
mod fitness;
mod generate;
mod mutation;
mod registry;
mod regression;
mod selection;
mod tree;

pub use crossover::crossover;
pub use evolution::{
    evolve, evolve_with, ConfigError, Evolution, EvolutionConfig, EvolutionError, GenerationStats,
    Termination, ELITE_COUNT,
};
pub use fitness::{rank, sort_scores, ByScore, Fitness, FitnessStats, Ranker, Score, Scorer};
pub use generate::{GenerateConfig, Generator, MAX_CONSTANT};
pub use mutation::mutate;
pub use registry::{builtin, Apply, Function, Registry, Value, CATALOG};
pub use regression::{hidden_function, Dataset, RegressionScorer, Row};
pub use selection::select_index;
pub use tree::{FunctionNode, Outline, Tree};

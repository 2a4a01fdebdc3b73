//! Main evolution loop for genetic programming.
//!
//! Each generation the population is ranked, the two best trees are carried
//! over unchanged, and the rest of the next population is bred from
//! rank-biased parents via crossover and mutation, with an occasional fresh
//! random tree mixed in. The loop stops on an exact fit (fitness 0) or after
//! `max_generations` rankings.

use crate::gp::crossover::crossover;
use crate::gp::fitness::{Fitness, FitnessStats, Ranker, Score};
use crate::gp::generate::{GenerateConfig, Generator};
use crate::gp::mutation::mutate;
use crate::gp::registry::Registry;
use crate::gp::selection::select_index;
use crate::gp::tree::Tree;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of top-ranked trees copied unchanged into each new generation.
pub const ELITE_COUNT: usize = 2;

/// Configuration for the evolution process.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Population size.
    pub population_size: usize,
    /// Maximum number of generations to rank.
    pub max_generations: usize,
    /// Per-node replacement probability used when mutating offspring.
    pub mutation_rate: f64,
    /// Per-node swap probability used when crossing parents.
    pub breeding_rate: f64,
    /// Geometric decay of selection probability with rank, in `(0, 1)`.
    pub selection_skew: f64,
    /// Probability that a new slot gets a fresh random tree instead of offspring.
    pub fresh_injection_rate: f64,
    /// Shape of randomly generated trees.
    pub generate: GenerateConfig,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 500,
            mutation_rate: 0.1,
            breeding_rate: 0.4,
            selection_skew: 0.7,
            fresh_injection_rate: 0.05,
            generate: GenerateConfig::default(),
        }
    }
}

impl EvolutionConfig {
    /// Check every parameter is usable.
    ///
    /// # Errors
    ///
    /// Returns the first invalid parameter found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }

        let probabilities = [
            ("mutation_rate", self.mutation_rate),
            ("breeding_rate", self.breeding_rate),
            ("fresh_injection_rate", self.fresh_injection_rate),
            ("generate.function_bias", self.generate.function_bias),
            ("generate.param_bias", self.generate.param_bias),
        ];
        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Probability { name, value });
            }
        }

        if !(self.selection_skew > 0.0 && self.selection_skew < 1.0) {
            return Err(ConfigError::SelectionSkew(self.selection_skew));
        }

        Ok(())
    }
}

/// Statistics for a single generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationStats {
    /// Generation number, starting at 0.
    pub generation: usize,
    /// Best fitness in this generation.
    pub best_fitness: Fitness,
    /// Mean fitness.
    pub mean_fitness: f64,
    /// Worst fitness.
    pub worst_fitness: Fitness,
}

impl GenerationStats {
    fn new(generation: usize, scores: &[Score]) -> Self {
        let stats = FitnessStats::from_scores(scores);
        Self {
            generation,
            best_fitness: stats.best,
            mean_fitness: stats.mean,
            worst_fitness: stats.worst,
        }
    }
}

/// How an evolution run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum Termination {
    /// A tree with fitness 0 was found.
    Solved {
        /// Generation in which it was found.
        generation: usize,
    },
    /// The generation limit was reached without an exact fit.
    Exhausted,
}

/// Result of an evolution run.
#[derive(Debug, Clone)]
pub struct Evolution {
    /// Best tree of the last ranked generation.
    pub best: Tree,
    /// Fitness of `best`.
    pub fitness: Fitness,
    /// Why the run stopped.
    pub termination: Termination,
    /// Statistics per ranked generation.
    pub history: Vec<GenerationStats>,
}

impl Evolution {
    /// Whether an exact fit was found.
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.termination, Termination::Solved { .. })
    }
}

/// Run the evolution process.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or ranking fails.
pub fn evolve<K, R>(
    config: &EvolutionConfig,
    registry: &Registry,
    param_count: usize,
    ranker: &K,
    rng: &mut R,
) -> Result<Evolution, EvolutionError>
where
    K: Ranker,
    R: Rng + ?Sized,
{
    evolve_with(config, registry, param_count, ranker, rng, |_| {})
}

/// Run the evolution process, reporting each ranked generation.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or ranking fails.
pub fn evolve_with<K, R, F>(
    config: &EvolutionConfig,
    registry: &Registry,
    param_count: usize,
    ranker: &K,
    rng: &mut R,
    mut on_generation: F,
) -> Result<Evolution, EvolutionError>
where
    K: Ranker,
    R: Rng + ?Sized,
    F: FnMut(&GenerationStats),
{
    config.validate()?;

    let generator = Generator::new(registry, param_count, config.generate);
    let mut population: Vec<Tree> = (0..config.population_size)
        .map(|_| generator.generate(rng))
        .collect();
    let mut history = Vec::new();
    let mut generation = 0usize;

    loop {
        let scores = ranker
            .rank(population, rng)
            .map_err(|e| EvolutionError::Ranking(Box::new(e)))?;
        let Some(best) = scores.first() else {
            return Err(EvolutionError::EmptyRanking);
        };

        let stats = GenerationStats::new(generation, &scores);
        log::info!(
            "generation {:>5}: best={} mean={:.2}",
            generation,
            stats.best_fitness,
            stats.mean_fitness
        );
        on_generation(&stats);
        history.push(stats);

        let termination = if best.fitness == 0 {
            Some(Termination::Solved { generation })
        } else if generation + 1 >= config.max_generations {
            Some(Termination::Exhausted)
        } else {
            None
        };

        if let Some(termination) = termination {
            log::info!("evolution finished: {termination:?} with fitness {}", best.fitness);
            return Ok(Evolution {
                best: best.tree.clone(),
                fitness: best.fitness,
                termination,
                history,
            });
        }

        population = breed(&scores, &generator, config, rng);
        generation += 1;
    }
}

/// Build the next population from a ranked one.
fn breed<R: Rng + ?Sized>(
    scores: &[Score],
    generator: &Generator<'_>,
    config: &EvolutionConfig,
    rng: &mut R,
) -> Vec<Tree> {
    let mut next: Vec<Tree> = scores
        .iter()
        .take(ELITE_COUNT.min(config.population_size))
        .map(|score| score.tree.clone())
        .collect();

    let mut fresh = 0usize;
    while next.len() < config.population_size {
        if rng.r#gen::<f64>() > config.fresh_injection_rate {
            let first = &scores[select_index(config.selection_skew, scores.len(), rng)].tree;
            let second = &scores[select_index(config.selection_skew, scores.len(), rng)].tree;
            let child = crossover(first, second, config.breeding_rate, rng);
            next.push(mutate(&child, generator, config.mutation_rate, rng));
        } else {
            next.push(generator.generate(rng));
            fresh += 1;
        }
    }

    log::debug!(
        "bred {} offspring, injected {fresh} fresh trees",
        next.len() - fresh
    );
    next
}

/// Invalid evolution parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Population size was zero.
    EmptyPopulation,
    /// A probability fell outside `[0, 1]`.
    Probability {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// Selection skew fell outside `(0, 1)`.
    SelectionSkew(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPopulation => write!(f, "population size must be at least 1"),
            Self::Probability { name, value } => {
                write!(f, "{name} must be between 0 and 1, got {value}")
            }
            Self::SelectionSkew(value) => {
                write!(f, "selection_skew must be strictly between 0 and 1, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Error during evolution.
#[derive(Debug)]
pub enum EvolutionError {
    /// The configuration was rejected.
    Config(ConfigError),
    /// The ranking strategy failed.
    Ranking(Box<dyn std::error::Error + Send + Sync>),
    /// The ranking strategy returned no scores.
    EmptyRanking,
}

impl fmt::Display for EvolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::Ranking(e) => write!(f, "ranking failed: {e}"),
            Self::EmptyRanking => write!(f, "ranking returned an empty population"),
        }
    }
}

impl std::error::Error for EvolutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Ranking(e) => Some(e.as_ref()),
            Self::EmptyRanking => None,
        }
    }
}

impl From<ConfigError> for EvolutionError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

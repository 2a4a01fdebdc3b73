//! Fitness scoring and ranking.
//!
//! Fitness is minimised: lower is better and `0` means an exact fit. Two
//! strategy shapes are supported. A [`Scorer`] rates one tree in isolation,
//! while a [`Ranker`] orders a whole population at once, which is what
//! competitive strategies such as tournaments need. [`ByScore`] adapts the
//! former into the latter.

// Statistics use intentional casts
#![allow(clippy::cast_precision_loss)]

use crate::gp::tree::Tree;
use rand::Rng;

/// Fitness value; lower is better.
pub type Fitness = u64;

/// A tree paired with its fitness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    /// Fitness of `tree`.
    pub fitness: Fitness,
    /// The scored tree.
    pub tree: Tree,
}

/// Rates a single tree.
pub trait Scorer {
    /// Error raised when a tree cannot be scored.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fitness of `tree`; lower is better.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree cannot be evaluated.
    fn score(&self, tree: &Tree) -> Result<Fitness, Self::Error>;
}

/// Orders a population from best to worst.
pub trait Ranker {
    /// Error raised when the population cannot be ranked.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Score every tree and return them sorted ascending by fitness.
    ///
    /// # Errors
    ///
    /// Returns an error if any tree cannot be scored.
    fn rank<R: Rng + ?Sized>(&self, population: Vec<Tree>, rng: &mut R) -> Result<Vec<Score>, Self::Error>;
}

/// Rank a population with a per-tree scorer.
///
/// The sort is stable: equal fitness keeps the population's order.
///
/// # Errors
///
/// Returns the first scoring error.
pub fn rank<S: Scorer + ?Sized>(population: Vec<Tree>, scorer: &S) -> Result<Vec<Score>, S::Error> {
    let mut ranked = population
        .into_iter()
        .map(|tree| -> Result<Score, S::Error> {
            let fitness = scorer.score(&tree)?;
            Ok(Score { fitness, tree })
        })
        .collect::<Result<Vec<_>, _>>()?;
    sort_scores(&mut ranked);
    Ok(ranked)
}

/// Stable ascending sort by fitness.
pub fn sort_scores(scores: &mut [Score]) {
    scores.sort_by_key(|score| score.fitness);
}

/// Adapts a [`Scorer`] into a [`Ranker`].
#[derive(Debug, Clone)]
pub struct ByScore<S>(pub S);

impl<S: Scorer> Ranker for ByScore<S> {
    type Error = S::Error;

    fn rank<R: Rng + ?Sized>(&self, population: Vec<Tree>, _rng: &mut R) -> Result<Vec<Score>, Self::Error> {
        rank(population, &self.0)
    }
}

/// Summary of one ranked population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessStats {
    /// Lowest fitness.
    pub best: Fitness,
    /// Highest fitness.
    pub worst: Fitness,
    /// Mean fitness.
    pub mean: f64,
}

impl FitnessStats {
    /// Calculate statistics from scores.
    #[must_use]
    pub fn from_scores(scores: &[Score]) -> Self {
        if scores.is_empty() {
            return Self {
                best: 0,
                worst: 0,
                mean: 0.0,
            };
        }

        let best = scores.iter().map(|s| s.fitness).min().unwrap_or(0);
        let worst = scores.iter().map(|s| s.fitness).max().unwrap_or(0);
        let sum: f64 = scores.iter().map(|s| s.fitness as f64).sum();

        Self {
            best,
            worst,
            mean: sum / scores.len() as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    /// Scores constants by their distance from 5.
    struct DistanceFromFive;

    impl Scorer for DistanceFromFive {
        type Error = Infallible;

        fn score(&self, tree: &Tree) -> Result<Fitness, Infallible> {
            Ok(match tree {
                Tree::Const(v) => v.abs_diff(5),
                _ => Fitness::MAX,
            })
        }
    }

    #[test]
    fn test_rank_sorts_ascending() {
        let population = vec![Tree::Const(9), Tree::Const(5), Tree::Param(0), Tree::Const(3)];
        let scores = rank(population, &DistanceFromFive).unwrap();

        let fitness: Vec<Fitness> = scores.iter().map(|s| s.fitness).collect();
        assert_eq!(fitness, [0, 2, 4, Fitness::MAX]);
        assert_eq!(scores[0].tree, Tree::Const(5));
    }

    #[test]
    fn test_rank_is_stable() {
        let population = vec![Tree::Const(7), Tree::Const(3), Tree::Const(8)];
        let scores = rank(population, &DistanceFromFive).unwrap();

        // 7 and 3 tie at distance 2 and keep their order.
        assert_eq!(scores[0].tree, Tree::Const(7));
        assert_eq!(scores[1].tree, Tree::Const(3));
        assert_eq!(scores[2].tree, Tree::Const(8));
    }

    #[test]
    fn test_stats() {
        let scores: Vec<Score> = [1, 2, 3, 6]
            .into_iter()
            .map(|fitness| Score { fitness, tree: Tree::Const(0) })
            .collect();
        let stats = FitnessStats::from_scores(&scores);

        assert_eq!(stats.best, 1);
        assert_eq!(stats.worst, 6);
        assert!((stats.mean - 3.0).abs() < 1e-9);
    }
}

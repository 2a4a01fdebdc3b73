//! End-to-end evolution scenarios.
//!
//! Run with: cargo test --release --test evolution

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use rand::SeedableRng;
use rand::rngs::SmallRng;

use arbor::game::{GridConfig, OBSERVATION_LEN};
use arbor::gp::{
    evolve, evolve_with, ByScore, Dataset, EvolutionConfig, GenerateConfig, Registry,
    RegressionScorer, Row, Termination,
};
use arbor::TournamentRanker;

/// Two rows of `x + y`.
fn sum_dataset() -> Dataset {
    [([2, 3], 5), ([4, 1], 5)]
        .into_iter()
        .map(|(inputs, output)| Row {
            inputs: inputs.to_vec(),
            output,
        })
        .collect()
}

#[test]
fn test_sum_target_is_found() {
    let registry = Registry::from_names(&["add", "subtract"]).unwrap();
    let ranker = ByScore(RegressionScorer::new(sum_dataset()));
    let config = EvolutionConfig {
        population_size: 50,
        max_generations: 100,
        ..Default::default()
    };

    // Documented seeds; the target is easy enough that each is expected to
    // solve, and at least one must.
    let solved: Vec<u64> = [42u64, 7, 1234]
        .into_iter()
        .filter(|&seed| {
            let mut rng = SmallRng::seed_from_u64(seed);
            let result = evolve(&config, &registry, 2, &ranker, &mut rng).unwrap();
            if result.is_solved() {
                assert_eq!(result.fitness, 0);
                assert!(matches!(result.termination, Termination::Solved { .. }));
                for row in &sum_dataset().rows {
                    assert_eq!(result.best.evaluate(&row.inputs).unwrap(), row.output);
                }
            }
            result.is_solved()
        })
        .collect();

    assert!(!solved.is_empty(), "no documented seed solved x + y");
}

#[test]
fn test_best_fitness_never_regresses() {
    // The two elites survive unchanged and scoring is deterministic, so the
    // best fitness per generation is non-increasing.
    let mut rng = SmallRng::seed_from_u64(11);
    let dataset = Dataset::hidden(40, &mut rng);
    let ranker = ByScore(RegressionScorer::new(dataset));
    let config = EvolutionConfig {
        population_size: 60,
        max_generations: 30,
        ..Default::default()
    };

    let result = evolve(&config, &Registry::arithmetic(), 2, &ranker, &mut rng).unwrap();

    assert!(!result.history.is_empty());
    assert!(result.history.len() <= 30);
    assert!(
        result
            .history
            .windows(2)
            .all(|w| w[1].best_fitness <= w[0].best_fitness)
    );
    assert_eq!(result.history.last().unwrap().best_fitness, result.fitness);
}

#[test]
fn test_stops_at_generation_limit_or_solution() {
    let mut rng = SmallRng::seed_from_u64(3);
    let dataset = Dataset::hidden(20, &mut rng);
    let ranker = ByScore(RegressionScorer::new(dataset));
    let config = EvolutionConfig {
        population_size: 20,
        max_generations: 5,
        ..Default::default()
    };

    let mut seen = Vec::new();
    let result = evolve_with(&config, &Registry::arithmetic(), 2, &ranker, &mut rng, |stats| {
        seen.push(stats.generation);
    })
    .unwrap();

    match result.termination {
        Termination::Exhausted => assert_eq!(seen, vec![0, 1, 2, 3, 4]),
        Termination::Solved { generation } => assert_eq!(seen.last(), Some(&generation)),
    }
}

#[test]
fn test_unsolvable_target_is_exhausted() {
    // With no depth budget and no parameter leaves every tree is a constant
    // in 0..=10, so 1000 is out of reach.
    let dataset: Dataset = [([0, 0], 1000), ([5, 5], 1000)]
        .into_iter()
        .map(|(inputs, output)| Row {
            inputs: inputs.to_vec(),
            output,
        })
        .collect();
    let ranker = ByScore(RegressionScorer::new(dataset));
    let config = EvolutionConfig {
        population_size: 25,
        max_generations: 7,
        generate: GenerateConfig {
            max_depth: 0,
            param_bias: 0.0,
            ..Default::default()
        },
        ..Default::default()
    };
    let registry = Registry::from_names(&["add"]).unwrap();
    let mut rng = SmallRng::seed_from_u64(21);

    let result = evolve(&config, &registry, 2, &ranker, &mut rng).unwrap();

    assert_eq!(result.termination, Termination::Exhausted);
    assert!(!result.is_solved());
    assert!(result.fitness > 0);
    assert!(result.fitness >= 2 * 990);
    assert_eq!(result.history.len(), config.max_generations);
}

#[test]
fn test_same_seed_same_result() {
    let run = || {
        let mut rng = SmallRng::seed_from_u64(99);
        let ranker = ByScore(RegressionScorer::new(Dataset::hidden(30, &mut rng)));
        let config = EvolutionConfig {
            population_size: 30,
            max_generations: 10,
            ..Default::default()
        };
        evolve(&config, &Registry::arithmetic(), 2, &ranker, &mut rng).unwrap()
    };

    let (a, b) = (run(), run());
    assert_eq!(a.best, b.best);
    assert_eq!(a.fitness, b.fitness);
    assert_eq!(a.history, b.history);
}

#[test]
fn test_tournament_evolution_runs() {
    let mut rng = SmallRng::seed_from_u64(5);
    let config = EvolutionConfig {
        population_size: 12,
        max_generations: 3,
        ..Default::default()
    };
    let ranker = TournamentRanker::new(GridConfig::default());

    let result = evolve(&config, &Registry::arithmetic(), OBSERVATION_LEN, &ranker, &mut rng).unwrap();

    assert!(result.history.len() <= 3);
    assert!(result.best.validate().is_ok());
    // Each of 12 players plays 22 matches worth at most 2 points each.
    assert!(result.history.iter().all(|g| g.worst_fitness <= 44));
}

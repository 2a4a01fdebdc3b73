#![no_main]

use arbitrary::Arbitrary;
use arbor::gp::{crossover, mutate, GenerateConfig, Generator, Registry, Value};
use libfuzzer_sys::fuzz_target;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Structured input for operator fuzzing.
#[derive(Arbitrary, Debug)]
struct OperatorInput {
    /// Seed for every random draw.
    seed: u64,
    /// Depth budget, capped below.
    max_depth: u8,
    /// Mutation probability numerator out of 255.
    mutation: u8,
    /// Crossover probability numerator out of 255.
    breeding: u8,
    /// Inputs handed to the trees.
    inputs: [Value; 3],
}

fuzz_target!(|input: OperatorInput| {
    let registry = Registry::arithmetic();
    let config = GenerateConfig {
        max_depth: usize::from(input.max_depth % 8),
        ..GenerateConfig::default()
    };
    let generator = Generator::new(&registry, 3, config);
    let mut rng = SmallRng::seed_from_u64(input.seed);

    let first = generator.generate(&mut rng);
    let second = generator.generate(&mut rng);
    let child = crossover(&first, &second, f64::from(input.breeding) / 255.0, &mut rng);
    let mutant = mutate(&child, &generator, f64::from(input.mutation) / 255.0, &mut rng);

    // Arity must survive every operator and evaluation must never fail or panic
    for tree in [&first, &second, &child, &mutant] {
        assert!(tree.validate().is_ok());
        assert!(tree.evaluate(&input.inputs).is_ok());
    }
    assert_eq!(child.label(), first.label());
});

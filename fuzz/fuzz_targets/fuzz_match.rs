#![no_main]

use arbitrary::Arbitrary;
use arbor::game::{GridConfig, MatchOutcome, Position, PursuitGame, MIN_BOARD_SIZE, OBSERVATION_LEN};
use arbor::gp::{GenerateConfig, Generator, Registry};
use libfuzzer_sys::fuzz_target;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Structured input for match fuzzing.
#[derive(Arbitrary, Debug)]
struct MatchInput {
    /// Seed for both programs.
    seed: u64,
    /// Board side, capped below.
    size: u8,
    /// Round limit, capped below.
    rounds: u8,
    /// Starting cells, reduced onto the board.
    start: [(u8, u8); 2],
}

fuzz_target!(|input: MatchInput| {
    let size = i64::from(input.size % 8) + MIN_BOARD_SIZE;
    let config = GridConfig {
        size,
        max_rounds: usize::from(input.rounds % 64),
    };
    let cell = |(x, y): (u8, u8)| Position::new(i64::from(x) % size, i64::from(y) % size);

    let registry = Registry::arithmetic();
    let generator = Generator::new(&registry, OBSERVATION_LEN, GenerateConfig::default());
    let mut rng = SmallRng::seed_from_u64(input.seed);
    let mut first = generator.generate(&mut rng);
    let mut second = generator.generate(&mut rng);

    let mut game = PursuitGame::with_positions(config, cell(input.start[0]), cell(input.start[1]));
    let outcome = game.play(&mut first, &mut second).expect("generated programs always evaluate");

    // Players never leave the board
    for position in game.positions() {
        assert!((0..size).contains(&position.x) && (0..size).contains(&position.y));
    }
    if let MatchOutcome::Win { winner, round, .. } = outcome {
        assert!(winner < 2);
        assert!(round < config.max_rounds);
    }
});

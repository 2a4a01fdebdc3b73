//! Integration tests for the pursuit game and tournaments.
//!
//! Run with: cargo test --release --test grid_game

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::io::Cursor;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use arbor::game::{
    play_match, GridConfig, HumanPlayer, MatchOutcome, Player, Position, PursuitGame, WinReason,
};
use arbor::gp::{Registry, Tree, Value};
use arbor::{tournament, GameError};

/// Always answers with its own last move.
fn echo() -> Tree {
    Tree::Param(4)
}

/// `add(p4, 1)`: cycles up, down, left, right and never repeats.
fn cycler(registry: &Registry) -> Tree {
    Tree::call(registry.get("add").unwrap(), vec![Tree::Param(4), Tree::Const(1)]).unwrap()
}

fn at(first: (Value, Value), second: (Value, Value)) -> PursuitGame {
    PursuitGame::with_positions(
        GridConfig::default(),
        Position::new(first.0, first.1),
        Position::new(second.0, second.1),
    )
}

#[test]
fn test_echo_players_first_mover_loses() {
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..50 {
        let outcome = play_match(&mut echo(), &mut echo(), GridConfig::default(), &mut rng).unwrap();
        let MatchOutcome::Win { winner, round, reason } = outcome else {
            panic!("expected a decided match, got {outcome:?}");
        };
        assert_eq!(winner, 1);
        assert_eq!(reason, WinReason::RepeatedMove);
        assert!(round < GridConfig::default().max_rounds);
    }
}

#[test]
fn test_first_mover_captures() {
    // Player 1 sits to the right of player 0; moving right (3) captures.
    let outcome = at((2, 1), (2, 2))
        .play(&mut Tree::Const(3), &mut Tree::Const(0))
        .unwrap();
    assert_eq!(
        outcome,
        MatchOutcome::Win {
            winner: 0,
            round: 0,
            reason: WinReason::Capture
        }
    );
}

#[test]
fn test_second_mover_captures() {
    // Player 0 steps down to (1, 0); player 1 steps left onto it.
    let mut game = at((0, 0), (1, 1));
    let outcome = game.play(&mut Tree::Const(1), &mut Tree::Const(2)).unwrap();
    assert_eq!(
        outcome,
        MatchOutcome::Win {
            winner: 1,
            round: 0,
            reason: WinReason::Capture
        }
    );
    assert_eq!(game.positions(), [Position::new(1, 0), Position::new(1, 0)]);
}

#[test]
fn test_cycler_beats_echo_in_either_seat() {
    let registry = Registry::arithmetic();
    let mut rng = SmallRng::seed_from_u64(8);
    for _ in 0..20 {
        let outcome =
            play_match(&mut echo(), &mut cycler(&registry), GridConfig::default(), &mut rng).unwrap();
        assert_eq!(outcome.winner(), Some(1));

        let outcome =
            play_match(&mut cycler(&registry), &mut echo(), GridConfig::default(), &mut rng).unwrap();
        assert_eq!(outcome.winner(), Some(0));
    }
}

#[test]
fn test_draw_when_round_limit_reached() {
    // From opposite corners two cyclers never meet within three rounds.
    let registry = Registry::arithmetic();
    let config = GridConfig { size: 4, max_rounds: 3 };
    let mut game = PursuitGame::with_positions(config, Position::new(0, 0), Position::new(3, 3));

    let outcome = game.play(&mut cycler(&registry), &mut cycler(&registry)).unwrap();

    assert_eq!(outcome, MatchOutcome::Draw);
    assert_eq!(game.last_moves(), [2, 2]);
}

#[test]
fn test_tournament_loss_points() {
    let registry = Registry::arithmetic();
    let mut players = vec![echo(), cycler(&registry), echo()];
    let mut rng = SmallRng::seed_from_u64(1);

    let losses = tournament(&mut players, GridConfig::default(), &mut rng).unwrap();

    // The cycler wins all four of its matches. Each echo loses both matches
    // against the cycler plus the one it opens against the other echo.
    assert_eq!(losses, vec![6, 0, 6]);
}

#[test]
fn test_human_player_in_a_match() {
    // The human moves right then down; the echo opponent repeats on its second turn.
    let mut human = HumanPlayer::new(Cursor::new("3\n1\n"), Vec::new(), 4);
    let outcome = at((0, 0), (3, 3)).play(&mut human, &mut echo()).unwrap();
    assert_eq!(
        outcome,
        MatchOutcome::Win {
            winner: 0,
            round: 1,
            reason: WinReason::RepeatedMove
        }
    );
}

#[test]
fn test_human_player_eof_aborts_match() {
    let mut human = HumanPlayer::new(Cursor::new(""), Vec::new(), 4);
    let result = play_match(&mut human, &mut echo(), GridConfig::default(), &mut SmallRng::seed_from_u64(2));
    assert!(matches!(result, Err(GameError::InputClosed)));
}

#[test]
fn test_custom_player() {
    /// Replays a fixed script of moves.
    struct Script(Vec<Value>);

    impl Player for Script {
        fn next_move(&mut self, _observation: &[Value]) -> Result<Value, GameError> {
            Ok(self.0.remove(0))
        }
    }

    // Round 0: (1, 0) and (1, 2). Round 1: player 0 steps right to (1, 1),
    // then player 1 steps left onto it.
    let outcome = at((0, 0), (2, 2))
        .play(&mut Script(vec![1, 3]), &mut Script(vec![0, 2]))
        .unwrap();
    assert_eq!(
        outcome,
        MatchOutcome::Win {
            winner: 1,
            round: 1,
            reason: WinReason::Capture
        }
    );
}

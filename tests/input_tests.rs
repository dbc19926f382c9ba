//! Input adapter integration tests: key sequences driving a real engine.

use cmd_2048::core::{Coord, Direction, EngineConfig, Grid, Level, Powerup, PowerupMode, Uses};
use cmd_2048::input::{Feedback, InputAdapter, InputMode, Key};
use cmd_2048::rules::{GameEngine, PowerupError};

fn start(rows: [[Level; 4]; 4], mode: PowerupMode) -> GameEngine {
    let config = EngineConfig::default().with_seed(21).with_initial_spawns(0);
    GameEngine::with_grid(config, Grid::from_rows(rows).unwrap(), mode)
}

fn press(input: &mut InputAdapter, engine: &mut GameEngine, keys: &[Key]) -> Vec<Feedback> {
    keys.iter().map(|&key| input.handle(engine, key)).collect()
}

/// Pick 1A and 1B with the cursor and swap them.
#[test]
fn test_swap_by_keys() {
    let mut engine = start([[1, 2, 0, 0], [0; 4], [0; 4], [0; 4]], PowerupMode::On);
    let mut input = InputAdapter::new();

    let feedback = press(
        &mut input,
        &mut engine,
        &[Key::Swap, Key::Enter, Key::Right, Key::Enter],
    );

    assert_eq!(
        feedback,
        vec![
            Feedback::SwapSelection,
            Feedback::Selected(Coord::new(0, 0)),
            Feedback::CursorMoved(Coord::new(1, 0)),
            Feedback::Swapped,
        ]
    );
    assert_eq!(engine.session().grid().rows()[0], [2, 1, 0, 0]);
    assert_eq!(engine.session().powerups().swap, Uses::Limited(0));
    assert_eq!(input.mode(), InputMode::Play);
    assert!(input.selection().is_empty());
}

/// Swapping two equal tiles reports the failure and leaves selection mode.
#[test]
fn test_swap_equal_tiles_fails() {
    let mut engine = start([[3, 3, 0, 0], [0; 4], [0; 4], [0; 4]], PowerupMode::On);
    let mut input = InputAdapter::new();

    let feedback = press(
        &mut input,
        &mut engine,
        &[Key::Swap, Key::Enter, Key::Right, Key::Enter],
    );

    let last = feedback.last().unwrap();
    assert_eq!(
        last,
        &Feedback::Failed {
            powerup: Powerup::Swap,
            error: PowerupError::InvalidPair
        }
    );
    assert_eq!(last.to_string(), "Failed to swap: both tiles have the same value");
    assert_eq!(engine.session().powerups().swap, Uses::Limited(1));
    assert_eq!(input.mode(), InputMode::Play);
}

/// Selecting the same empty cell twice is an invalid target.
#[test]
fn test_swap_empty_cell_fails() {
    let mut engine = start([[0, 0, 0, 0], [0, 1, 0, 0], [0; 4], [0; 4]], PowerupMode::On);
    let mut input = InputAdapter::new();

    let feedback = press(&mut input, &mut engine, &[Key::Swap, Key::Enter, Key::Enter]);
    assert_eq!(
        feedback[2],
        Feedback::Failed {
            powerup: Powerup::Swap,
            error: PowerupError::InvalidTarget
        }
    );
}

/// Delete picks one tile and clears its level.
#[test]
fn test_delete_by_keys() {
    // Making a 512 earns the first delete.
    let mut engine = start([[8, 8, 0, 0], [4, 0, 0, 4], [0; 4], [0; 4]], PowerupMode::On);
    let mut input = InputAdapter::new();

    assert_eq!(input.handle(&mut engine, Key::Left), Feedback::Moved { accepted: true });
    assert_eq!(engine.session().powerups().delete, Uses::Limited(1));

    // 1A is now the 512; step down to the 32 at 2A and delete it.
    let feedback = press(&mut input, &mut engine, &[Key::Delete, Key::Down, Key::Enter]);
    assert_eq!(feedback[0], Feedback::DeleteSelection);
    assert_eq!(feedback[1], Feedback::CursorMoved(Coord::new(0, 1)));
    assert_eq!(feedback[2], Feedback::Deleted);
    assert_eq!(engine.session().grid().get(Coord::new(0, 1)), Some(0));
    assert_eq!(engine.session().grid().get(Coord::new(0, 0)), Some(9));
    assert_eq!(engine.session().powerups().delete, Uses::Limited(0));
}

/// Undo through the keyboard, then run out.
#[test]
fn test_undo_by_keys() {
    let mut engine = start([[1, 0, 0, 0], [0; 4], [0; 4], [0; 4]], PowerupMode::On);
    let mut input = InputAdapter::new();

    input.handle(&mut engine, Key::Right);
    assert_eq!(input.handle(&mut engine, Key::Undo), Feedback::Undone);
    assert_eq!(engine.session().grid().rows()[0], [1, 0, 0, 0]);

    let feedback = input.handle(&mut engine, Key::Undo);
    assert_eq!(
        feedback,
        Feedback::Failed {
            powerup: Powerup::Undo,
            error: PowerupError::NoHistory
        }
    );

    input.handle(&mut engine, Key::Right);
    input.handle(&mut engine, Key::Undo);
    input.handle(&mut engine, Key::Right);
    assert_eq!(
        input.handle(&mut engine, Key::Undo),
        Feedback::OutOfUses {
            powerup: Powerup::Undo,
            unlock_value: 128
        }
    );
}

/// Moves are ignored while paused and resume afterwards.
#[test]
fn test_pause_blocks_moves() {
    let mut engine = start([[1, 0, 0, 0], [0; 4], [0; 4], [0; 4]], PowerupMode::Off);
    let mut input = InputAdapter::new();

    press(&mut input, &mut engine, &[Key::Space, Key::Escape]);
    assert!(input.is_paused());
    assert_eq!(input.handle(&mut engine, Key::Right), Feedback::Ignored);
    assert_eq!(input.handle(&mut engine, Key::Enter), Feedback::Ignored);
    assert_eq!(engine.session().moves(), 0);

    press(&mut input, &mut engine, &[Key::Space, Key::Escape]);
    assert_eq!(
        input.handle(&mut engine, Key::Right),
        Feedback::Moved { accepted: true }
    );
    assert_eq!(engine.session().moves(), 1);
}

/// Moves are refused once the game is lost.
#[test]
fn test_moves_after_loss() {
    let stuck = [[1, 2, 1, 2], [2, 1, 2, 1], [1, 2, 1, 2], [2, 1, 2, 1]];
    let mut engine = start(stuck, PowerupMode::Off);
    let mut input = InputAdapter::new();

    for key in [Key::Up, Key::Down, Key::Left, Key::Right] {
        assert_eq!(input.handle(&mut engine, key), Feedback::Moved { accepted: false });
    }
    assert_eq!(input.handle(&mut engine, Key::Escape), Feedback::Quit);
}

/// The cursor stays on the board.
#[test]
fn test_cursor_clamped() {
    let mut engine = start([[1, 0, 0, 0], [0; 4], [0; 4], [0; 4]], PowerupMode::On);
    let mut input = InputAdapter::new();
    input.handle(&mut engine, Key::Swap);

    for _ in 0..6 {
        input.handle(&mut engine, Key::Right);
        input.handle(&mut engine, Key::Down);
    }
    assert_eq!(input.cursor(), Coord::new(3, 3));
    assert_eq!(input.cursor().to_string(), "4D");

    for _ in 0..6 {
        input.handle(&mut engine, Key::Left);
        input.handle(&mut engine, Key::Up);
    }
    assert_eq!(input.cursor(), Coord::new(0, 0));
    assert_eq!(Coord::new(0, 0).stepped(Direction::Left), Coord::new(0, 0));
}

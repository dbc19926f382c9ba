//! Key events → engine calls.
//!
//! The adapter holds the front end's own modes: tile selection for swap and
//! delete, the pause handshake (Space, then Escape), and the selection
//! cursor. The engine is passed in per call, so one adapter can drive
//! whichever engine the front end currently shows.

use smallvec::SmallVec;
use tracing::{debug, instrument};

use crate::core::{Coord, Powerup};
use crate::rules::slide::tile_value;
use crate::rules::{GameEngine, PowerupError};

use super::key::Key;

/// What the arrow keys and Enter currently do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InputMode {
    /// Arrows move tiles, Enter restarts.
    #[default]
    Play,
    /// Arrows move the cursor, Enter picks one of two tiles to swap.
    SwapSelect,
    /// Arrows move the cursor, Enter picks the tile level to delete.
    DeleteSelect,
}

impl InputMode {
    fn selections_needed(self) -> usize {
        match self {
            InputMode::Play => 0,
            InputMode::SwapSelect => 2,
            InputMode::DeleteSelect => 1,
        }
    }
}

/// Result of one key press, printable as a status line.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum Feedback {
    /// The key does nothing right now.
    #[display("")]
    Ignored,
    /// A move was sent to the engine; `accepted` is false once the game is lost.
    #[display("")]
    Moved { accepted: bool },
    #[display("")]
    Restarted,
    #[display("Current coordinates (1A is top left and 1D is top right): {_0}")]
    CursorMoved(Coord),
    #[display("Selected {_0}")]
    Selected(Coord),
    #[display("Entered swap selection")]
    SwapSelection,
    #[display("Entered deletion selection")]
    DeleteSelection,
    #[display("Exited tile selection")]
    LeftSelection,
    #[display("Last move undone")]
    Undone,
    #[display("Tiles successfully swapped")]
    Swapped,
    #[display("Tiles successfully deleted")]
    Deleted,
    #[display("You don't have any uses left, make {unlock_value} tiles to get more uses")]
    OutOfUses { powerup: Powerup, unlock_value: u64 },
    #[display("Failed to {powerup}: {error}")]
    Failed { powerup: Powerup, error: PowerupError },
    #[display("Waiting for ESC press to pause")]
    PauseArmed,
    #[display("ESC key was not pressed")]
    PauseTimedOut,
    #[display("CURRENTLY PAUSED")]
    Paused,
    #[display("")]
    Resumed,
    #[display("")]
    Quit,
}

/// Front-end input state.
#[derive(Clone, Debug, Default)]
pub struct InputAdapter {
    mode: InputMode,
    paused: bool,
    pause_armed: bool,
    cursor: Coord,
    selection: SmallVec<[Coord; 2]>,
}

impl InputAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn is_pause_armed(&self) -> bool {
        self.pause_armed
    }

    #[must_use]
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Cells picked so far in a selection mode.
    #[must_use]
    pub fn selection(&self) -> &[Coord] {
        &self.selection
    }

    /// Cancel an armed pause that was not confirmed in time.
    pub fn disarm_pause(&mut self) -> Option<Feedback> {
        std::mem::take(&mut self.pause_armed).then_some(Feedback::PauseTimedOut)
    }

    /// Apply one key press.
    #[instrument(skip(self, engine))]
    pub fn handle(&mut self, engine: &mut GameEngine, key: Key) -> Feedback {
        match key {
            Key::Space => self.arm_pause(),
            Key::Escape => self.escape(),
            _ if self.paused => Feedback::Ignored,
            Key::Enter => self.enter(engine),
            Key::Undo => self.undo(engine),
            Key::Swap => self.begin_selection(engine, Powerup::Swap),
            Key::Delete => self.begin_selection(engine, Powerup::Delete),
            Key::Up | Key::Down | Key::Left | Key::Right => {
                let Some(direction) = key.direction() else {
                    return Feedback::Ignored;
                };
                if self.mode == InputMode::Play {
                    Feedback::Moved {
                        accepted: engine.move_tiles(direction),
                    }
                } else {
                    self.cursor = self.cursor.stepped(direction);
                    Feedback::CursorMoved(self.cursor)
                }
            }
        }
    }

    fn arm_pause(&mut self) -> Feedback {
        if self.pause_armed {
            return Feedback::Ignored;
        }
        self.pause_armed = true;
        Feedback::PauseArmed
    }

    fn escape(&mut self) -> Feedback {
        if self.pause_armed {
            self.pause_armed = false;
            self.paused = !self.paused;
            debug!(paused = self.paused, "pause toggled");
            return if self.paused {
                Feedback::Paused
            } else {
                Feedback::Resumed
            };
        }
        if self.paused {
            return Feedback::Ignored;
        }
        if self.mode == InputMode::Play {
            Feedback::Quit
        } else {
            self.reset_selection();
            Feedback::LeftSelection
        }
    }

    fn enter(&mut self, engine: &mut GameEngine) -> Feedback {
        if self.mode == InputMode::Play {
            engine.restart(None, None);
            return Feedback::Restarted;
        }

        self.selection.push(self.cursor);
        if self.selection.len() < self.mode.selections_needed() {
            return Feedback::Selected(self.cursor);
        }

        let mode = self.mode;
        let picked = std::mem::take(&mut self.selection);
        self.reset_selection();

        let (powerup, result) = match (mode, picked.as_slice()) {
            (InputMode::SwapSelect, &[a, b]) => (Powerup::Swap, engine.swap(a, b)),
            (InputMode::DeleteSelect, &[coord]) => (Powerup::Delete, engine.delete(coord)),
            _ => return Feedback::Ignored,
        };

        match result {
            Ok(()) if powerup == Powerup::Swap => Feedback::Swapped,
            Ok(()) => Feedback::Deleted,
            Err(error) => refusal(engine, powerup, error),
        }
    }

    fn undo(&mut self, engine: &mut GameEngine) -> Feedback {
        if !engine.session().powerups().enabled() || self.mode != InputMode::Play {
            return Feedback::Ignored;
        }
        match engine.undo() {
            Ok(()) => Feedback::Undone,
            Err(error) => refusal(engine, Powerup::Undo, error),
        }
    }

    fn begin_selection(&mut self, engine: &GameEngine, powerup: Powerup) -> Feedback {
        let powerups = engine.session().powerups();
        if !powerups.enabled() || self.mode != InputMode::Play {
            return Feedback::Ignored;
        }
        if !powerups.uses(powerup).is_available() {
            return out_of_uses(engine, powerup);
        }

        self.reset_selection();
        if powerup == Powerup::Swap {
            self.mode = InputMode::SwapSelect;
            Feedback::SwapSelection
        } else {
            self.mode = InputMode::DeleteSelect;
            Feedback::DeleteSelection
        }
    }

    fn reset_selection(&mut self) {
        self.mode = InputMode::Play;
        self.cursor = Coord::default();
        self.selection.clear();
    }
}

fn out_of_uses(engine: &GameEngine, powerup: Powerup) -> Feedback {
    let rules = &engine.config().powerups;
    let level = match powerup {
        Powerup::Undo => rules.undo_unlock_level,
        Powerup::Swap => rules.swap_unlock_level,
        Powerup::Delete => rules.delete_unlock_level,
    };
    Feedback::OutOfUses {
        powerup,
        unlock_value: tile_value(level),
    }
}

fn refusal(engine: &GameEngine, powerup: Powerup, error: PowerupError) -> Feedback {
    match error {
        PowerupError::NoUsesLeft(_) => out_of_uses(engine, powerup),
        error => Feedback::Failed { powerup, error },
    }
}

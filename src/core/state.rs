//! Game lifecycle state.

use serde::{Deserialize, Serialize};

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    InProgress,
    /// A 2048 tile has appeared; play continues.
    Won,
    /// No direction can move. Blocks further moves until restart
    /// (or a powerup, under [`LossPolicy::Recoverable`](super::LossPolicy)).
    Lost,
}

/// Lifecycle state plus the flags that are orthogonal to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameStatus {
    pub state: GameState,
    /// The game reached the win level at some point, even if it is now lost.
    pub won: bool,
    /// The session started from a caller-supplied grid.
    pub custom_grid: bool,
}

impl GameStatus {
    #[must_use]
    pub fn new(custom_grid: bool) -> Self {
        Self {
            custom_grid,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.state == GameState::Lost
    }

    /// State for a board that still has a legal move.
    pub(crate) fn set_playable(&mut self) {
        self.state = if self.won {
            GameState::Won
        } else {
            GameState::InProgress
        };
    }

    pub(crate) fn set_lost(&mut self) {
        self.state = GameState::Lost;
    }

    pub(crate) fn mark_won(&mut self) {
        self.won = true;
        if self.state == GameState::InProgress {
            self.state = GameState::Won;
        }
    }
}

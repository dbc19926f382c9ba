//! The state of one game, as seen by presenters.
//!
//! A `GameSession` exclusively owns its grid, tile labels and history. The
//! engine mutates it; everything else reads it through the accessors here.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::config::{PowerupMode, PowerupRules};
use super::grid::{Coord, Grid};
use super::history::{History, Snapshot};
use super::powerups::Powerups;
use super::state::{GameState, GameStatus};
use super::tiles::TileLabels;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSession {
    pub(crate) grid: Grid,
    pub(crate) tiles: TileLabels,
    pub(crate) score: u64,
    pub(crate) moves: u32,
    pub(crate) status: GameStatus,
    pub(crate) powerups: Powerups,
    pub(crate) history: History,
    pub(crate) started_at: DateTime<Utc>,
    pub(crate) lost_at: Option<DateTime<Utc>>,
}

impl GameSession {
    /// A fresh session on `grid`, before any spawns.
    pub(crate) fn new(grid: Grid, custom_grid: bool, mode: PowerupMode, rules: &PowerupRules) -> Self {
        Self {
            grid,
            tiles: TileLabels::new(),
            score: 0,
            moves: 0,
            status: GameStatus::new(custom_grid),
            powerups: Powerups::for_mode(mode, rules),
            history: History::new(rules.history_depth_for(mode)),
            started_at: Utc::now(),
            lost_at: None,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn tiles(&self) -> &TileLabels {
        &self.tiles
    }

    /// Display string of the tile at `coord` (empty for empty cells).
    #[must_use]
    pub fn label(&self, coord: Coord) -> &str {
        self.grid.get(coord).map_or("", |level| self.tiles.label(level))
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.status.state
    }

    #[must_use]
    pub fn powerups(&self) -> &Powerups {
        &self.powerups
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn lost_at(&self) -> Option<DateTime<Utc>> {
        self.lost_at
    }

    /// Time from start to loss; `None` while the game is still playable.
    #[must_use]
    pub fn playtime(&self) -> Option<Duration> {
        self.lost_at.map(|lost| lost - self.started_at)
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid,
            score: self.score,
            moves: self.moves,
            swaps: self.powerups.swap,
            deletes: self.powerups.delete,
            status: self.status,
            lost_at: self.lost_at,
        }
    }

    /// Record the current state in the history.
    pub(crate) fn remember(&mut self) {
        let snapshot = self.snapshot();
        self.history.push(snapshot);
    }

    pub(crate) fn restore(&mut self, snapshot: &Snapshot) {
        self.grid = snapshot.grid;
        self.score = snapshot.score;
        self.moves = snapshot.moves;
        self.powerups.swap = snapshot.swaps;
        self.powerups.delete = snapshot.deletes;
        self.status = snapshot.status;
        self.lost_at = snapshot.lost_at;
    }
}

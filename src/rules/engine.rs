//! The game engine: move resolution, spawning, win/loss checks and powerups.
//!
//! `GameEngine` owns a [`GameSession`] and is the only thing that mutates it.
//! All operations are synchronous and take `&mut self`, so a session is
//! always driven by one caller at a time.
//!
//! ## Example
//!
//! ```
//! use cmd_2048::core::{Direction, EngineConfig, Grid, PowerupMode};
//! use cmd_2048::rules::GameEngine;
//!
//! let grid = Grid::from_rows([[1, 1, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
//! let config = EngineConfig::default().with_seed(42).with_initial_spawns(0);
//! let mut engine = GameEngine::with_grid(config, grid, PowerupMode::Off);
//!
//! assert!(engine.move_tiles(Direction::Left));
//! assert_eq!(engine.session().grid().rows()[0][0], 2);
//! assert_eq!(engine.session().score(), 4);
//! ```

use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::core::{
    Coord, Direction, EngineConfig, GameRng, GameSession, Grid, Level, LossPolicy, Powerup,
    PowerupMode,
};

use super::error::PowerupError;
use super::slide::{self, Slide};

/// The 2048 rule engine.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: EngineConfig,
    mode: PowerupMode,
    rng: GameRng,
    /// Grid that parameterless restarts start from.
    original_grid: Grid,
    custom_grid: bool,
    session: GameSession,
}

impl GameEngine {
    /// Start a game on a blank board.
    #[must_use]
    pub fn new(config: EngineConfig, mode: PowerupMode) -> Self {
        Self::build(config, Grid::empty(), false, mode)
    }

    /// Start a game on a custom board. Later parameterless restarts return to it.
    #[must_use]
    pub fn with_grid(config: EngineConfig, grid: Grid, mode: PowerupMode) -> Self {
        Self::build(config, grid, true, mode)
    }

    fn build(config: EngineConfig, grid: Grid, custom_grid: bool, mode: PowerupMode) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let session = GameSession::new(grid, custom_grid, mode, &config.powerups);
        let mut engine = Self {
            config,
            mode,
            rng,
            original_grid: grid,
            custom_grid,
            session,
        };
        engine.restart(None, None);
        engine
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Powerup mode of the current game.
    #[must_use]
    pub fn mode(&self) -> PowerupMode {
        self.mode
    }

    /// The grid a parameterless restart starts from.
    #[must_use]
    pub fn original_grid(&self) -> &Grid {
        &self.original_grid
    }

    /// Seed of the spawn RNG, for reproducing a game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Whether `direction` is illegal: the rows it slides along are full
    /// and nothing can merge.
    #[must_use]
    pub fn is_blocked(&self, direction: Direction) -> bool {
        slide::resolve(&self.session.grid, direction).is_blocked()
    }

    /// Which directions would change the board, as `[left, up, right, down]`.
    #[must_use]
    pub fn legal_moves(&self) -> [bool; 4] {
        Direction::ALL.map(|direction| {
            matches!(slide::resolve(&self.session.grid, direction), Slide::Moved(_))
        })
    }

    // =========================================================================
    // Restart
    // =========================================================================

    /// (Re)start the game.
    ///
    /// - `custom_grid`: start from this grid and remember it for later
    ///   restarts; `None` reuses the remembered grid (blank unless a custom
    ///   grid was ever given).
    /// - `mode`: new powerup mode; `None` keeps the current one.
    ///
    /// Score, moves, history and powerup counters are reset, the configured
    /// number of tiles is spawned, and the win/loss check runs.
    #[instrument(skip(self, custom_grid))]
    pub fn restart(&mut self, custom_grid: Option<Grid>, mode: Option<PowerupMode>) {
        if let Some(grid) = custom_grid {
            self.original_grid = grid;
            self.custom_grid = true;
        }
        if let Some(mode) = mode {
            self.mode = mode;
        }

        self.session = GameSession::new(
            self.original_grid,
            self.custom_grid,
            self.mode,
            &self.config.powerups,
        );
        for _ in 0..self.config.initial_spawns {
            self.spawn();
        }
        let highest = self.session.grid.max_level();
        self.session.tiles.ensure(highest);

        info!(mode = ?self.mode, custom_grid = self.custom_grid, "game started");
        self.check();
    }

    // =========================================================================
    // Moves
    // =========================================================================

    /// Slide the board towards `direction`.
    ///
    /// Returns `false` only when the game is lost. A legal press that changes
    /// nothing still returns `true`; compare the session to tell the two
    /// apart.
    #[instrument(skip(self))]
    pub fn move_tiles(&mut self, direction: Direction) -> bool {
        if self.session.status.is_lost() {
            debug!("move ignored, game is lost");
            return false;
        }

        match slide::resolve(&self.session.grid, direction) {
            Slide::Blocked => debug!("move blocked"),
            Slide::Unchanged => debug!("move changed nothing"),
            Slide::Moved(outcome) => {
                self.session.remember();
                self.session.grid = outcome.grid;
                self.session.score = self.session.score.saturating_add(outcome.points);
                self.session.moves += 1;
                for &level in &outcome.merges {
                    self.record_merge(level);
                }
                let spawned = self.spawn();
                debug!(points = outcome.points, ?spawned, "move applied");
            }
        }

        self.check();
        true
    }

    fn record_merge(&mut self, level: Level) {
        self.session.tiles.ensure(level);
        let rules = &self.config.powerups;
        if let Some(powerup) = self.session.powerups.grant_for_level(level, rules) {
            info!(%powerup, level, "powerup use earned");
        }
    }

    /// Put a 2 (or, rarely, a 4) on a random empty cell.
    ///
    /// Returns the spawned level, or `None` if the grid is full.
    fn spawn(&mut self) -> Option<Level> {
        let empty = self.session.grid.empty_cells();
        let coord = *self.rng.choose(&empty)?;
        let level = if self.rng.gen_bool(self.config.four_probability) {
            2
        } else {
            1
        };
        self.session.grid.set(coord, level);
        Some(level)
    }

    /// Update the win flag and lost state from the current grid.
    fn check(&mut self) {
        let status = &mut self.session.status;

        if !status.won && self.session.grid.max_level() >= self.config.win_level {
            status.mark_won();
            info!(score = self.session.score, moves = self.session.moves, "game won");
        }

        if slide::is_stuck(&self.session.grid) {
            if !status.is_lost() {
                status.set_lost();
                info!(score = self.session.score, moves = self.session.moves, "game lost");
            }
            // A lost session always carries its loss time.
            if self.session.lost_at.is_none() {
                self.session.lost_at = Some(Utc::now());
            }
        } else {
            status.set_playable();
            self.session.lost_at = None;
        }
    }

    // =========================================================================
    // Powerups
    // =========================================================================

    fn ensure_usable(&self, powerup: Powerup) -> Result<(), PowerupError> {
        if !self.session.powerups.uses(powerup).is_available() {
            return Err(PowerupError::NoUsesLeft(powerup));
        }
        if self.session.status.is_lost() && self.config.loss_policy == LossPolicy::Final {
            return Err(PowerupError::GameOver);
        }
        Ok(())
    }

    /// Return to the state before the last move, swap or delete.
    ///
    /// # Errors
    ///
    /// - [`PowerupError::NoUsesLeft`] if the undo counter is zero
    /// - [`PowerupError::GameOver`] if the game is lost under [`LossPolicy::Final`]
    /// - [`PowerupError::NoHistory`] if nothing has been recorded since the restart
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<(), PowerupError> {
        self.ensure_usable(Powerup::Undo).inspect_err(|err| debug!(%err, "undo refused"))?;
        let snapshot = self.session.history.pop().ok_or(PowerupError::NoHistory)?;

        self.session.restore(&snapshot);
        self.session.powerups.undo.consume();
        self.session.powerups.used += 1;
        debug!(history = self.session.history.len(), "undo applied");

        self.check();
        Ok(())
    }

    /// Exchange two tiles.
    ///
    /// # Errors
    ///
    /// - [`PowerupError::NoUsesLeft`] if the swap counter is zero
    /// - [`PowerupError::GameOver`] if the game is lost under [`LossPolicy::Final`]
    /// - [`PowerupError::InvalidTarget`] if either cell is empty or off the board
    /// - [`PowerupError::InvalidPair`] if both tiles have the same level
    #[instrument(skip(self))]
    pub fn swap(&mut self, a: Coord, b: Coord) -> Result<(), PowerupError> {
        self.ensure_usable(Powerup::Swap).inspect_err(|err| debug!(%err, "swap refused"))?;
        let grid = &self.session.grid;
        let (Some(first), Some(second)) = (grid.tile(a), grid.tile(b)) else {
            return Err(PowerupError::InvalidTarget);
        };
        if first == second {
            return Err(PowerupError::InvalidPair);
        }

        self.session.remember();
        self.session.grid.swap(a, b);
        self.consume(Powerup::Swap);
        debug!(%a, %b, "tiles swapped");

        self.check();
        Ok(())
    }

    /// Remove every tile with the same level as the tile at `coord`.
    ///
    /// # Errors
    ///
    /// - [`PowerupError::NoUsesLeft`] if the delete counter is zero
    /// - [`PowerupError::GameOver`] if the game is lost under [`LossPolicy::Final`]
    /// - [`PowerupError::InvalidTarget`] if the cell is empty or off the board
    #[instrument(skip(self))]
    pub fn delete(&mut self, coord: Coord) -> Result<(), PowerupError> {
        self.ensure_usable(Powerup::Delete).inspect_err(|err| debug!(%err, "delete refused"))?;
        let level = self
            .session
            .grid
            .tile(coord)
            .ok_or(PowerupError::InvalidTarget)?;

        self.session.remember();
        let cleared = self.session.grid.clear_level(level);
        self.consume(Powerup::Delete);
        debug!(level, cleared, "tiles deleted");

        self.check();
        Ok(())
    }

    /// Bookkeeping shared by swap and delete, which count as moves.
    fn consume(&mut self, powerup: Powerup) {
        self.session.powerups.uses_mut(powerup).consume();
        self.session.powerups.used += 1;
        self.session.moves += 1;
    }
}

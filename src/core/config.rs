//! Engine configuration.
//!
//! Games are configured at construction by providing an `EngineConfig`:
//! - `PowerupMode`: whether powerups are enabled, and practice mode
//! - `PowerupRules`: unlock levels, caps, starting uses, history depths
//! - `LossPolicy`: whether a lost board can be rescued by powerups
//!
//! Everything has a default matching the classic terminal game.

use serde::{Deserialize, Serialize};

use super::grid::Level;

/// Powerup mode chosen at (re)start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerupMode {
    /// No powerups; undo/swap/delete always report no uses left.
    #[default]
    Off,
    /// Powerups with the normal earned-use economy.
    On,
    /// Powerups plus unlimited undo and a deep history.
    Practice,
}

impl PowerupMode {
    /// Convert 0/1/2 to a mode. Returns None for other values.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Off),
            1 => Some(Self::On),
            2 => Some(Self::Practice),
            _ => None,
        }
    }

    /// Parse the start-mode token typed at launch: `""`, `"p"` or `"p+"`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "" => Some(Self::Off),
            "p" => Some(Self::On),
            "p+" => Some(Self::Practice),
            _ => None,
        }
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::On => 1,
            Self::Practice => 2,
        }
    }

    /// Practice mode implies powerups.
    #[must_use]
    pub const fn powerups_enabled(self) -> bool {
        !matches!(self, Self::Off)
    }

    #[must_use]
    pub const fn is_practice(self) -> bool {
        matches!(self, Self::Practice)
    }
}

/// What happens to powerups once the board is lost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LossPolicy {
    /// Undo, swap and delete still work on a lost board, and the next
    /// win/loss check can put the game back in play.
    #[default]
    Recoverable,
    /// A lost game only ends through restart.
    Final,
}

/// Powerup economy parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerupRules {
    /// Merging into this level grants one undo (128).
    pub undo_unlock_level: Level,
    /// Merging into this level grants one swap (256).
    pub swap_unlock_level: Level,
    /// Merging into this level grants one delete (512).
    pub delete_unlock_level: Level,
    /// Earned uses never push a counter above this.
    pub grant_cap: u8,
    pub starting_undos: u8,
    pub starting_swaps: u8,
    pub starting_deletes: u8,
    /// Snapshots kept with powerups on.
    pub history_depth: usize,
    /// Snapshots kept in practice mode.
    pub practice_history_depth: usize,
}

impl Default for PowerupRules {
    fn default() -> Self {
        Self {
            undo_unlock_level: 7,
            swap_unlock_level: 8,
            delete_unlock_level: 9,
            grant_cap: 2,
            starting_undos: 2,
            starting_swaps: 1,
            starting_deletes: 0,
            history_depth: 1,
            practice_history_depth: 128,
        }
    }
}

impl PowerupRules {
    /// History depth for a mode (0 when powerups are off).
    #[must_use]
    pub fn history_depth_for(&self, mode: PowerupMode) -> usize {
        match mode {
            PowerupMode::Off => 0,
            PowerupMode::On => self.history_depth,
            PowerupMode::Practice => self.practice_history_depth,
        }
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Spawn RNG seed. `None` draws one from the OS.
    pub seed: Option<u64>,

    /// Tiles spawned by every restart (2 in the classic game).
    pub initial_spawns: usize,

    /// Probability that a spawned tile is a 4 instead of a 2.
    pub four_probability: f64,

    /// Level that wins the game (11 = 2048).
    pub win_level: Level,

    pub loss_policy: LossPolicy,

    pub powerups: PowerupRules,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            initial_spawns: 2,
            four_probability: 0.1,
            win_level: 11,
            loss_policy: LossPolicy::Recoverable,
            powerups: PowerupRules::default(),
        }
    }
}

impl EngineConfig {
    /// Use a fixed spawn seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set how many tiles a restart spawns.
    #[must_use]
    pub fn with_initial_spawns(mut self, spawns: usize) -> Self {
        self.initial_spawns = spawns;
        self
    }

    /// Set the probability of spawning a 4.
    #[must_use]
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        self.four_probability = probability;
        self
    }

    #[must_use]
    pub fn with_win_level(mut self, level: Level) -> Self {
        self.win_level = level;
        self
    }

    #[must_use]
    pub fn with_loss_policy(mut self, policy: LossPolicy) -> Self {
        self.loss_policy = policy;
        self
    }

    #[must_use]
    pub fn with_powerup_rules(mut self, rules: PowerupRules) -> Self {
        self.powerups = rules;
        self
    }
}

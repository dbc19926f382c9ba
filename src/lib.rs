//! # cmd-2048
//!
//! A 2048 rule engine with a powerup economy (undo, swap, delete).
//!
//! ## Design Principles
//!
//! 1. **One engine**: the classic game is the engine with powerups in mode
//!    `Off`; there is no separate implementation.
//!
//! 2. **Pure resolution**: a move is resolved on a copy of the grid and only
//!    committed when it changed something, so probing legality never
//!    touches score, counters or history.
//!
//! 3. **Front ends hold their own state**: selection mode, cursor and pause
//!    live in `InputAdapter`, not in the engine.
//!
//! ## Modules
//!
//! - `core`: grid, tile labels, lifecycle state, powerups, history, session,
//!   RNG, configuration
//! - `rules`: slide resolution and `GameEngine`
//! - `present`: text rendering of a session
//! - `input`: key events and `InputAdapter`

pub mod core;
pub mod input;
pub mod present;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Coord, Direction, EngineConfig, GameSession, GameState, GameStatus, Grid, GridError, Level,
    LossPolicy, Powerup, PowerupMode, PowerupRules, Powerups, TileLabels, Uses,
};

pub use crate::rules::{resolve, GameEngine, PowerupError, Slide, SlideOutcome};

pub use crate::present::{format_playtime, render, Board};

pub use crate::input::{Feedback, InputAdapter, InputMode, Key, UnknownKey};

//! Core engine types: grid, tile labels, lifecycle state, powerups,
//! history, session, RNG, configuration.
//!
//! These are plain data types with no game flow of their own; the
//! `rules` module drives them.

pub mod config;
pub mod grid;
pub mod history;
pub mod powerups;
pub mod rng;
pub mod session;
pub mod state;
pub mod tiles;

pub use config::{EngineConfig, LossPolicy, PowerupMode, PowerupRules};
pub use grid::{Coord, Direction, Grid, GridError, Level, MAX_LEVEL, SIZE};
pub use history::{History, Snapshot};
pub use powerups::{Powerup, Powerups, Uses};
pub use rng::GameRng;
pub use session::GameSession;
pub use state::{GameState, GameStatus};
pub use tiles::TileLabels;

//! Game rules: slide-and-merge resolution and the engine that applies it.
//!
//! - `slide`: pure, non-mutating resolution of a directional move
//! - `engine`: `GameEngine`, which owns a session and applies moves,
//!   spawns, win/loss checks and powerups to it
//! - `error`: why a powerup call was refused

pub mod engine;
pub mod error;
pub mod slide;

pub use engine::GameEngine;
pub use error::PowerupError;
pub use slide::{resolve, Slide, SlideOutcome};

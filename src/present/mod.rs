//! Text presentation of a session.
//!
//! Nothing here mutates the engine; front ends print these strings after
//! every engine call.

pub mod board;
pub mod playtime;

pub use board::{render, Board};
pub use playtime::format_playtime;

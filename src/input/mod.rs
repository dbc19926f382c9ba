//! Keyboard front-end state.
//!
//! - `key`: abstract key events and the line-prompt token parser
//! - `adapter`: `InputAdapter`, which turns key events into engine calls
//!   and owns selection mode, cursor and pause state

pub mod adapter;
pub mod key;

pub use adapter::{Feedback, InputAdapter, InputMode};
pub use key::{Key, UnknownKey};

//! Rejection reasons for powerup operations.

use derive_more::{Display, Error};

use crate::core::Powerup;

/// Why an undo, swap or delete was refused. A refused call changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum PowerupError {
    /// The powerup's counter is at zero.
    #[display("no {_0} uses left")]
    NoUsesLeft(#[error(not(source))] Powerup),

    /// Undo was requested with nothing recorded to go back to.
    #[display("there is no move to undo")]
    NoHistory,

    /// Swap of two tiles with the same level.
    #[display("both tiles have the same value")]
    InvalidPair,

    /// A selected cell is empty or off the board.
    #[display("no tile at the selected cell")]
    InvalidTarget,

    /// The game is lost and the loss policy is final.
    #[display("the game is over")]
    GameOver,
}

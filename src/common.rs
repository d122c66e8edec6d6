//! Common types for Sea Battle: board errors and shot outcomes.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::coordinate::Coordinate;

/// Result of a shot that landed on a fresh cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Hit a vessel that still has undamaged segments.
    Hit,
    /// Hit the last undamaged segment of a vessel.
    Sunk,
    /// No vessel at the target.
    Miss,
}

impl ShotOutcome {
    /// Whether the shooter moves again.
    pub fn repeats_turn(self) -> bool {
        matches!(self, ShotOutcome::Hit)
    }
}

/// Errors returned by Grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Vessel would leave the board or touch an already placed vessel.
    InvalidPlacement(Coordinate),
    /// Placement attempted after the grid entered the play phase.
    PlacementClosed,
    /// Shot outside the board.
    OutOfBounds(Coordinate),
    /// Shot at a cell that was already shot or revealed.
    AlreadyShot(Coordinate),
    /// Random placement ran out of attempts for this grid.
    UnableToPlaceFleet,
    /// Underlying bitboard error.
    BitBoard(BitBoardError),
}

impl BoardError {
    /// Errors a shooter recovers from by picking another target.
    pub fn is_retryable_shot(&self) -> bool {
        matches!(self, BoardError::OutOfBounds(_) | BoardError::AlreadyShot(_))
    }
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoard(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidPlacement(c) => {
                write!(f, "vessel cannot be placed at {}", c)
            }
            BoardError::PlacementClosed => write!(f, "the grid no longer accepts vessels"),
            BoardError::OutOfBounds(c) => write!(f, "shot at {} is off the board, aim again", c),
            BoardError::AlreadyShot(c) => write!(f, "cell {} was already shot, aim again", c),
            BoardError::UnableToPlaceFleet => write!(f, "unable to place the fleet"),
            BoardError::BitBoard(e) => write!(f, "bitboard error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

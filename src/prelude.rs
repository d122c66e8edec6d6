//! Commonly used types and utilities for ease of import.

pub use crate::{
    AutomatedSource, BoardError, CellState, Combatant, Coordinate, FleetGenerator, Grid, Match,
    MatchOutcome, MoveSource, Orientation, ShotOutcome, Side, Vessel,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, render_boards, render_grid, ConsoleSource};

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod common;
mod config;
mod coordinate;
mod fleet;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
#[cfg(feature = "std")]
mod ui;
mod vessel;

pub use bitboard::{BitBoard, BitBoardError};
pub use common::*;
pub use config::*;
pub use coordinate::Coordinate;
pub use fleet::{random_grid, FleetGenerator};
pub use game::*;
pub use grid::{CellState, Grid, Mask};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::{Combatant, MoveSource, Shot};
pub use player_ai::AutomatedSource;
#[cfg(feature = "std")]
pub use player_cli::{parse_target, ConsoleSource};
#[cfg(feature = "std")]
pub use ui::{render_boards, render_grid};
pub use vessel::{Orientation, Vessel};

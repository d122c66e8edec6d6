//! Random fleet placement.

use rand::Rng;

use crate::common::BoardError;
use crate::config::{BOARD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::coordinate::Coordinate;
use crate::grid::Grid;
use crate::vessel::{Orientation, Vessel};

/// Builds grids holding the standard fleet at random positions.
///
/// A single attempt shares one placement budget across all vessels. When the
/// budget runs out the partially filled grid is thrown away and a fresh one is
/// started; a crowded board can dead-end, and starting over is cheaper than
/// backtracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetGenerator {
    max_attempts: usize,
}

impl Default for FleetGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl FleetGenerator {
    pub const fn new() -> Self {
        Self {
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }

    /// Use a custom per-grid budget. Budgets below the fleet size are raised
    /// to it, otherwise no attempt could ever succeed.
    pub const fn with_max_attempts(max_attempts: usize) -> Self {
        let max_attempts = if max_attempts < FLEET.len() {
            FLEET.len()
        } else {
            max_attempts
        };
        Self { max_attempts }
    }

    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// One grid-construction attempt. Returns a grid in the play phase, or
    /// `UnableToPlaceFleet` if the budget was exhausted.
    pub fn try_generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Grid, BoardError> {
        let mut grid = Grid::new();
        let mut attempts = 0;
        for &length in FLEET.iter() {
            loop {
                attempts += 1;
                if attempts > self.max_attempts {
                    return Err(BoardError::UnableToPlaceFleet);
                }
                let vessel = random_vessel(rng, length);
                match grid.place(vessel) {
                    Ok(()) => break,
                    Err(BoardError::InvalidPlacement(_)) => continue,
                    Err(e) => return Err(e),
                }
            }
        }
        grid.reset_for_play();
        log::debug!("fleet placed after {} attempts", attempts);
        Ok(grid)
    }

    /// Keep starting over with empty grids until the whole fleet fits.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Grid {
        let mut restarts = 0usize;
        loop {
            match self.try_generate(rng) {
                Ok(grid) => return grid,
                Err(e) => {
                    restarts += 1;
                    log::debug!("abandoning grid ({}), restart #{}", e, restarts);
                }
            }
        }
    }
}

/// Generate a grid with the standard budget.
pub fn random_grid<R: Rng + ?Sized>(rng: &mut R) -> Grid {
    FleetGenerator::new().generate(rng)
}

fn random_vessel<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Vessel {
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let bow = Coordinate::new(
        rng.random_range(0..BOARD_SIZE as i32),
        rng.random_range(0..BOARD_SIZE as i32),
    );
    Vessel::new(bow, length, orientation)
}

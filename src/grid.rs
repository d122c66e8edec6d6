//! One player's board: cell states, placed vessels and coordinate sets.

use alloc::vec::Vec;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, ShotOutcome};
use crate::config::BOARD_SIZE;
use crate::coordinate::Coordinate;
use crate::vessel::Vessel;

/// Coordinate set covering the whole board.
pub type Mask = BitBoard<u64, BOARD_SIZE>;

/// What a single cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Occupied,
    Miss,
    Hit,
    /// Revealed water around a sunk vessel.
    DestroyedMargin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Placement,
    Play,
}

/// A square board of `BOARD_SIZE` cells per side.
///
/// During the placement phase `placement_zone` holds every cell that is
/// occupied or touches an occupied cell, so no two vessels can touch, even
/// diagonally. Once [`Grid::reset_for_play`] is called the zone is dropped and
/// `shot_history` records every cell that can no longer be targeted.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: [[CellState; BOARD_SIZE]; BOARD_SIZE],
    vessels: Vec<Vessel>,
    placement_zone: Mask,
    shot_history: Mask,
    sunk: usize,
    concealed: bool,
    phase: Phase,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// An empty board in the placement phase.
    pub fn new() -> Self {
        Self {
            cells: [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE],
            vessels: Vec::new(),
            placement_zone: Mask::new(),
            shot_history: Mask::new(),
            sunk: 0,
            concealed: false,
            phase: Phase::Placement,
        }
    }

    pub const fn size(&self) -> usize {
        BOARD_SIZE
    }

    pub fn is_out_of_bounds(&self, c: Coordinate) -> bool {
        let n = BOARD_SIZE as i32;
        !((0..n).contains(&c.x) && (0..n).contains(&c.y))
    }

    /// Place `vessel`, reserving its cells and their surroundings.
    ///
    /// Fails without touching the grid if the length does not fit the board,
    /// or if any segment is off the board or inside the reserved zone.
    pub fn place(&mut self, vessel: Vessel) -> Result<(), BoardError> {
        if self.phase != Phase::Placement {
            return Err(BoardError::PlacementClosed);
        }
        if !(1..=BOARD_SIZE).contains(&vessel.length()) {
            return Err(BoardError::InvalidPlacement(vessel.bow()));
        }
        for c in vessel.cells() {
            if self.is_out_of_bounds(c) || self.placement_zone.contains(c) {
                return Err(BoardError::InvalidPlacement(c));
            }
        }

        let body = Mask::from_coords(vessel.cells())?;
        for c in body.iter() {
            self.set_cell(c, CellState::Occupied);
        }
        self.placement_zone |= body | Self::halo(&body);
        self.vessels.push(vessel);
        log::trace!("placed {:?} at {}", vessel.orientation(), vessel.bow());
        Ok(())
    }

    /// Leave the placement phase. The reserved zone is discarded and shot
    /// tracking starts from an empty set.
    pub fn reset_for_play(&mut self) {
        self.placement_zone.clear_all();
        self.shot_history.clear_all();
        self.phase = Phase::Play;
    }

    /// Fire at `c`.
    ///
    /// A rejected shot leaves the grid unchanged. An accepted one is recorded
    /// in the shot history before it is classified.
    pub fn shoot(&mut self, c: Coordinate) -> Result<ShotOutcome, BoardError> {
        if self.is_out_of_bounds(c) {
            return Err(BoardError::OutOfBounds(c));
        }
        if self.shot_history.contains(c) {
            return Err(BoardError::AlreadyShot(c));
        }
        self.shot_history.insert(c)?;

        let Some(idx) = self.vessels.iter().position(|v| v.occupies(c)) else {
            self.set_cell(c, CellState::Miss);
            log::trace!("shot at {}: miss", c);
            return Ok(ShotOutcome::Miss);
        };

        self.set_cell(c, CellState::Hit);
        if !self.vessels[idx].register_hit() {
            log::trace!("shot at {}: hit", c);
            return Ok(ShotOutcome::Hit);
        }

        self.sunk += 1;
        let body = Mask::from_coords(self.vessels[idx].cells())?;
        let revealed = Self::halo(&body) & !self.shot_history;
        for m in revealed.iter() {
            self.set_cell(m, CellState::DestroyedMargin);
        }
        self.shot_history |= revealed;
        log::trace!("shot at {}: sunk, {} vessels down", c, self.sunk);
        Ok(ShotOutcome::Sunk)
    }

    /// State of the cell at `c`, or `None` off the board.
    pub fn cell(&self, c: Coordinate) -> Option<CellState> {
        if self.is_out_of_bounds(c) {
            return None;
        }
        Some(self.cells[c.y as usize][c.x as usize])
    }

    /// All cells, indexed `[y][x]`.
    pub fn rows(&self) -> &[[CellState; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Number of vessels with no undamaged segment left.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// `true` once at least one vessel is placed and every vessel is sunk.
    pub fn all_sunk(&self) -> bool {
        !self.vessels.is_empty() && self.sunk == self.vessels.len()
    }

    /// Whether occupied cells are hidden from display.
    pub fn is_concealed(&self) -> bool {
        self.concealed
    }

    pub fn set_concealed(&mut self, concealed: bool) {
        self.concealed = concealed;
    }

    /// Cells reserved during placement.
    pub fn placement_zone(&self) -> Mask {
        self.placement_zone
    }

    /// Cells that can no longer be targeted.
    pub fn shot_history(&self) -> Mask {
        self.shot_history
    }

    /// Whether the grid has left the placement phase.
    pub fn in_play(&self) -> bool {
        self.phase == Phase::Play
    }

    fn set_cell(&mut self, c: Coordinate, state: CellState) {
        self.cells[c.y as usize][c.x as usize] = state;
    }

    /// On-board cells touching `body` but not part of it.
    fn halo(body: &Mask) -> Mask {
        let mut around = Mask::new();
        for c in body.iter() {
            for n in c.neighbours() {
                // off-board neighbours are simply skipped
                let _ = around.insert(n);
            }
        }
        around & !*body
    }
}

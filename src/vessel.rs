//! Vessel geometry and damage tracking.

use crate::coordinate::Coordinate;

/// Orientation of a vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends along `x` from the bow.
    Horizontal,
    /// Extends along `y` from the bow.
    Vertical,
}

impl Orientation {
    /// Unit step from one segment to the next.
    pub const fn axis(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// A straight vessel of `length` segments starting at `bow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    bow: Coordinate,
    length: usize,
    orientation: Orientation,
    remaining: usize,
}

impl Vessel {
    /// A new, undamaged vessel. Geometry is validated by the grid on placement.
    pub const fn new(bow: Coordinate, length: usize, orientation: Orientation) -> Self {
        Self {
            bow,
            length,
            orientation,
            remaining: length,
        }
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Segments not yet hit.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_sunk(&self) -> bool {
        self.remaining == 0
    }

    /// Occupied coordinates, from the bow outward. Stops early if a segment
    /// would leave the `i32` range.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let (dx, dy) = self.orientation.axis();
        let bow = self.bow;
        let len = i32::try_from(self.length).unwrap_or(i32::MAX);
        (0..len).map_while(move |i| {
            Some(Coordinate::new(
                bow.x.checked_add(dx * i)?,
                bow.y.checked_add(dy * i)?,
            ))
        })
    }

    /// Whether `c` is one of this vessel's segments.
    pub fn occupies(&self, c: Coordinate) -> bool {
        self.cells().any(|cell| cell == c)
    }

    /// Record a hit on one segment. Returns `true` when this sinks the vessel.
    pub(crate) fn register_hit(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }
}

//! Board coordinates.

use core::fmt;

/// Offsets of the eight cells surrounding a coordinate.
const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A point on the grid. `x` is the column, `y` the row.
///
/// Coordinates are signed so that off-board candidates (a bow sampled past the
/// edge, the neighbours of an edge cell) can be represented and rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This coordinate shifted by `(dx, dy)`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The eight surrounding coordinates, diagonals included. Some of them may
    /// lie outside the board.
    pub fn neighbours(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBOUR_OFFSETS
            .into_iter()
            .map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// Chebyshev distance between two coordinates.
    pub fn distance(self, other: Coordinate) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Side length of every board.
pub const BOARD_SIZE: usize = 6;

/// Number of vessels in a fleet; sinking this many ends the match.
pub const FLEET_SIZE: usize = 7;

/// Vessel lengths, in placement order.
pub const FLEET: [usize; FLEET_SIZE] = [3, 2, 2, 1, 1, 1, 1];

/// Placement attempts allowed for one grid before it is abandoned.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;

/// Total number of vessel segments in the standard fleet.
pub const TOTAL_FLEET_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

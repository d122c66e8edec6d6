use alloc::boxed::Box;
use rand::rngs::SmallRng;

use crate::{
    common::{BoardError, ShotOutcome},
    coordinate::Coordinate,
    grid::Grid,
};

/// Something that picks shot targets: a person at the console or the
/// computer.
pub trait MoveSource {
    /// Choose the next target on the opponent's board. `None` means the
    /// source has no more moves to give (for example, its input closed).
    fn produce_target(&mut self, rng: &mut SmallRng) -> Option<Coordinate>;

    /// Inform the source that its last target was rejected.
    fn handle_shot_error(&mut self, _target: Coordinate, _error: BoardError) {}

    /// Inform the source of the outcome of an accepted shot.
    fn handle_outcome(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}
}

/// An accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub target: Coordinate,
    pub outcome: ShotOutcome,
}

impl Shot {
    /// Whether the shooter moves again.
    pub fn repeats_turn(&self) -> bool {
        self.outcome.repeats_turn()
    }
}

/// A participant in a match: a move source plus the board it defends.
pub struct Combatant {
    source: Box<dyn MoveSource>,
    board: Grid,
}

impl Combatant {
    pub fn new(source: Box<dyn MoveSource>, board: Grid) -> Self {
        Self { source, board }
    }

    /// The board this combatant defends.
    pub fn board(&self) -> &Grid {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Grid {
        &mut self.board
    }

    /// Ask the source for targets until one is accepted by `target`.
    ///
    /// Off-board and repeated shots are reported back to the source and a new
    /// target is requested. Returns `None` if the source runs dry.
    pub fn take_turn(&mut self, rng: &mut SmallRng, target: &mut Grid) -> Option<Shot> {
        loop {
            let coord = self.source.produce_target(rng)?;
            match target.shoot(coord) {
                Ok(outcome) => {
                    self.source.handle_outcome(coord, outcome);
                    return Some(Shot {
                        target: coord,
                        outcome,
                    });
                }
                Err(e) => {
                    log::debug!("shot at {} rejected: {}", coord, e);
                    self.source.handle_shot_error(coord, e);
                }
            }
        }
    }
}

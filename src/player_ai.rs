use rand::{rngs::SmallRng, Rng};

use crate::{config::BOARD_SIZE, coordinate::Coordinate, player::MoveSource};

/// Computer opponent that fires uniformly at random.
///
/// It keeps no memory of earlier shots; repeats are rejected by the target
/// grid and the combatant simply asks again.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutomatedSource;

impl AutomatedSource {
    pub fn new() -> Self {
        Self
    }
}

impl MoveSource for AutomatedSource {
    fn produce_target(&mut self, rng: &mut SmallRng) -> Option<Coordinate> {
        let n = BOARD_SIZE as i32;
        Some(Coordinate::new(rng.random_range(0..n), rng.random_range(0..n)))
    }
}

//! Match controller: alternates turns and decides the winner.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use rand::rngs::SmallRng;

use crate::{
    common::ShotOutcome,
    config::FLEET_SIZE,
    coordinate::Coordinate,
    fleet::FleetGenerator,
    grid::Grid,
    player::{Combatant, MoveSource},
};

/// Which combatant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Human,
    Computer,
}

/// How a finished match ended. There is no draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchOutcome {
    HumanWins,
    ComputerWins,
}

impl MatchOutcome {
    pub fn winner(self) -> Side {
        match self {
            MatchOutcome::HumanWins => Side::Human,
            MatchOutcome::ComputerWins => Side::Computer,
        }
    }
}

/// One accepted shot in the match log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotRecord {
    pub side: Side,
    pub target: Coordinate,
    pub outcome: ShotOutcome,
}

/// Errors that stop a match before it has a winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    /// A combatant's move source stopped producing targets.
    SourceExhausted(Side),
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::SourceExhausted(side) => {
                write!(f, "{:?} player stopped providing moves", side)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatchError {}

/// Lost once the full fleet is sunk, or everything on a smaller board is.
fn fleet_lost(board: &Grid) -> bool {
    board.sunk_count() >= FLEET_SIZE || board.all_sunk()
}

/// Drives a human-side and a computer-side combatant until one fleet is gone.
///
/// The human side moves first. A hit that does not sink keeps the turn with
/// the shooter.
pub struct Match {
    human: Combatant,
    computer: Combatant,
    turn: usize,
    history: Vec<ShotRecord>,
    outcome: Option<MatchOutcome>,
}

impl Match {
    pub fn new(human: Combatant, computer: Combatant) -> Self {
        Self {
            human,
            computer,
            turn: 0,
            history: Vec::new(),
            outcome: None,
        }
    }

    /// Build both boards with the fleet generator. The computer's board is
    /// concealed.
    pub fn with_random_fleets(
        human: Box<dyn MoveSource>,
        computer: Box<dyn MoveSource>,
        rng: &mut SmallRng,
    ) -> Self {
        let generator = FleetGenerator::new();
        let human_board = generator.generate(rng);
        let mut computer_board = generator.generate(rng);
        computer_board.set_concealed(true);
        Self::new(
            Combatant::new(human, human_board),
            Combatant::new(computer, computer_board),
        )
    }

    /// Side whose move comes next.
    pub fn to_move(&self) -> Side {
        if self.turn % 2 == 0 {
            Side::Human
        } else {
            Side::Computer
        }
    }

    /// Turn index; only advances when the turn passes to the other side.
    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    pub fn history(&self) -> &[ShotRecord] {
        &self.history
    }

    pub fn human(&self) -> &Combatant {
        &self.human
    }

    pub fn computer(&self) -> &Combatant {
        &self.computer
    }

    /// Play a single move. Returns the outcome once the match is decided;
    /// stepping a decided match does nothing.
    pub fn step(&mut self, rng: &mut SmallRng) -> Result<Option<MatchOutcome>, MatchError> {
        if self.outcome.is_some() {
            return Ok(self.outcome);
        }

        let side = self.to_move();
        let shot = match side {
            Side::Human => self.human.take_turn(rng, self.computer.board_mut()),
            Side::Computer => self.computer.take_turn(rng, self.human.board_mut()),
        }
        .ok_or(MatchError::SourceExhausted(side))?;

        self.history.push(ShotRecord {
            side,
            target: shot.target,
            outcome: shot.outcome,
        });
        if !shot.repeats_turn() {
            self.turn += 1;
        }

        self.outcome = if fleet_lost(self.computer.board()) {
            Some(MatchOutcome::HumanWins)
        } else if fleet_lost(self.human.board()) {
            Some(MatchOutcome::ComputerWins)
        } else {
            None
        };
        if let Some(outcome) = self.outcome {
            log::info!(
                "match over after {} shots: {:?}",
                self.history.len(),
                outcome
            );
        }
        Ok(self.outcome)
    }

    /// Step until one side has lost its whole fleet.
    pub fn play(&mut self, rng: &mut SmallRng) -> Result<MatchOutcome, MatchError> {
        loop {
            if let Some(outcome) = self.step(rng)? {
                return Ok(outcome);
            }
        }
    }

    /// Accepted shots fired by `side`.
    pub fn shots_by(&self, side: Side) -> usize {
        self.history.iter().filter(|r| r.side == side).count()
    }
}

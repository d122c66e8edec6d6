use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{
    AutomatedSource, BoardError, Combatant, Coordinate, Grid, Match, MatchError, MatchOutcome,
    MoveSource, Orientation, ShotOutcome, Side, Vessel, FLEET_SIZE,
};

/// Fires at a fixed list of targets and records rejections.
struct Script {
    targets: VecDeque<Coordinate>,
    errors: Rc<RefCell<Vec<BoardError>>>,
}

impl Script {
    fn new(targets: &[(i32, i32)]) -> Self {
        Self {
            targets: targets.iter().map(|&t| Coordinate::from(t)).collect(),
            errors: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl MoveSource for Script {
    fn produce_target(&mut self, _rng: &mut SmallRng) -> Option<Coordinate> {
        self.targets.pop_front()
    }

    fn handle_shot_error(&mut self, _target: Coordinate, error: BoardError) {
        self.errors.borrow_mut().push(error);
    }
}

/// Vessel cells of `fixed_grid`, grouped so each group sinks one vessel.
const VESSEL_CELLS: [(i32, i32); 11] = [
    (0, 0),
    (1, 0),
    (2, 0),
    (4, 0),
    (4, 1),
    (0, 2),
    (1, 2),
    (3, 3),
    (0, 4),
    (5, 3),
    (2, 5),
];

const EMPTY_CELLS: [(i32, i32); 7] = [(5, 0), (3, 0), (5, 1), (0, 1), (2, 2), (5, 5), (4, 5)];

fn fixed_grid() -> Grid {
    let mut grid = Grid::new();
    let layout = [
        ((0, 0), 3, Orientation::Horizontal),
        ((4, 0), 2, Orientation::Vertical),
        ((0, 2), 2, Orientation::Horizontal),
        ((3, 3), 1, Orientation::Horizontal),
        ((0, 4), 1, Orientation::Horizontal),
        ((5, 3), 1, Orientation::Vertical),
        ((2, 5), 1, Orientation::Vertical),
    ];
    for (bow, len, orient) in layout {
        grid.place(Vessel::new(Coordinate::from(bow), len, orient)).unwrap();
    }
    grid.reset_for_play();
    grid
}

fn scripted_match(human: Script, computer: Script) -> Match {
    Match::new(
        Combatant::new(Box::new(human), fixed_grid()),
        Combatant::new(Box::new(computer), fixed_grid()),
    )
}

#[test]
fn test_fixed_grid_holds_full_fleet() {
    assert_eq!(fixed_grid().vessels().len(), FLEET_SIZE);
}

#[test]
fn test_human_wins_by_sinking_everything() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut game = scripted_match(
        Script::new(&VESSEL_CELLS),
        Script::new(&EMPTY_CELLS[..6]),
    );
    let outcome = game.play(&mut rng).unwrap();
    assert_eq!(outcome, MatchOutcome::HumanWins);
    assert_eq!(outcome.winner(), Side::Human);
    assert_eq!(game.computer().board().sunk_count(), FLEET_SIZE);
    assert_eq!(game.human().board().sunk_count(), 0);
    assert_eq!(game.shots_by(Side::Human), 11);
    assert_eq!(game.shots_by(Side::Computer), 6);
    // every human turn ends with a sink, every computer turn with a miss
    assert_eq!(game.turn(), 13);
}

#[test]
fn test_computer_wins() {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut game = scripted_match(
        Script::new(&EMPTY_CELLS),
        Script::new(&VESSEL_CELLS),
    );
    assert_eq!(game.play(&mut rng), Ok(MatchOutcome::ComputerWins));
    assert_eq!(game.human().board().sunk_count(), FLEET_SIZE);
    assert!(game.computer().board().sunk_count() < FLEET_SIZE);
}

#[test]
fn test_hit_keeps_turn_and_miss_passes_it() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut game = scripted_match(Script::new(&[(0, 0), (5, 5)]), Script::new(&[(5, 5)]));
    assert_eq!(game.to_move(), Side::Human);

    assert_eq!(game.step(&mut rng), Ok(None));
    assert_eq!(game.history()[0].outcome, ShotOutcome::Hit);
    assert_eq!(game.to_move(), Side::Human);
    assert_eq!(game.turn(), 0);

    assert_eq!(game.step(&mut rng), Ok(None));
    assert_eq!(game.history()[1].outcome, ShotOutcome::Miss);
    assert_eq!(game.to_move(), Side::Computer);

    assert_eq!(game.step(&mut rng), Ok(None));
    assert_eq!(game.history()[2].side, Side::Computer);
    assert_eq!(game.to_move(), Side::Human);
}

#[test]
fn test_rejected_targets_are_reported_and_retried() {
    let mut rng = SmallRng::seed_from_u64(4);
    let script = Script::new(&[(-1, 0), (6, 6), (5, 5), (5, 5), (4, 4)]);
    let errors = Rc::clone(&script.errors);
    let mut shooter = Combatant::new(Box::new(script), Grid::new());
    let mut target = fixed_grid();

    let shot = shooter.take_turn(&mut rng, &mut target).unwrap();
    assert_eq!(shot.target, Coordinate::new(5, 5));
    assert_eq!(shot.outcome, ShotOutcome::Miss);
    assert!(!shot.repeats_turn());

    let shot = shooter.take_turn(&mut rng, &mut target).unwrap();
    assert_eq!(shot.target, Coordinate::new(4, 4));

    let errors = errors.borrow();
    assert_eq!(
        *errors,
        vec![
            BoardError::OutOfBounds(Coordinate::new(-1, 0)),
            BoardError::OutOfBounds(Coordinate::new(6, 6)),
            BoardError::AlreadyShot(Coordinate::new(5, 5)),
        ]
    );
    assert!(errors.iter().all(|e| e.is_retryable_shot()));
}

#[test]
fn test_exhausted_source_stops_match() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut game = scripted_match(Script::new(&[(5, 5)]), Script::new(&[]));
    assert_eq!(game.step(&mut rng), Ok(None));
    assert_eq!(
        game.step(&mut rng),
        Err(MatchError::SourceExhausted(Side::Computer))
    );
    assert_eq!(game.outcome(), None);
}

#[test]
fn test_finished_match_does_not_move() {
    let mut rng = SmallRng::seed_from_u64(6);
    let mut game = scripted_match(
        Script::new(&VESSEL_CELLS),
        Script::new(&EMPTY_CELLS[..6]),
    );
    game.play(&mut rng).unwrap();
    let shots = game.history().len();
    assert_eq!(game.step(&mut rng), Ok(Some(MatchOutcome::HumanWins)));
    assert_eq!(game.history().len(), shots);
}

fn single_vessel_grid() -> Grid {
    let mut grid = Grid::new();
    grid.place(Vessel::new(Coordinate::new(2, 2), 1, Orientation::Horizontal)).unwrap();
    grid.reset_for_play();
    grid
}

#[test]
fn test_small_board_is_lost_when_everything_sinks() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut game = Match::new(
        Combatant::new(Box::new(Script::new(&[(2, 2)])), fixed_grid()),
        Combatant::new(Box::new(Script::new(&[])), single_vessel_grid()),
    );
    assert_eq!(game.step(&mut rng), Ok(Some(MatchOutcome::HumanWins)));

    let mut game = Match::new(
        Combatant::new(Box::new(Script::new(&[(5, 5)])), single_vessel_grid()),
        Combatant::new(Box::new(Script::new(&[(2, 2)])), fixed_grid()),
    );
    assert_eq!(game.play(&mut rng), Ok(MatchOutcome::ComputerWins));
    assert!(game.human().board().all_sunk());
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_automated_match_runs_to_completion() {
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = Match::with_random_fleets(
            Box::new(AutomatedSource::new()),
            Box::new(AutomatedSource::new()),
            &mut rng,
        );
        assert!(game.computer().board().is_concealed());
        assert!(!game.human().board().is_concealed());

        let outcome = game.play(&mut rng).unwrap();
        let (winner, loser) = match outcome {
            MatchOutcome::HumanWins => (game.human(), game.computer()),
            MatchOutcome::ComputerWins => (game.computer(), game.human()),
        };
        assert_eq!(loser.board().sunk_count(), FLEET_SIZE);
        assert!(winner.board().sunk_count() < FLEET_SIZE);
        assert!(game.history().len() <= 2 * 36);
    }
}

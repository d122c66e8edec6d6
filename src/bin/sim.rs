use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{random_grid, AutomatedSource, Combatant, Match, Side};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut fleet_rng = SmallRng::seed_from_u64(seed1);
    let mut play_rng = SmallRng::seed_from_u64(seed2);

    let human_board = random_grid(&mut fleet_rng);
    let mut computer_board = random_grid(&mut fleet_rng);
    computer_board.set_concealed(true);

    let mut game = Match::new(
        Combatant::new(Box::new(AutomatedSource::new()), human_board),
        Combatant::new(Box::new(AutomatedSource::new()), computer_board),
    );
    let outcome = game.play(&mut play_rng)?;

    let result = json!({
        "winner": outcome,
        "turns": game.turn(),
        "shots": {
            "human": game.shots_by(Side::Human),
            "computer": game.shots_by(Side::Computer),
        },
        "sunk": {
            "human": game.human().board().sunk_count(),
            "computer": game.computer().board().sunk_count(),
        },
        "history": game.history(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

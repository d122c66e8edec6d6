#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use sea_battle::{
    init_logging, render_boards, AutomatedSource, ConsoleSource, Match, MatchOutcome, MoveSource,
    Side,
};

#[derive(Parser)]
#[command(author, version, about = "Sea battle against the computer", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer on this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch the computer play against itself.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn greet() {
    println!("*******************************************************");
    println!("*                      SEA BATTLE                     *");
    println!("*******************************************************");
    println!("*  Enter your shots as two numbers separated by a     *");
    println!("*  space: the column first, then the row.             *");
    println!("*******************************************************");
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let (human, seed) = match cli.command {
        Commands::Play { seed } => {
            greet();
            (Box::new(ConsoleSource::stdio()) as Box<dyn MoveSource>, seed)
        }
        Commands::Auto { seed } => (Box::new(AutomatedSource::new()) as Box<dyn MoveSource>, seed),
    };
    let mut rng = make_rng(seed);
    let mut game = Match::with_random_fleets(human, Box::new(AutomatedSource::new()), &mut rng);

    let outcome = loop {
        println!("{}", render_boards(&game));
        match game.to_move() {
            Side::Human => println!("Your move!"),
            Side::Computer => println!("The computer is moving!"),
        }
        let before = game.history().len();
        let step = game.step(&mut rng)?;
        if let Some(record) = game.history().get(before) {
            if record.side == Side::Computer {
                println!(
                    "Computer fires at {} {}: {:?}",
                    record.target.x + 1,
                    record.target.y + 1,
                    record.outcome
                );
            }
        }
        if let Some(outcome) = step {
            break outcome;
        }
    };

    println!("{}", render_boards(&game));
    println!("{}", "-".repeat(30));
    match outcome {
        MatchOutcome::HumanWins => println!("You won!"),
        MatchOutcome::ComputerWins => println!("You lost... the computer won. Try again!"),
    }
    Ok(())
}

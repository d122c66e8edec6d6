#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use rand::rngs::SmallRng;

use crate::{
    common::{BoardError, ShotOutcome},
    config::BOARD_SIZE,
    coordinate::Coordinate,
    player::MoveSource,
};

/// Parse a target typed as two 1-based numbers, column then row (`"3 5"`).
///
/// Only the shape of the input is checked here; whether the cell is on the
/// board is for the grid to decide.
pub fn parse_target(input: &str) -> Result<Coordinate, String> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() != 2 {
        return Err("Enter two numbers: column and row".to_string());
    }
    let x: i32 = parts[0]
        .parse()
        .map_err(|_| format!("'{}' is not a number", parts[0]))?;
    let y: i32 = parts[1]
        .parse()
        .map_err(|_| format!("'{}' is not a number", parts[1]))?;
    match (x.checked_sub(1), y.checked_sub(1)) {
        (Some(x), Some(y)) => Ok(Coordinate::new(x, y)),
        _ => Err(format!("'{}' is out of range", input.trim())),
    }
}

fn describe(c: Coordinate) -> String {
    format!("{} {}", c.x + 1, c.y + 1)
}

/// Human player reading targets from a line-based input.
pub struct ConsoleSource<R, W> {
    input: R,
    output: W,
}

impl ConsoleSource<StdinLock<'static>, Stdout> {
    /// Read from stdin, write prompts to stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the source, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, line: &str) {
        // a broken terminal must not abort the game loop
        let _ = writeln!(self.output, "{}", line);
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsoleSource<R, W> {
    fn produce_target(&mut self, _rng: &mut SmallRng) -> Option<Coordinate> {
        loop {
            let _ = write!(self.output, "Your move (column row, 1-{}): ", BOARD_SIZE);
            let _ = self.output.flush();
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }
            match parse_target(line.trim()) {
                Ok(c) => return Some(c),
                Err(msg) => self.say(&msg),
            }
        }
    }

    fn handle_shot_error(&mut self, _target: Coordinate, error: BoardError) {
        let msg = error.to_string();
        self.say(&msg);
    }

    fn handle_outcome(&mut self, target: Coordinate, outcome: ShotOutcome) {
        let msg = match outcome {
            ShotOutcome::Hit => "hit! The vessel is damaged, shoot again.",
            ShotOutcome::Sunk => "hit! The vessel is destroyed.",
            ShotOutcome::Miss => "miss.",
        };
        let line = format!("{} -> {}", describe(target), msg);
        self.say(&line);
    }
}

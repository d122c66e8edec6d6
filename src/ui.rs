#![cfg(feature = "std")]

//! Text rendering of boards for the console.

use std::fmt::Write;

use crate::{
    config::BOARD_SIZE,
    game::Match,
    grid::{CellState, Grid},
};

fn symbol(state: CellState, concealed: bool) -> char {
    match state {
        CellState::Empty => 'O',
        CellState::Occupied if concealed => 'O',
        CellState::Occupied => '■',
        CellState::Hit => 'X',
        CellState::Miss | CellState::DestroyedMargin => 'T',
    }
}

/// Render a board with 1-based column headers and row labels. Occupied
/// cells are hidden when the grid is concealed.
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::from(" ");
    for c in 0..BOARD_SIZE {
        let _ = write!(out, " | {}", c + 1);
    }
    out.push_str(" |");
    for (r, row) in grid.rows().iter().enumerate() {
        let _ = write!(out, "\n{}", r + 1);
        for &state in row.iter() {
            let _ = write!(out, " | {}", symbol(state, grid.is_concealed()));
        }
        out.push_str(" |");
    }
    out
}

/// Both boards of a match, the human's first.
pub fn render_boards(game: &Match) -> String {
    let rule = "-".repeat(30);
    format!(
        "{rule}\nYour board:\n{}\n{rule}\nComputer board:\n{}",
        render_grid(game.human().board()),
        render_grid(game.computer().board()),
    )
}

//! Word reveal view

use crate::core::{Letter, Word};

/// How one character of the target word is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Hidden,
    /// The player guessed this letter
    Guessed,
    /// Shown only because the game ended without it being guessed
    Revealed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub letter: Letter,
    pub state: CellState,
}

impl Cell {
    #[must_use]
    pub const fn is_visible(self) -> bool {
        !matches!(self.state, CellState::Hidden)
    }
}

/// One cell per character of `word`, in order
#[must_use]
pub fn render(word: &Word, guessed: &[Letter], game_over: bool) -> Vec<Cell> {
    word.letters()
        .map(|letter| {
            let state = if guessed.contains(&letter) {
                CellState::Guessed
            } else if game_over {
                CellState::Revealed
            } else {
                CellState::Hidden
            };
            Cell { letter, state }
        })
        .collect()
}

/// Text form such as `c _ t`
#[must_use]
pub fn masked(cells: &[Cell]) -> String {
    cells
        .iter()
        .map(|cell| {
            if cell.is_visible() {
                cell.letter.as_char()
            } else {
                '_'
            }
        })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

//! Formatting utilities for terminal output

use crate::core::GameState;
use crate::views::keyboard::{self, KeyState};
use crate::views::word::{self, CellState};
use colored::Colorize;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Word with guessed letters shown and the rest masked, e.g. `C _ T`
#[must_use]
pub fn masked_word(state: &GameState) -> String {
    let cells = word::render(state.word(), state.guessed(), state.is_over());
    word::masked(&cells).to_uppercase()
}

/// Masked word with color: guessed letters green, letters revealed by a loss red
#[must_use]
pub fn colored_word(state: &GameState) -> String {
    word::render(state.word(), state.guessed(), state.is_over())
        .iter()
        .map(|cell| {
            let ch = cell.letter.as_char().to_ascii_uppercase().to_string();
            match cell.state {
                CellState::Hidden => "_".bright_black().to_string(),
                CellState::Guessed => ch.green().bold().to_string(),
                CellState::Revealed => ch.red().bold().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keyboard rows with each key colored by its state
#[must_use]
pub fn colored_keyboard(state: &GameState) -> Vec<String> {
    keyboard::layout(state)
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: Vec<String> = row
                .iter()
                .map(|key| {
                    let ch = key.letter.as_char().to_ascii_uppercase().to_string();
                    match key.state {
                        KeyState::Unused => ch.normal().to_string(),
                        KeyState::CorrectGuess => ch.green().to_string(),
                        KeyState::WrongGuess => ch.red().strikethrough().to_string(),
                    }
                })
                .collect();
            format!("{}{}", " ".repeat(i), keys.join(" "))
        })
        .collect()
}

/// Wrong guesses so far, e.g. `Q, X`
#[must_use]
pub fn wrong_letters(state: &GameState) -> String {
    state
        .wrong_letters()
        .map(|l| l.as_char().to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

//! On-screen keyboard view
//!
//! Classifies each key by what the player has learned about it and routes
//! selections into the engine. Disabled keys never reach the engine.

use crate::core::{GameState, Letter, Word, submit_guess};

/// QWERTY rows as shown on screen
pub const ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Visual feedback for one key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Unused,
    CorrectGuess,
    WrongGuess,
}

/// A key together with its feedback and whether it can still be pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub letter: Letter,
    pub state: KeyState,
    pub enabled: bool,
}

#[must_use]
pub fn classify(letter: Letter, guessed: &[Letter], word: &Word) -> KeyState {
    if !guessed.contains(&letter) {
        KeyState::Unused
    } else if word.has_letter(letter) {
        KeyState::CorrectGuess
    } else {
        KeyState::WrongGuess
    }
}

/// Whether selecting `letter` would do anything
#[must_use]
pub fn is_enabled(state: &GameState, letter: Letter) -> bool {
    !state.is_over() && !state.has_guessed(letter)
}

/// Route a key press into the engine
///
/// Returns `None` for a disabled key, otherwise the next game state.
///
/// # Examples
/// ```
/// use hangman::core::{GameState, Letter, Word};
/// use hangman::views::keyboard::select_letter;
/// use hangman::wordlists::Category;
///
/// let state = GameState::new(Word::new("dog").unwrap(), Category::Animals);
/// let d = Letter::new('d').unwrap();
///
/// let next = select_letter(&state, d).unwrap();
/// assert!(select_letter(&next, d).is_none());
/// ```
#[must_use]
pub fn select_letter(state: &GameState, letter: Letter) -> Option<GameState> {
    is_enabled(state, letter).then(|| submit_guess(state, letter))
}

/// The full keyboard for the current state, row by row
#[must_use]
pub fn layout(state: &GameState) -> Vec<Vec<Key>> {
    ROWS.iter()
        .map(|row| {
            row.bytes()
                .map(Letter::from_byte_unchecked)
                .map(|letter| Key {
                    letter,
                    state: classify(letter, state.guessed(), state.word()),
                    enabled: is_enabled(state, letter),
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Category;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    fn game(word: &str, guesses: &str) -> GameState {
        guesses.chars().fold(
            GameState::new(Word::new(word).unwrap(), Category::Countries),
            |s, c| submit_guess(&s, letter(c)),
        )
    }

    #[test]
    fn classify_three_states() {
        let state = game("japan", "jz");
        let word = state.word();
        assert_eq!(classify(letter('j'), state.guessed(), word), KeyState::CorrectGuess);
        assert_eq!(classify(letter('z'), state.guessed(), word), KeyState::WrongGuess);
        assert_eq!(classify(letter('a'), state.guessed(), word), KeyState::Unused);
    }

    #[test]
    fn guessed_key_disabled() {
        let state = game("japan", "j");
        assert!(!is_enabled(&state, letter('j')));
        assert!(is_enabled(&state, letter('a')));
        assert!(select_letter(&state, letter('j')).is_none());
    }

    #[test]
    fn every_key_disabled_when_over() {
        let state = game("india", "ndia");
        assert!(state.is_over());
        assert!(Letter::all().all(|l| select_letter(&state, l).is_none()));
    }

    #[test]
    fn enabled_key_applies_guess() {
        let state = game("india", "");
        let next = select_letter(&state, letter('q')).unwrap();
        assert_eq!(next.wrong_count(), 1);
    }

    #[test]
    fn layout_covers_alphabet_once() {
        let keys: Vec<Key> = layout(&game("brazil", "")).into_iter().flatten().collect();
        assert_eq!(keys.len(), 26);

        let mut letters: Vec<Letter> = keys.iter().map(|k| k.letter).collect();
        letters.sort();
        letters.dedup();
        assert_eq!(letters.len(), 26);
    }

    #[test]
    fn layout_reflects_guesses() {
        let rows = layout(&game("brazil", "bq"));
        let find = |c: char| {
            rows.iter()
                .flatten()
                .find(|k| k.letter == letter(c))
                .copied()
                .unwrap()
        };

        assert_eq!(find('b').state, KeyState::CorrectGuess);
        assert!(!find('b').enabled);
        assert_eq!(find('q').state, KeyState::WrongGuess);
        assert_eq!(find('r').state, KeyState::Unused);
        assert!(find('r').enabled);
    }

    #[test]
    fn row_shapes() {
        let rows = layout(&game("france", ""));
        let lengths: Vec<usize> = rows.iter().map(Vec::len).collect();
        assert_eq!(lengths, [10, 9, 7]);
    }
}

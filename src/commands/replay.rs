//! Replay command
//!
//! Plays a fixed sequence of letters against a known word and records every step.

use crate::core::{GameEvent, GameState, Letter, MAX_ATTEMPTS, Outcome, Word, submit_guess, transition_events};
use crate::output::formatters::masked_word;
use crate::wordlists::Category;

/// Configuration for replaying a game
pub struct ReplayConfig {
    pub word: String,
    pub letters: String,
    pub category: Category,
}

impl ReplayConfig {
    #[must_use]
    pub fn new(word: String, letters: String) -> Self {
        Self {
            word,
            letters,
            category: Category::default(),
        }
    }
}

/// Result of a replayed game
pub struct ReplayResult {
    pub word: String,
    pub category: Category,
    pub max_attempts: usize,
    pub steps: Vec<ReplayStep>,
    pub outcome: Outcome,
}

/// A single guess in the replay
pub struct ReplayStep {
    pub letter: char,
    /// False when the guess was ignored (repeat, or game already over)
    pub accepted: bool,
    pub hit: bool,
    pub masked: String,
    pub wrong_count: usize,
    pub outcome: Outcome,
    pub events: Vec<GameEvent>,
}

/// Replay `config.letters` against `config.word`
///
/// Whitespace and commas between letters are ignored.
///
/// # Errors
///
/// Returns an error if the word is invalid or a guess is not a letter.
pub fn replay_game(config: ReplayConfig) -> Result<ReplayResult, String> {
    let word = Word::new(&config.word).map_err(|e| format!("Invalid word: {e}"))?;

    let letters = config
        .letters
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| Letter::new(c).map_err(|e| format!("Invalid guess: {e}")))
        .collect::<Result<Vec<_>, _>>()?;

    let mut state = GameState::new(word, config.category);
    let mut steps = Vec::with_capacity(letters.len());

    for letter in letters {
        let next = submit_guess(&state, letter);
        let events = transition_events(&state, &next);

        steps.push(ReplayStep {
            letter: letter.as_char(),
            accepted: !events.is_empty(),
            hit: events.contains(&GameEvent::Hit(letter)),
            masked: masked_word(&next),
            wrong_count: next.wrong_count(),
            outcome: next.outcome(),
            events,
        });

        state = next;
    }

    Ok(ReplayResult {
        word: state.word().text().to_string(),
        category: config.category,
        max_attempts: MAX_ATTEMPTS,
        steps,
        outcome: state.outcome(),
    })
}

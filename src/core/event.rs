//! Notifications derived from game transitions
//!
//! Events are computed by comparing the state before and after a guess, so the
//! engine stays a pure reducer and feedback (messages, sounds, celebrations)
//! lives in listeners.

use super::{GameState, Letter, Outcome};

/// Something observable that happened during one transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Accepted guess present in the word
    Hit(Letter),
    /// Accepted guess absent from the word
    Miss(Letter),
    Won,
    Lost,
}

impl GameEvent {
    #[must_use]
    pub const fn is_outcome(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Subscriber to game events
pub trait GameListener {
    fn on_event(&mut self, state: &GameState, event: &GameEvent);
}

/// Derive the events produced by moving from `before` to `after`
///
/// A no-op transition yields nothing. An accepted guess yields one `Hit` or
/// `Miss`, followed by exactly one `Won`/`Lost` if the game just ended.
#[must_use]
pub fn transition_events(before: &GameState, after: &GameState) -> Vec<GameEvent> {
    let mut events = Vec::with_capacity(2);

    if after.guessed().len() > before.guessed().len() {
        if let Some(&letter) = after.guessed().last() {
            if after.word().has_letter(letter) {
                events.push(GameEvent::Hit(letter));
            } else {
                events.push(GameEvent::Miss(letter));
            }
        }
    }

    if before.outcome() == Outcome::InProgress {
        match after.outcome() {
            Outcome::Won => events.push(GameEvent::Won),
            Outcome::Lost => events.push(GameEvent::Lost),
            Outcome::InProgress => {}
        }
    }

    events
}

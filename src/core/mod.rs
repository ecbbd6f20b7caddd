//! Core domain types for hangman
//!
//! The game state machine and the types it is built from. Everything here is
//! pure: transitions return new values and notifications are derived, not
//! emitted.

mod event;
mod game;
mod letter;
mod word;

pub use event::{GameEvent, GameListener, transition_events};
pub use game::{GameState, MAX_ATTEMPTS, Outcome, evaluate_outcome, start_new_game, submit_guess};
pub use letter::{Letter, LetterError};
pub use word::{Word, WordError};

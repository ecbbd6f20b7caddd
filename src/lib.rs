//! Hangman
//!
//! A word-guessing game: pick a category, guess letters, and finish the word
//! before the gallows drawing is complete.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GameState, Letter, Outcome, Word, submit_guess};
//! use hangman::wordlists::Category;
//!
//! let mut state = GameState::new(Word::new("cat").unwrap(), Category::Animals);
//! for c in ['c', 'a', 't'] {
//!     state = submit_guess(&state, Letter::new(c).unwrap());
//! }
//! assert_eq!(state.outcome(), Outcome::Won);
//! ```

// Core domain types and the game state machine
pub mod core;

// Category word lists
pub mod wordlists;

// Pure presentation views
pub mod views;

// Single-actor game session
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;

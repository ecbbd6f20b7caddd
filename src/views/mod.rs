//! Presentation views
//!
//! Pure functions from game state to what should be drawn. They hold no state
//! of their own and are shared by the TUI and the line-based front ends.

pub mod gallows;
pub mod keyboard;
pub mod word;

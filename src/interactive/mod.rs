//! Interactive TUI interface

mod app;
mod rendering;
pub mod sound;
pub mod theme;

pub use app::{App, InputMode, Message, MessageLog, MessageStyle, run_tui};
pub use theme::{Theme, ViewConfig};

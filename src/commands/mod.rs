//! Command implementations

pub mod replay;
pub mod simple;
pub mod simulate;

pub use replay::{ReplayConfig, ReplayResult, ReplayStep, replay_game};
pub use simple::run_simple;
pub use simulate::{CategoryStats, Guesser, SimulationConfig, SimulationResult, run_simulation};

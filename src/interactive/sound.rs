//! Sound effect hook
//!
//! There is no audio backend; effects are logged so the hook can be observed.

use crate::core::{GameEvent, GameListener, GameState};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    Correct,
    Wrong,
    Win,
    Lose,
}

impl Sound {
    #[must_use]
    pub const fn for_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::Hit(_) => Self::Correct,
            GameEvent::Miss(_) => Self::Wrong,
            GameEvent::Won => Self::Win,
            GameEvent::Lost => Self::Lose,
        }
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Wrong => "wrong",
            Self::Win => "win",
            Self::Lose => "lose",
        };
        f.write_str(name)
    }
}

/// Plays (logs) a sound for every game event while enabled
#[derive(Debug, Default)]
pub struct SoundEffects {
    pub enabled: bool,
    last: Option<Sound>,
    played: usize,
}

impl SoundEffects {
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self {
            enabled,
            last: None,
            played: 0,
        }
    }

    pub fn play(&mut self, sound: Sound) {
        if !self.enabled {
            return;
        }
        tracing::debug!("playing {sound} sound");
        self.last = Some(sound);
        self.played += 1;
    }

    /// Most recent sound, if any was played
    #[must_use]
    pub const fn last_played(&self) -> Option<Sound> {
        self.last
    }

    #[must_use]
    pub const fn played_count(&self) -> usize {
        self.played
    }
}

impl GameListener for SoundEffects {
    fn on_event(&mut self, _state: &GameState, event: &GameEvent) {
        self.play(Sound::for_event(event));
    }
}

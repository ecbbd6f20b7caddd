//! Presentation configuration injected into the renderer

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Light => Palette {
                accent: Color::Magenta,
                text: Color::Reset,
                muted: Color::DarkGray,
                correct: Color::Green,
                wrong: Color::Red,
                background: Color::Reset,
            },
            Self::Dark => Palette {
                accent: Color::LightMagenta,
                text: Color::White,
                muted: Color::Gray,
                correct: Color::LightGreen,
                wrong: Color::LightRed,
                background: Color::Black,
            },
        }
    }
}

/// Colors used by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    pub correct: Color,
    pub wrong: Color,
    pub background: Color,
}

/// User-toggleable presentation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    pub theme: Theme,
    pub sound_enabled: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            sound_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn palettes_differ() {
        assert_ne!(Theme::Light.palette(), Theme::Dark.palette());
    }

    #[test]
    fn sound_on_by_default() {
        assert!(ViewConfig::default().sound_enabled);
    }
}

//! Gallows progress view
//!
//! Maps the wrong-guess count to the body segments that are drawn and a
//! linear progress ratio.

use std::fmt;

/// One body part of the gallows drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Head,
    Body,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl Segment {
    /// Segments in reveal order
    pub const ALL: [Self; 6] = [
        Self::Head,
        Self::Body,
        Self::LeftArm,
        Self::RightArm,
        Self::LeftLeg,
        Self::RightLeg,
    ];

    /// Wrong guesses needed before this segment is drawn
    #[must_use]
    pub const fn threshold(self) -> usize {
        match self {
            Self::Head => 1,
            Self::Body => 2,
            Self::LeftArm => 3,
            Self::RightArm => 4,
            Self::LeftLeg => 5,
            Self::RightLeg => 6,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Head => "head",
            Self::Body => "body",
            Self::LeftArm => "left arm",
            Self::RightArm => "right arm",
            Self::LeftLeg => "left leg",
            Self::RightLeg => "right leg",
        };
        f.write_str(name)
    }
}

/// Rendered gallows state
#[derive(Debug, Clone, PartialEq)]
pub struct Gallows {
    /// Visible segments, in reveal order
    pub visible: Vec<Segment>,
    /// `wrong_count / max_attempts`, within [0, 1]
    pub progress: f64,
    /// One wrong guess (or fewer) left
    pub critical: bool,
}

impl Gallows {
    #[must_use]
    pub fn shows(&self, segment: Segment) -> bool {
        self.visible.contains(&segment)
    }
}

/// Compute the gallows view for a wrong-guess count
///
/// # Examples
/// ```
/// use hangman::views::gallows::{render, Segment};
///
/// let gallows = render(3, 6);
/// assert_eq!(gallows.visible, [Segment::Head, Segment::Body, Segment::LeftArm]);
/// assert!((gallows.progress - 0.5).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn render(wrong_count: usize, max_attempts: usize) -> Gallows {
    let visible = Segment::ALL
        .into_iter()
        .filter(|s| wrong_count >= s.threshold())
        .collect();

    let progress = if max_attempts == 0 {
        0.0
    } else {
        (wrong_count as f64 / max_attempts as f64).clamp(0.0, 1.0)
    };

    Gallows {
        visible,
        progress,
        critical: wrong_count >= max_attempts.saturating_sub(1),
    }
}

/// Draw the gallows as fixed-width text
///
/// Always returns the same number of lines, whatever is visible.
#[must_use]
pub fn ascii_art(gallows: &Gallows) -> Vec<String> {
    let pick = |segment: Segment, glyph: char| {
        if gallows.shows(segment) { glyph } else { ' ' }
    };

    let head = pick(Segment::Head, 'O');
    let left_arm = pick(Segment::LeftArm, '/');
    let body = pick(Segment::Body, '|');
    let right_arm = pick(Segment::RightArm, '\\');
    let left_leg = pick(Segment::LeftLeg, '/');
    let right_leg = pick(Segment::RightLeg, '\\');

    vec![
        "  +-----+".to_string(),
        "  |     |".to_string(),
        format!("  |     {head}"),
        format!("  |    {left_arm}{body}{right_arm}"),
        format!("  |     {body}"),
        format!("  |    {left_leg} {right_leg}"),
        "  |".to_string(),
        "=====".to_string(),
    ]
}

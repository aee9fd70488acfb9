//! The closed mood and animation vocabularies.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::InvalidMoodError;

/// A named emotional category driving the displayed theme.
///
/// The set is closed: every variant has exactly one theme in the
/// [`ThemeRegistry`](crate::ThemeRegistry), and [`MoodId::ALL`] lists them in
/// display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodId {
    Happy,
    #[default]
    Calm,
    Energetic,
    Melancholic,
}

impl MoodId {
    /// All moods, in display order.
    pub const ALL: [MoodId; 4] = [
        MoodId::Happy,
        MoodId::Calm,
        MoodId::Energetic,
        MoodId::Melancholic,
    ];

    /// The stable lowercase key (`"happy"`, `"calm"`, ...).
    pub const fn key(self) -> &'static str {
        match self {
            MoodId::Happy => "happy",
            MoodId::Calm => "calm",
            MoodId::Energetic => "energetic",
            MoodId::Melancholic => "melancholic",
        }
    }

    /// The title-case label shown on controls (`"Happy"`, ...).
    pub const fn label(self) -> &'static str {
        match self {
            MoodId::Happy => "Happy",
            MoodId::Calm => "Calm",
            MoodId::Energetic => "Energetic",
            MoodId::Melancholic => "Melancholic",
        }
    }

    /// Position of this mood in [`MoodId::ALL`].
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MoodId {
    type Err = InvalidMoodError;

    /// Parses a mood key, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        MoodId::ALL
            .into_iter()
            .find(|mood| mood.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| InvalidMoodError::new(s))
    }
}

/// Which animation the presentation layer plays for a theme.
///
/// The core only stores the tag; [`Animation`](crate::Animation) turns it into
/// timing and keyframes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimationKind {
    #[default]
    None,
    Bounce,
    Pulse,
    SlowFade,
}

impl AnimationKind {
    /// The animation name as used in keyframe definitions.
    pub const fn name(self) -> &'static str {
        match self {
            AnimationKind::None => "none",
            AnimationKind::Bounce => "bounce",
            AnimationKind::Pulse => "pulse",
            AnimationKind::SlowFade => "slowFade",
        }
    }
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! The mood → theme table.

use once_cell::sync::Lazy;

use super::descriptor::ThemeDescriptor;
use crate::color::{Color, GradientSpec};
use crate::mood::{AnimationKind, MoodId};

/// Angle shared by every background gradient.
const GRADIENT_ANGLE: u16 = 135;

static STANDARD: Lazy<ThemeRegistry> = Lazy::new(ThemeRegistry::new);

/// Immutable mapping from every [`MoodId`] to its [`ThemeDescriptor`].
///
/// The registry is total over the mood enum: it stores one descriptor per
/// variant, indexed by display position, and the table is filled by an
/// exhaustive `match`. Adding a mood without a palette fails to compile.
///
/// # Example
///
/// ```rust
/// use moodswitch::{AnimationKind, MoodId, ThemeRegistry};
///
/// let registry = ThemeRegistry::standard();
/// let theme = registry.lookup(MoodId::Energetic);
/// assert_eq!(theme.primary_color.to_string(), "#FF6B6B");
/// assert_eq!(theme.animation_kind, AnimationKind::Pulse);
///
/// let moods: Vec<_> = registry.all_moods().collect();
/// assert_eq!(moods.first(), Some(&MoodId::Happy));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRegistry {
    themes: [ThemeDescriptor; 4],
}

impl ThemeRegistry {
    /// Builds a registry holding the four mood palettes.
    pub fn new() -> Self {
        Self {
            themes: MoodId::ALL.map(palette),
        }
    }

    /// The process-wide registry, built on first use.
    pub fn standard() -> &'static ThemeRegistry {
        &STANDARD
    }

    /// Returns the descriptor for `mood`. Never fails.
    pub fn lookup(&self, mood: MoodId) -> &ThemeDescriptor {
        &self.themes[mood.index()]
    }

    /// All moods in display order. Each call yields the same sequence.
    pub fn all_moods(&self) -> impl Iterator<Item = MoodId> {
        MoodId::ALL.into_iter()
    }

    /// `(mood, descriptor)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (MoodId, &ThemeDescriptor)> + '_ {
        MoodId::ALL.into_iter().zip(self.themes.iter())
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn palette(mood: MoodId) -> ThemeDescriptor {
    let (primary, secondary, (from, to), text, animation_kind) = match mood {
        MoodId::Happy => (
            0xFFD700,
            0xFFA500,
            (0xFFD700, 0xFFA500),
            0x333333,
            AnimationKind::Bounce,
        ),
        // The calm palette has no animation of its own.
        MoodId::Calm => (
            0x4ECDC4,
            0x45B7D1,
            (0xA5F1E9, 0x4ECDC4),
            0x2C3E50,
            AnimationKind::None,
        ),
        MoodId::Energetic => (
            0xFF6B6B,
            0x4ECDC4,
            (0xFF6B6B, 0xFFA500),
            0xFFFFFF,
            AnimationKind::Pulse,
        ),
        MoodId::Melancholic => (
            0x8E44AD,
            0x9B59B6,
            (0x34495E, 0x2C3E50),
            0xECF0F1,
            AnimationKind::SlowFade,
        ),
    };

    ThemeDescriptor {
        primary_color: Color::from_hex(primary),
        secondary_color: Color::from_hex(secondary),
        background: GradientSpec::new(GRADIENT_ANGLE, Color::from_hex(from), Color::from_hex(to)),
        text_color: Color::from_hex(text),
        animation_kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_total() {
        let registry = ThemeRegistry::new();
        for mood in MoodId::ALL {
            let theme = registry.lookup(mood);
            assert_eq!(theme.background.angle_deg, GRADIENT_ANGLE);
        }
    }

    #[test]
    fn test_all_moods_is_restartable() {
        let registry = ThemeRegistry::standard();
        let first: Vec<_> = registry.all_moods().collect();
        let second: Vec<_> = registry.all_moods().collect();
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![
                MoodId::Happy,
                MoodId::Calm,
                MoodId::Energetic,
                MoodId::Melancholic
            ]
        );
    }

    #[test]
    fn test_iter_pairs_match_lookup() {
        let registry = ThemeRegistry::new();
        for (mood, theme) in registry.iter() {
            assert_eq!(theme, registry.lookup(mood));
        }
        assert_eq!(registry.iter().count(), 4);
    }

    #[test]
    fn test_happy_palette() {
        let theme = ThemeRegistry::standard().lookup(MoodId::Happy);
        assert_eq!(theme.primary_color, Color::from_hex(0xFFD700));
        assert_eq!(theme.text_color.to_string(), "#333333");
        assert_eq!(
            theme.background.to_string(),
            "linear-gradient(135deg, #FFD700, #FFA500)"
        );
        assert_eq!(theme.animation_kind, AnimationKind::Bounce);
    }

    #[test]
    fn test_calm_has_no_animation() {
        let theme = ThemeRegistry::standard().lookup(MoodId::Calm);
        assert_eq!(theme.animation_kind, AnimationKind::None);
        assert_eq!(theme.secondary_color, Color::from_hex(0x45B7D1));
    }

    #[test]
    fn test_standard_matches_fresh_registry() {
        assert_eq!(ThemeRegistry::standard(), &ThemeRegistry::default());
    }
}

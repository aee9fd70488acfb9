//! Terminal color conversion and width-aware text fitting.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// Grays go to the 24-step grayscale ramp, everything else to the 6x6x6 cube.
///
/// # Example
///
/// ```rust
/// use moodswitch::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        return match r {
            0..=7 => 16,
            249..=255 => 231,
            _ => 232 + ((r as u16 - 8) * 24 / 247) as u8,
        };
    }
    let level = |c: u8| (c as u16 * 5 / 255) as u8;
    16 + 36 * level(r) + 6 * level(g) + level(b)
}

/// Truncates `s` to at most `max_width` columns, ending with `…` when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let limit = max_width.saturating_sub(1);
    let mut result = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > limit {
            break;
        }
        result.push(c);
        used += w;
    }
    result.push('…');
    result
}

/// Centers `s` within `width` columns, truncating if it does not fit.
///
/// When the slack is odd the extra space goes on the right.
///
/// ```rust
/// use moodswitch::center_to_width;
///
/// assert_eq!(center_to_width("ab", 6), "  ab  ");
/// assert_eq!(center_to_width("ab", 5), " ab  ");
/// ```
pub fn center_to_width(s: &str, width: usize) -> String {
    let fitted = truncate_to_width(s, width);
    let slack = width.saturating_sub(fitted.width());
    let left = slack / 2;
    format!("{}{}{}", " ".repeat(left), fitted, " ".repeat(slack - left))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_ansi256_grayscale() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        let mid = rgb_to_ansi256((0x33, 0x33, 0x33));
        assert!((232..=255).contains(&mid));
    }

    #[test]
    fn test_rgb_to_ansi256_color_cube() {
        assert_eq!(rgb_to_ansi256((0, 0, 255)), 21);
        // #FFD700 -> r=5, g=4, b=0
        assert_eq!(rgb_to_ansi256((0xFF, 0xD7, 0x00)), 16 + 180 + 24);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Hello", 10), "Hello");
        assert_eq!(truncate_to_width("Hello World", 6), "Hello…");
        assert_eq!(truncate_to_width("Hello", 0), "…");
    }

    #[test]
    fn test_center_to_width_wide_chars() {
        // The rainbow indicator is two columns wide.
        let line = center_to_width("🌈", 6);
        assert_eq!(line, "  🌈  ");
        assert_eq!(line.width(), 6);
    }

    #[test]
    fn test_center_to_width_overflow_truncates() {
        let line = center_to_width("Current Mood: Melancholic", 10);
        assert_eq!(line.width(), 10);
        assert!(line.ends_with('…'));
    }
}

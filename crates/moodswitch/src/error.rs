//! Error types.
//!
//! Only the boundary paths can fail: parsing an untyped mood key, parsing a
//! hex color literal, and rendering templates. Everything that works on a
//! typed [`MoodId`](crate::MoodId) is total.

use thiserror::Error;

/// A mood key that is not part of the closed [`MoodId`](crate::MoodId) set.
///
/// Returned by [`SelectionStore::select_key`](crate::SelectionStore::select_key)
/// and by `MoodId::from_str`. The selection is left untouched when this is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mood '{key}' (expected one of: happy, calm, energetic, melancholic)")]
pub struct InvalidMoodError {
    /// The rejected input, as given.
    pub key: String,
}

impl InvalidMoodError {
    pub(crate) fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Error returned when a hex color literal cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The literal does not start with `#`.
    #[error("color '{0}' must start with '#'")]
    MissingHash(String),
    /// The literal has a digit count other than 3 or 6.
    #[error("color '{0}' must have 3 or 6 hex digits")]
    BadLength(String),
    /// The literal contains a non-hex character.
    #[error("color '{0}' contains a non-hex digit")]
    BadDigit(String),
}

/// Error returned when the terminal view cannot be rendered.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A template failed to compile or render.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
    /// The selection could not be serialized for structured output.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_mood_error_display() {
        let err = InvalidMoodError::new("grumpy");
        let msg = err.to_string();
        assert!(msg.contains("grumpy"));
        assert!(msg.contains("melancholic"));
    }

    #[test]
    fn test_color_parse_error_display() {
        let err = ColorParseError::BadLength("#12".to_string());
        assert_eq!(err.to_string(), "color '#12' must have 3 or 6 hex digits");
    }
}

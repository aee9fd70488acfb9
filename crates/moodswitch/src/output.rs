//! Output mode control.

use std::str::FromStr;

use console::Term;

/// How the view is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Styled if stdout supports colors, plain otherwise.
    #[default]
    Auto,
    /// Always styled.
    Term,
    /// Never styled.
    Text,
    /// The current selection serialized as JSON instead of a rendered view.
    Json,
}

impl OutputMode {
    /// Whether ANSI styling should be emitted.
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => Term::stdout().features().colors_supported(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::Json => false,
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, OutputMode::Json)
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(OutputMode::Auto),
            "term" => Ok(OutputMode::Term),
            "text" => Ok(OutputMode::Text),
            "json" => Ok(OutputMode::Json),
            other => Err(format!(
                "unknown output mode '{}' (expected auto, term, text or json)",
                other
            )),
        }
    }
}

//! Named terminal styles derived from the mood themes.

use std::collections::HashMap;

use console::{Color as TermColor, Style};

use crate::animation::Frame;
use crate::color::Color;
use crate::store::SelectionStore;

/// Suffix marking a style name that could not be resolved.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

fn term(color: Color) -> TermColor {
    TermColor::Color256(color.to_ansi256())
}

/// Styles referenced by the view templates, keyed by name.
///
/// Names:
///
/// - `mood.<key>` / `mood.<key>.active`: selector controls, one pair per mood
/// - `title`, `tagline`, `indicator`: content display text, in the active theme's text color
#[derive(Debug, Clone, Default)]
pub struct StyleTable {
    styles: HashMap<String, Style>,
}

impl StyleTable {
    /// Builds the table for the store's current selection and an animation frame.
    pub fn for_selection(store: &SelectionStore<'_>, frame: Frame) -> Self {
        let mut styles = HashMap::new();

        for (mood, theme) in store.registry().iter() {
            let control = Style::new()
                .fg(term(theme.text_color))
                .bg(term(theme.primary_color))
                .bold();
            styles.insert(format!("mood.{}.active", mood.key()), control.clone().underlined());
            styles.insert(format!("mood.{}", mood.key()), control);
        }

        let (_, theme) = store.current();
        let text = Style::new().fg(term(theme.text_color));
        styles.insert("title".to_string(), text.clone().bold());
        styles.insert("tagline".to_string(), text.clone().italic());

        let mut indicator = text;
        if frame.scale >= 1.1 {
            indicator = indicator.bold();
        }
        if frame.opacity < 0.75 {
            indicator = indicator.dim();
        }
        styles.insert("indicator".to_string(), indicator);

        Self { styles }
    }

    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Applies the named style to `text`.
    ///
    /// Without color the text is returned unchanged. An unknown name leaves
    /// the text unstyled and appends [`MISSING_STYLE_INDICATOR`].
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(_) if !use_color => text.to_string(),
            Some(style) => style.clone().force_styling(true).apply_to(text).to_string(),
            None => format!("{} {}", text, MISSING_STYLE_INDICATOR),
        }
    }
}

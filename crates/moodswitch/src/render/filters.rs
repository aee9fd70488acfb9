//! MiniJinja filter registration.

use console::{Color as TermColor, Style};
use minijinja::{Environment, Value};

use super::panel::paint_row;
use super::styles::StyleTable;
use crate::theme::ThemeDescriptor;

/// Registers the view filters on a minijinja environment.
///
/// - `style(name)`: applies a named style from `table`
/// - `panel(row, rows, name)`: centers the value in a `width`-column row
///   painted with the theme's background gradient
pub(crate) fn register_filters(
    env: &mut Environment<'static>,
    table: StyleTable,
    theme: &ThemeDescriptor,
    width: usize,
    use_color: bool,
) {
    let panel_table = table.clone();
    env.add_filter("style", move |value: Value, name: String| -> String {
        table.apply(&name, &value.to_string(), use_color)
    });

    let gradient = theme.background;
    let base = Style::new().fg(TermColor::Color256(theme.text_color.to_ansi256()));
    env.add_filter(
        "panel",
        move |value: Value, row: usize, rows: usize, name: Option<String>| -> String {
            let style = name
                .as_deref()
                .and_then(|name| panel_table.get(name))
                .unwrap_or(&base);
            paint_row(&value.to_string(), row, rows, width, style, &gradient, use_color)
        },
    );
}

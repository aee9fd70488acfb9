//! Gradient painting for the content display.

use console::{Color as TermColor, Style};
use unicode_width::UnicodeWidthChar;

use crate::color::GradientSpec;
use crate::util::center_to_width;

/// Position of a cell along a 135° (top-left to bottom-right) gradient.
fn diagonal(col: usize, row: usize, width: usize, rows: usize) -> f32 {
    let x = col as f32 / width.saturating_sub(1).max(1) as f32;
    let y = row as f32 / rows.saturating_sub(1).max(1) as f32;
    (x + y) / 2.0
}

fn push_run(out: &mut String, style: &Style, bg: u8, run: &mut String) {
    if run.is_empty() {
        return;
    }
    let painted = style
        .clone()
        .bg(TermColor::Color256(bg))
        .force_styling(true)
        .apply_to(run.as_str())
        .to_string();
    out.push_str(&painted);
    run.clear();
}

/// Centers `text` in a `width`-column row and paints the gradient behind it.
///
/// Adjacent cells that map to the same palette entry share one escape
/// sequence. Without color only the centered text is returned.
pub(crate) fn paint_row(
    text: &str,
    row: usize,
    rows: usize,
    width: usize,
    style: &Style,
    gradient: &GradientSpec,
    use_color: bool,
) -> String {
    let line = center_to_width(text, width);
    if !use_color {
        return line;
    }

    let mut out = String::new();
    let mut run = String::new();
    let mut run_bg = None;
    let mut col = 0;
    for c in line.chars() {
        let bg = gradient
            .sample(diagonal(col, row, width, rows))
            .to_ansi256();
        if let Some(previous) = run_bg.filter(|&previous| previous != bg) {
            push_run(&mut out, style, previous, &mut run);
        }
        run_bg = Some(bg);
        run.push(c);
        col += c.width().unwrap_or(0);
    }
    if let Some(bg) = run_bg {
        push_run(&mut out, style, bg, &mut run);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn gradient() -> GradientSpec {
        GradientSpec::new(135, Color::from_hex(0x000000), Color::from_hex(0xFFFFFF))
    }

    #[test]
    fn test_diagonal_corners() {
        assert_eq!(diagonal(0, 0, 10, 5), 0.0);
        assert_eq!(diagonal(9, 4, 10, 5), 1.0);
        assert_eq!(diagonal(0, 0, 1, 1), 0.0);
    }

    #[test]
    fn test_paint_row_plain() {
        let row = paint_row("hey", 0, 3, 7, &Style::new(), &gradient(), false);
        assert_eq!(row, "  hey  ");
    }

    #[test]
    fn test_paint_row_spans_gradient() {
        let row = paint_row("", 0, 1, 20, &Style::new(), &gradient(), true);
        let start = Color::from_hex(0x000000).to_ansi256();
        let end = gradient().sample(0.5).to_ansi256();
        assert!(row.starts_with(&format!("\x1b[48;5;{}m", start)));
        assert!(row.contains(&format!("48;5;{}m", end)));
        assert_eq!(console::strip_ansi_codes(&row).chars().count(), 20);
    }

    #[test]
    fn test_paint_row_single_color_is_one_run() {
        let flat = GradientSpec::new(135, Color::from_hex(0x4ECDC4), Color::from_hex(0x4ECDC4));
        let row = paint_row("calm", 2, 5, 12, &Style::new(), &flat, true);
        assert_eq!(row.matches("\x1b[48;5;").count(), 1);
        assert_eq!(console::strip_ansi_codes(&row), "    calm    ");
    }
}

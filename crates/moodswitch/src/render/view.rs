//! Selector and content display rendering.

use std::time::Duration;

use minijinja::Environment;
use serde::Serialize;
use tracing::debug;
use unicode_width::UnicodeWidthStr;

use super::filters::register_filters;
use super::styles::StyleTable;
use super::templates;
use crate::animation::{frame_at, Animation, Frame};
use crate::error::RenderError;
use crate::mood::MoodId;
use crate::output::OutputMode;
use crate::store::SelectionStore;
use crate::theme::ThemeDescriptor;
use crate::util::truncate_to_width;

/// Shown under the title in the content display.
pub const TAGLINE: &str = "Experience the world through your current emotional lens.";

/// The animated mood indicator.
pub const INDICATOR: &str = "🌈";

/// Rows between the indicator's rest position and its highest bounce.
const MAX_LIFT: usize = 2;

/// Pixels of bounce offset per terminal row.
const PIXELS_PER_ROW: f32 = 10.0;

/// Options controlling how the view is rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub mode: OutputMode,
    /// Columns available to the selector row and the content display.
    pub width: usize,
    /// Time since the current animation started.
    pub elapsed: Duration,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mode: OutputMode::Auto,
            width: 64,
            elapsed: Duration::ZERO,
        }
    }
}

impl RenderOptions {
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }
}

#[derive(Serialize)]
struct ControlView {
    text: String,
    style: String,
}

#[derive(Serialize)]
struct SelectorView {
    pad: String,
    controls: Vec<ControlView>,
}

#[derive(Serialize)]
struct LineView {
    text: String,
    style: Option<&'static str>,
}

#[derive(Serialize)]
struct ContentView {
    lines: Vec<LineView>,
}

/// The current selection, as emitted in [`OutputMode::Json`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSnapshot<'a> {
    pub mood: MoodId,
    pub label: &'static str,
    pub theme: &'a ThemeDescriptor,
    /// The `animation` shorthand, absent when the theme does not animate.
    pub animation: Option<String>,
}

impl<'a> SelectionSnapshot<'a> {
    pub fn of(store: &SelectionStore<'a>) -> Self {
        let (mood, theme) = store.current();
        Self {
            mood,
            label: mood.label(),
            theme,
            animation: Animation::for_kind(theme.animation_kind).map(|a| a.shorthand()),
        }
    }
}

fn environment(
    store: &SelectionStore<'_>,
    options: &RenderOptions,
    frame: Frame,
) -> Result<Environment<'static>, RenderError> {
    let mut env = Environment::new();
    env.add_template("selector", templates::SELECTOR)?;
    env.add_template("content", templates::CONTENT)?;
    register_filters(
        &mut env,
        StyleTable::for_selection(store, frame),
        store.current_theme(),
        options.width,
        options.mode.should_use_color(),
    );
    Ok(env)
}

/// Framing for one control at full width: two columns on each side.
fn framed(mood: MoodId, active: bool) -> String {
    if active {
        format!("▸ {} ◂", mood.label())
    } else {
        format!("  {}  ", mood.label())
    }
}

/// Framing for one control when the full row does not fit.
fn compact(mood: MoodId, active: bool) -> String {
    if active {
        format!("▸{}", mood.label())
    } else {
        mood.label().to_string()
    }
}

fn selector_view(store: &SelectionStore<'_>, width: usize) -> SelectorView {
    let current = store.current_mood();
    let moods: Vec<MoodId> = store.registry().all_moods().collect();
    let separators = moods.len().saturating_sub(1);

    let used = moods
        .iter()
        .map(|&mood| framed(mood, mood == current).width())
        .sum::<usize>()
        + separators;

    // Too narrow: give every control an equal share of what is left after
    // the separators, so the row never exceeds `width`.
    let share = (used > width).then(|| width.saturating_sub(separators) / moods.len().max(1));

    let controls = moods
        .into_iter()
        .map(|mood| {
            let active = mood == current;
            let text = match share {
                None => framed(mood, active),
                Some(0) => String::new(),
                Some(share) => truncate_to_width(&compact(mood, active), share),
            };
            let style = if active {
                format!("mood.{}.active", mood.key())
            } else {
                format!("mood.{}", mood.key())
            };
            ControlView { text, style }
        })
        .collect();

    SelectorView {
        pad: " ".repeat(width.saturating_sub(used) / 2),
        controls,
    }
}

fn content_view(store: &SelectionStore<'_>, frame: Frame) -> ContentView {
    let mood = store.current_mood();
    let lift = ((-frame.offset_y / PIXELS_PER_ROW).round().max(0.0) as usize).min(MAX_LIFT);
    let indicator_row = 4 + MAX_LIFT - lift;

    let mut lines: Vec<LineView> = (0..4 + MAX_LIFT + 2)
        .map(|_| LineView {
            text: String::new(),
            style: None,
        })
        .collect();
    lines[1] = LineView {
        text: format!("Current Mood: {}", mood.label()),
        style: Some("title"),
    };
    lines[3] = LineView {
        text: TAGLINE.to_string(),
        style: Some("tagline"),
    };
    lines[indicator_row] = LineView {
        text: INDICATOR.to_string(),
        style: Some("indicator"),
    };
    ContentView { lines }
}

/// Renders the selector row: one control per mood, the active one marked.
///
/// # Errors
///
/// Returns [`RenderError::Template`] if the template fails to render.
pub fn render_selector(
    store: &SelectionStore<'_>,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let env = environment(store, options, Frame::REST)?;
    let view = selector_view(store, options.width);
    Ok(env.get_template("selector")?.render(&view)?)
}

/// Renders the content display for the current mood at `options.elapsed`.
///
/// # Errors
///
/// Returns [`RenderError::Template`] if the template fails to render.
pub fn render_content(
    store: &SelectionStore<'_>,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let frame = frame_at(store.current_theme().animation_kind, options.elapsed);
    let env = environment(store, options, frame)?;
    let view = content_view(store, frame);
    let rendered = env.get_template("content")?.render(&view)?;
    Ok(rendered.trim_end_matches('\n').to_string())
}

/// Renders both regions, or the JSON snapshot in [`OutputMode::Json`].
///
/// # Errors
///
/// Returns [`RenderError`] if a template fails or serialization fails.
pub fn render_view(
    store: &SelectionStore<'_>,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    if options.mode.is_structured() {
        return Ok(serde_json::to_string_pretty(&SelectionSnapshot::of(store))?);
    }

    debug!(mood = %store.current_mood(), width = options.width, "rendering view");
    let selector = render_selector(store, options)?;
    let content = render_content(store, options)?;
    Ok(format!("{}\n\n{}", selector, content))
}

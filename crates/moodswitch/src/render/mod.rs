//! Terminal rendering of the selector row and the content display.
//!
//! This module provides:
//!
//! - [`render_view`]: both regions (or a JSON snapshot in [`OutputMode::Json`](crate::OutputMode))
//! - [`render_selector`] and [`render_content`]: the regions on their own
//! - [`RenderOptions`]: output mode, width and animation time
//! - [`StyleTable`]: the named styles the templates refer to
//!
//! Views are rendered from minijinja templates. Two filters are available to
//! them: `style(name)` applies a named style, and `panel(row, rows, name)`
//! lays a line out on the gradient background of the active theme.

mod filters;
mod panel;
mod styles;
mod templates;
mod view;

pub use styles::{StyleTable, MISSING_STYLE_INDICATOR};
pub use view::{
    render_content, render_selector, render_view, RenderOptions, SelectionSnapshot, INDICATOR,
    TAGLINE,
};

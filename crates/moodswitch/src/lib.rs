//! # Moodswitch
//!
//! Pick a mood, get a theme. `moodswitch` pairs a closed set of moods with
//! fixed visual themes and keeps track of which one is selected, notifying
//! whoever renders it.
//!
//! ## Concepts
//!
//! - [`MoodId`]: the closed mood set (`Happy`, `Calm`, `Energetic`, `Melancholic`)
//! - [`ThemeRegistry`]: total, immutable mapping from mood to [`ThemeDescriptor`]
//! - [`SelectionStore`]: the selected mood, with subscribe/notify
//! - [`Animation`]: timing and keyframes behind each [`AnimationKind`]
//! - [`render_view`]: the selector row and the themed content display, for a terminal
//!
//! ## Quick Start
//!
//! ```rust
//! use moodswitch::{render_view, MoodId, OutputMode, RenderOptions, SelectionStore};
//!
//! let store = SelectionStore::new();
//! assert_eq!(store.current_mood(), MoodId::Calm);
//!
//! store.subscribe(|store, change| {
//!     let options = RenderOptions::default().with_mode(OutputMode::Text);
//!     let view = render_view(store, &options).unwrap();
//!     assert!(view.contains(change.current.label()));
//! });
//!
//! store.select(MoodId::Energetic);
//! let (mood, theme) = store.current();
//! assert_eq!(mood, MoodId::Energetic);
//! assert_eq!(theme.primary_color.to_string(), "#FF6B6B");
//! ```
//!
//! ## Untyped input
//!
//! Mood keys coming from users go through [`SelectionStore::select_key`],
//! which rejects unknown keys with [`InvalidMoodError`] and leaves the
//! selection untouched.
//!
//! ```rust
//! use moodswitch::{MoodId, SelectionStore};
//!
//! let store = SelectionStore::new();
//! assert!(store.select_key("sleepy").is_err());
//! assert_eq!(store.select_key("happy"), Ok(MoodId::Happy));
//! ```
//!
//! ## Logging
//!
//! Selections, subscriptions and rejected keys are reported through
//! [`tracing`]. Install a subscriber to see them.

mod animation;
mod color;
mod error;
mod mood;
mod output;
pub mod render;
mod store;
mod theme;
mod util;

pub use animation::{frame_at, AnimatedProperty, Animation, Frame, Keyframe};
pub use color::{Color, GradientSpec};
pub use error::{ColorParseError, InvalidMoodError, RenderError};
pub use mood::{AnimationKind, MoodId};
pub use output::OutputMode;
pub use render::{render_content, render_selector, render_view, RenderOptions, SelectionSnapshot};
pub use store::{MoodChange, SelectionStore, SelectionStoreBuilder, SubscriptionId};
pub use theme::{ThemeDescriptor, ThemeRegistry};
pub use util::{center_to_width, rgb_to_ansi256, truncate_to_width};

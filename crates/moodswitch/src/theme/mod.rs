//! Theme registry: the closed mapping from mood to visual attributes.
//!
//! This module provides:
//!
//! - [`ThemeDescriptor`]: the colors, background gradient and animation tag of one mood
//! - [`ThemeRegistry`]: the total, immutable mapping from [`MoodId`](crate::MoodId)
//!   to its descriptor, in display order

mod descriptor;
mod registry;

pub use descriptor::ThemeDescriptor;
pub use registry::ThemeRegistry;

//! Selection store: the single piece of mutable state.
//!
//! This module provides:
//!
//! - [`SelectionStore`]: holds the current mood, resolves its theme, and notifies observers
//! - [`SelectionStoreBuilder`]: configures the initial mood and the registry
//! - [`MoodChange`]: the event handed to observers
//! - [`SubscriptionId`]: handle returned by [`SelectionStore::subscribe`]
//!
//! The store is single-threaded. Every selection and the notifications it
//! triggers run to completion before the next selection is applied; a
//! selection issued from inside an observer is queued until the current
//! round finishes.

mod builder;
mod observer;
mod selection;

pub use builder::SelectionStoreBuilder;
pub use observer::{MoodChange, SubscriptionId};
pub use selection::SelectionStore;

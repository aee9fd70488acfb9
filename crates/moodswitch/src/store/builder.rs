//! Builder for [`SelectionStore`].

use crate::mood::MoodId;
use crate::theme::ThemeRegistry;

use super::selection::SelectionStore;

/// Configures a [`SelectionStore`] before creating it.
///
/// By default the store uses [`ThemeRegistry::standard`] and starts on
/// [`MoodId::Calm`].
///
/// # Example
///
/// ```rust
/// use moodswitch::{MoodId, SelectionStore, ThemeRegistry};
///
/// let registry = ThemeRegistry::new();
/// let store = SelectionStore::builder()
///     .registry(&registry)
///     .initial_mood(MoodId::Melancholic)
///     .build();
/// assert_eq!(store.current_mood(), MoodId::Melancholic);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SelectionStoreBuilder<'r> {
    registry: &'r ThemeRegistry,
    initial: MoodId,
}

impl SelectionStoreBuilder<'static> {
    pub(crate) fn new() -> Self {
        Self {
            registry: ThemeRegistry::standard(),
            initial: MoodId::default(),
        }
    }
}

impl<'r> SelectionStoreBuilder<'r> {
    /// Resolves themes against `registry` instead of the standard one.
    pub fn registry<'s>(self, registry: &'s ThemeRegistry) -> SelectionStoreBuilder<'s> {
        SelectionStoreBuilder {
            registry,
            initial: self.initial,
        }
    }

    /// Sets the mood the store starts on.
    pub fn initial_mood(mut self, mood: MoodId) -> Self {
        self.initial = mood;
        self
    }

    pub fn build(self) -> SelectionStore<'r> {
        SelectionStore::from_parts(self.registry, self.initial)
    }
}

//! The selection store.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use super::builder::SelectionStoreBuilder;
use super::observer::{MoodChange, Observer, SubscriptionId};
use crate::error::InvalidMoodError;
use crate::mood::MoodId;
use crate::theme::{ThemeDescriptor, ThemeRegistry};

/// Holds the currently selected mood and notifies observers when it is set.
///
/// The store is meant to be created once per session and passed to whatever
/// renders it. It is `!Sync`: selection and notification happen on one
/// thread, so reads never race a write.
///
/// # Example
///
/// ```rust
/// use moodswitch::{MoodId, SelectionStore};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let store = SelectionStore::new();
/// let renders = Rc::new(Cell::new(0));
///
/// let seen = Rc::clone(&renders);
/// store.subscribe(move |store, _change| {
///     // The new mood is already visible here.
///     assert_eq!(store.current_mood(), MoodId::Happy);
///     seen.set(seen.get() + 1);
/// });
///
/// store.select(MoodId::Happy);
/// assert_eq!(renders.get(), 1);
/// ```
pub struct SelectionStore<'r> {
    registry: &'r ThemeRegistry,
    current: Cell<MoodId>,
    observers: RefCell<Vec<(SubscriptionId, Observer<'r>)>>,
    next_id: Cell<u64>,
    notifying: Cell<bool>,
    pending: RefCell<VecDeque<MoodId>>,
}

impl SelectionStore<'static> {
    /// Creates a store over the standard registry, starting on [`MoodId::Calm`].
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a builder for configuring the registry and initial mood.
    pub fn builder() -> SelectionStoreBuilder<'static> {
        SelectionStoreBuilder::new()
    }
}

impl Default for SelectionStore<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> SelectionStore<'r> {
    /// Creates a store resolving themes against `registry`, starting on [`MoodId::Calm`].
    pub fn with_registry(registry: &'r ThemeRegistry) -> Self {
        Self::from_parts(registry, MoodId::default())
    }

    pub(crate) fn from_parts(registry: &'r ThemeRegistry, initial: MoodId) -> Self {
        Self {
            registry,
            current: Cell::new(initial),
            observers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
            notifying: Cell::new(false),
            pending: RefCell::new(VecDeque::new()),
        }
    }

    /// Returns the selected mood and its resolved theme.
    pub fn current(&self) -> (MoodId, &'r ThemeDescriptor) {
        let mood = self.current.get();
        (mood, self.registry.lookup(mood))
    }

    /// Returns the selected mood.
    pub fn current_mood(&self) -> MoodId {
        self.current.get()
    }

    /// Returns the theme of the selected mood.
    pub fn current_theme(&self) -> &'r ThemeDescriptor {
        self.current().1
    }

    /// The registry this store resolves themes against.
    pub fn registry(&self) -> &'r ThemeRegistry {
        self.registry
    }

    /// Selects `mood` and notifies every observer in registration order.
    ///
    /// Observers fire even when `mood` is already selected. When called from
    /// inside an observer, the selection is queued and applied once the
    /// running notification round has finished.
    pub fn select(&self, mood: MoodId) {
        if self.notifying.get() {
            trace!(mood = %mood, "selection deferred until notification round completes");
            self.pending.borrow_mut().push_back(mood);
            return;
        }

        self.apply(mood);
        while let Some(next) = self.next_pending() {
            self.apply(next);
        }
    }

    /// Selects the mood named by an untyped `key` (e.g. user input).
    ///
    /// On error the selection is unchanged and no observer fires.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMoodError`] if `key` does not name a mood.
    pub fn select_key(&self, key: &str) -> Result<MoodId, InvalidMoodError> {
        let mood = key.parse::<MoodId>().inspect_err(|err| {
            warn!(key = %err.key, "rejected unknown mood");
        })?;
        self.select(mood);
        Ok(mood)
    }

    /// Registers `observer`, to be called after every selection.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: FnMut(&SelectionStore<'r>, &MoodChange) + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let observer: Observer<'r> = Rc::new(RefCell::new(observer));
        let mut observers = self.observers.borrow_mut();
        observers.push((id, observer));
        debug!(id = id.0, observers = observers.len(), "observer subscribed");
        id
    }

    /// Removes an observer. Returns `false` if `id` was not registered.
    ///
    /// An observer removed during a notification round still receives that
    /// round's notification.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        let removed = observers.len() != before;
        debug!(id = id.0, removed, "observer unsubscribed");
        removed
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    fn apply(&self, mood: MoodId) {
        let change = MoodChange {
            previous: self.current.replace(mood),
            current: mood,
        };

        // Snapshot so observers may subscribe or unsubscribe while running.
        let observers: Vec<Observer<'r>> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        debug!(
            previous = %change.previous,
            current = %change.current,
            observers = observers.len(),
            "mood selected"
        );

        let _round = NotifyRound::enter(&self.notifying, &self.pending);
        for (position, observer) in observers.iter().enumerate() {
            trace!(position, "notifying observer");
            (observer.borrow_mut())(self, &change);
        }
    }

    fn next_pending(&self) -> Option<MoodId> {
        self.pending.borrow_mut().pop_front()
    }
}

impl fmt::Debug for SelectionStore<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionStore")
            .field("current", &self.current.get())
            .field("observers", &self.observer_count())
            .finish_non_exhaustive()
    }
}

/// Marks a notification round.
///
/// Cleared on drop. If an observer panics, selections it queued are
/// discarded along with the round.
struct NotifyRound<'a> {
    notifying: &'a Cell<bool>,
    pending: &'a RefCell<VecDeque<MoodId>>,
}

impl<'a> NotifyRound<'a> {
    fn enter(notifying: &'a Cell<bool>, pending: &'a RefCell<VecDeque<MoodId>>) -> Self {
        notifying.set(true);
        Self { notifying, pending }
    }
}

impl Drop for NotifyRound<'_> {
    fn drop(&mut self) {
        self.notifying.set(false);
        if std::thread::panicking() {
            self.pending.borrow_mut().clear();
        }
    }
}

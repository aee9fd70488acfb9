//! Observer registration types.

use std::cell::RefCell;
use std::rc::Rc;

use crate::mood::MoodId;

use super::selection::SelectionStore;

/// Handle identifying one registered observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub(crate) u64);

/// Delivered to observers after the selection has been updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodChange {
    pub previous: MoodId,
    pub current: MoodId,
}

impl MoodChange {
    /// Whether the mood actually changed.
    ///
    /// Re-selecting the current mood still notifies observers; this lets
    /// them skip redundant work.
    pub fn is_change(&self) -> bool {
        self.previous != self.current
    }
}

/// Shared, locally mutable observer callback.
pub(crate) type Observer<'r> = Rc<RefCell<dyn FnMut(&SelectionStore<'r>, &MoodChange)>>;

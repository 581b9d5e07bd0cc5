//! UI-thread half of reconciliation.

use tracing::{debug, trace};

use super::{FieldUpdate, Update};
use crate::store::WindowStore;
use crate::watcher::WatchRegistry;

/// Result of applying one update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The store changed; the screen needs a redraw.
    Changed,
    /// Nothing observable changed.
    Unchanged,
}

impl Applied {
    pub fn needs_redraw(self) -> bool {
        self == Applied::Changed
    }
}

/// Applies [`Update`]s to the store and keeps per-window watches in step.
///
/// Holds no state of its own; the store and watches are passed in by the
/// thread that owns them.
#[derive(Debug, Default, Clone, Copy)]
pub struct Reconciler;

impl Reconciler {
    pub fn new() -> Self {
        Self
    }

    pub fn apply<W: WatchRegistry>(
        &self,
        store: &mut WindowStore,
        watches: &mut W,
        update: Update,
    ) -> Applied {
        match update {
            Update::Upsert(window) => {
                watches.register(&window.id, &window.dir);
                if store.get(&window.id) == Some(&window) {
                    trace!("upsert {} is a no-op", window.id);
                    return Applied::Unchanged;
                }
                debug!("window {} added", window.id);
                store.put(window);
                Applied::Changed
            }
            Update::Remove(id) => {
                // Deregister unconditionally: a failed or racing upsert may
                // have left a watch behind without a store entry.
                watches.deregister(&id);
                let removed = store.delete_within(&id);
                for nested in removed.iter().filter(|r| **r != id) {
                    watches.deregister(nested);
                }
                if removed.is_empty() {
                    return Applied::Unchanged;
                }
                debug!("removed {} window(s) under {id}", removed.len());
                Applied::Changed
            }
            Update::Field { id, field } => {
                let Some(window) = store.get_mut(&id) else {
                    trace!("update for unknown window {id} ignored");
                    return Applied::Unchanged;
                };
                let slot = match field {
                    FieldUpdate::Content(value) => (&mut window.content, value),
                    FieldUpdate::Tag(value) => (&mut window.tag, value),
                };
                match slot {
                    (current, value) if *current == value => Applied::Unchanged,
                    (current, value) => {
                        *current = value;
                        Applied::Changed
                    }
                }
            }
        }
    }

    /// Apply a batch, reporting whether any of it changed the store.
    pub fn apply_all<W: WatchRegistry>(
        &self,
        store: &mut WindowStore,
        watches: &mut W,
        updates: impl IntoIterator<Item = Update>,
    ) -> Applied {
        updates
            .into_iter()
            .fold(Applied::Unchanged, |acc, update| {
                match self.apply(store, watches, update) {
                    Applied::Changed => Applied::Changed,
                    Applied::Unchanged => acc,
                }
            })
    }
}

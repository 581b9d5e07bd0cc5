//! The authoritative window set.

use dirwm_common::WindowId;
use std::collections::BTreeMap;

use crate::window::Window;

/// Mapping from window id to window, iterated in lexicographic id order.
///
/// Not synchronized: every call happens on the UI thread.
#[derive(Debug, Default)]
pub struct WindowStore {
    windows: BTreeMap<WindowId, Window>,
}

impl WindowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the window with the same id.
    pub fn put(&mut self, window: Window) {
        self.windows.insert(window.id.clone(), window);
    }

    /// Remove a window. Removing an absent id is a no-op.
    pub fn delete(&mut self, id: &WindowId) -> Option<Window> {
        self.windows.remove(id)
    }

    /// Remove `id` and every nested window below it, returning the removed ids.
    pub fn delete_within(&mut self, id: &WindowId) -> Vec<WindowId> {
        let doomed: Vec<WindowId> = self
            .windows
            .range(id.clone()..)
            .map(|(k, _)| k)
            .take_while(|k| k.as_str().starts_with(id.as_str()))
            .filter(|k| k.is_within(id))
            .cloned()
            .collect();
        for k in &doomed {
            self.windows.remove(k);
        }
        doomed
    }

    pub fn get(&self, id: &WindowId) -> Option<&Window> {
        self.windows.get(id)
    }

    pub fn get_mut(&mut self, id: &WindowId) -> Option<&mut Window> {
        self.windows.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &WindowId> {
        self.windows.keys()
    }

    /// Owned, ordered copy of every window for rendering.
    pub fn snapshot(&self) -> Vec<Window> {
        self.windows.values().cloned().collect()
    }
}

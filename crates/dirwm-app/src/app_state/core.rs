//! DirwmApp struct definition and store-facing methods.

use dirwm_config::KeyBinding;
use dirwm_fs::{Reconciler, Update, WatchRegistry, Window, WindowStore};
use dirwm_layout::LayoutEngine;

use super::render::Renderer;

/// Top-level application state, owned by the UI thread.
///
/// Generic over the watch registry so tests can run without a filesystem
/// backend.
pub struct DirwmApp<W: WatchRegistry> {
    pub(super) store: WindowStore,
    pub(super) watches: W,
    pub(super) reconciler: Reconciler,
    pub(super) renderer: Renderer,
    pub(super) layout: LayoutEngine,

    // Bindings that all lead to quit
    pub(super) quit_bindings: Vec<KeyBinding>,

    // Whether the app should exit
    pub(super) should_exit: bool,

    // Dirty flag -- set when the store changes and a redraw is needed
    pub(super) needs_redraw: bool,
}

impl<W: WatchRegistry> DirwmApp<W> {
    pub fn new(watches: W, layout: LayoutEngine, quit_bindings: Vec<KeyBinding>) -> Self {
        Self {
            store: WindowStore::new(),
            watches,
            reconciler: Reconciler::new(),
            renderer: Renderer::new(),
            layout,
            quit_bindings,
            should_exit: false,
            // The first frame is always drawn.
            needs_redraw: true,
        }
    }

    /// Load the windows found by the startup scan, registering a watch on
    /// each.
    pub fn seed(&mut self, windows: Vec<Window>) {
        let count = windows.len();
        self.apply_all(windows.into_iter().map(Update::Upsert));
        tracing::info!("seeded {count} windows");
    }

    /// Apply one update from a watcher worker.
    pub fn apply(&mut self, update: Update) {
        let applied = self
            .reconciler
            .apply(&mut self.store, &mut self.watches, update);
        self.needs_redraw |= applied.needs_redraw();
    }

    /// Apply a batch of updates; at most one redraw follows.
    pub fn apply_all(&mut self, updates: impl IntoIterator<Item = Update>) {
        let applied = self
            .reconciler
            .apply_all(&mut self.store, &mut self.watches, updates);
        self.needs_redraw |= applied.needs_redraw();
    }

    pub fn request_quit(&mut self) {
        tracing::info!("quit requested");
        self.should_exit = true;
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    /// Clear and return the dirty flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn store(&self) -> &WindowStore {
        &self.store
    }

    /// Hand back the watch registry, consuming the app.
    pub fn into_watches(self) -> W {
        self.watches
    }
}

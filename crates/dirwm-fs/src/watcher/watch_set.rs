//! Ownership of both watch scopes and the per-window registrations.

use dirwm_common::{FsError, Scope, WindowId};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::{info, warn};

use super::scope_watcher::{RawEvent, ScopeWatcher};
use crate::context::WindowContext;
use crate::window::{CONTENT_FILE, TAG_FILE};

/// Register and deregister per-window watches.
///
/// Called only from the thread that owns the window store, so the id → watch
/// mapping needs no locking.
pub trait WatchRegistry {
    fn register(&mut self, id: &WindowId, dir: &Path);
    fn deregister(&mut self, id: &WindowId);
}

/// Receiving ends of both scopes' event streams.
pub struct WatchStreams {
    pub root: mpsc::UnboundedReceiver<RawEvent>,
    pub windows: mpsc::UnboundedReceiver<RawEvent>,
}

/// The root watcher, the shared per-window watcher, and which window
/// directories are currently registered on it.
///
/// Dropping the set releases every watch and closes both streams.
pub struct WatchSet {
    root_dir: PathBuf,
    root: ScopeWatcher,
    windows: ScopeWatcher,
    registered: HashMap<WindowId, PathBuf>,
}

impl WatchSet {
    /// Create both watchers and start watching the root.
    pub fn new(ctx: &WindowContext) -> Result<(Self, WatchStreams), FsError> {
        let (mut root, root_rx) = ScopeWatcher::new(Scope::Root)?;
        let (windows, windows_rx) = ScopeWatcher::new(Scope::Window)?;

        root.watch(ctx.root())?;

        let set = Self {
            root_dir: ctx.root().to_path_buf(),
            root,
            windows,
            registered: HashMap::new(),
        };
        let streams = WatchStreams {
            root: root_rx,
            windows: windows_rx,
        };
        Ok((set, streams))
    }

    pub fn is_registered(&self, id: &WindowId) -> bool {
        self.registered.contains_key(id)
    }
}

impl WatchRegistry for WatchSet {
    fn register(&mut self, id: &WindowId, dir: &Path) {
        if self.registered.get(id).map(PathBuf::as_path) != Some(dir) {
            if let Err(e) = self.windows.watch(dir) {
                warn!("window {id} is not watched: {e}");
                return;
            }
            self.registered.insert(id.clone(), dir.to_path_buf());
        }

        // Anything written between the read that produced this window and
        // the watch taking effect would otherwise be lost.
        self.windows
            .resync(vec![dir.join(CONTENT_FILE), dir.join(TAG_FILE)]);
    }

    fn deregister(&mut self, id: &WindowId) {
        if let Some(dir) = self.registered.remove(id) {
            self.windows.unwatch(&dir);
        }
    }
}

impl Drop for WatchSet {
    fn drop(&mut self) {
        for dir in self.registered.values() {
            self.windows.unwatch(dir);
        }
        self.root.unwatch(&self.root_dir);
        info!(
            "released root watch and {} window watches",
            self.registered.len()
        );
    }
}

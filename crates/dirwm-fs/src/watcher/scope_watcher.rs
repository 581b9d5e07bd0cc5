//! A `notify` watcher bound to one scope.
//!
//! The `notify` callback runs on the backend's own thread; it only forwards
//! raw results into an unbounded tokio channel that the scope's worker task
//! drains.

use dirwm_common::{FsError, Scope};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// What a scope watcher delivers: an event or a backend error.
pub type RawEvent = notify::Result<Event>;

/// Watches any number of directories (non-recursively) for one scope.
pub struct ScopeWatcher {
    scope: Scope,
    watcher: RecommendedWatcher,
    tx: mpsc::UnboundedSender<RawEvent>,
}

impl ScopeWatcher {
    /// Create the watcher and the receiving end of its event stream.
    ///
    /// The stream ends once the watcher is dropped.
    pub fn new(scope: Scope) -> Result<(Self, mpsc::UnboundedReceiver<RawEvent>), FsError> {
        let (tx, rx) = mpsc::unbounded_channel();

        let callback_tx = tx.clone();
        let watcher = RecommendedWatcher::new(
            move |result: RawEvent| {
                // Receiver gone means we are shutting down.
                let _ = callback_tx.send(result);
            },
            notify::Config::default(),
        )
        .map_err(|e| FsError::Watch(format!("failed to create {scope} watcher: {e}")))?;

        Ok((Self { scope, watcher, tx }, rx))
    }

    /// Start watching `path`.
    pub fn watch(&mut self, path: &Path) -> Result<(), FsError> {
        self.watcher
            .watch(path, RecursiveMode::NonRecursive)
            .map_err(|e| FsError::Watch(format!("failed to watch {}: {e}", path.display())))?;
        info!("{} watch added for {}", self.scope, path.display());
        Ok(())
    }

    /// Stop watching `path`. Failure (typically: the directory is already
    /// gone and the backend dropped the watch) is only logged.
    pub fn unwatch(&mut self, path: &Path) -> bool {
        match self.watcher.unwatch(path) {
            Ok(()) => {
                debug!("{} watch removed for {}", self.scope, path.display());
                true
            }
            Err(e) => {
                debug!("{} unwatch of {} ignored: {e}", self.scope, path.display());
                false
            }
        }
    }

    /// Queue a synthetic "something changed" event for `paths` on this
    /// scope's stream, so the worker re-reads them in order with real events.
    pub fn resync(&self, paths: Vec<PathBuf>) {
        let event = paths
            .into_iter()
            .fold(Event::new(EventKind::Any), |event, path| event.add_path(path));
        let _ = self.tx.send(Ok(event));
    }
}

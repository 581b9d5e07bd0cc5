//! Filesystem watchers for the two scopes.
//!
//! The root scope sees window directories appear and disappear; the window
//! scope sees `content` and `tag` change inside registered directories.

mod scope_watcher;
mod watch_set;


pub use scope_watcher::{RawEvent, ScopeWatcher};
pub use watch_set::{WatchRegistry, WatchSet, WatchStreams};

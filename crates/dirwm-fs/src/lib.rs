//! Filesystem-backed window model.
//!
//! Each subdirectory of a watched root is one window. This crate discovers
//! windows ([`scanner`]), watches the tree ([`watcher`]), turns raw
//! filesystem events into window updates ([`reconciler`]) and keeps the
//! authoritative [`WindowStore`].

pub mod context;
pub mod reconciler;
pub mod scanner;
pub mod seed;
pub mod store;
pub mod watcher;
pub mod window;

pub use context::WindowContext;
pub use reconciler::{
    run_scope_worker, Applied, Change, ChangeKind, Decoder, FieldUpdate, Reconciler, Update,
};
pub use scanner::scan;
pub use seed::{run_captured, seed_window};
pub use store::WindowStore;
pub use watcher::{RawEvent, ScopeWatcher, WatchRegistry, WatchSet, WatchStreams};
pub use window::Window;

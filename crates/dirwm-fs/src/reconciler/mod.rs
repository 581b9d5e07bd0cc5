//! Turns filesystem events into window store mutations.
//!
//! Work is split in two halves:
//! - [`Decoder`] runs on the watcher workers. It looks at the disk (stat,
//!   file reads) and produces [`Update`] messages.
//! - [`Reconciler`] runs on the UI thread. It applies updates to the
//!   [`WindowStore`](crate::WindowStore) and keeps per-window watches in step.

mod apply;
mod change;
mod decode;
mod worker;


pub use apply::{Applied, Reconciler};
pub use change::{Change, ChangeKind};
pub use decode::Decoder;
pub use worker::run_scope_worker;

use dirwm_common::WindowId;

use crate::window::Window;

/// A new value for one of a window's files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Content(String),
    Tag(String),
}

/// A mutation computed by a worker, applied on the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    /// A window directory exists; (re)load it and watch it.
    Upsert(Window),
    /// A window directory is gone, together with anything nested in it.
    Remove(WindowId),
    /// One file of an existing window changed.
    Field { id: WindowId, field: FieldUpdate },
}

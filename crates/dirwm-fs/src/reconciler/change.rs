//! Backend-neutral filesystem changes.

use notify::event::{AccessKind, AccessMode, ModifyKind, RenameMode};
use notify::{Event, EventKind};
use std::path::PathBuf;

/// What happened to a path, reduced to what the reconciler cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Create,
    Write,
    Remove,
}

/// One change to one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub kind: ChangeKind,
    pub path: PathBuf,
}

impl Change {
    pub fn new(kind: ChangeKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    /// Split a `notify` event into per-path changes.
    ///
    /// Renames become a remove of the old name and a create of the new one.
    /// Reads and opens carry no change and are dropped.
    pub fn from_notify(event: &Event) -> Vec<Change> {
        let kind = match event.kind {
            EventKind::Create(_) => ChangeKind::Create,
            EventKind::Remove(_) => ChangeKind::Remove,
            EventKind::Modify(ModifyKind::Name(RenameMode::From)) => ChangeKind::Remove,
            EventKind::Modify(ModifyKind::Name(RenameMode::To)) => ChangeKind::Create,
            EventKind::Modify(ModifyKind::Name(RenameMode::Both)) => {
                let mut changes = Vec::with_capacity(2);
                if let Some(from) = event.paths.first() {
                    changes.push(Change::new(ChangeKind::Remove, from.clone()));
                }
                if let Some(to) = event.paths.get(1) {
                    changes.push(Change::new(ChangeKind::Create, to.clone()));
                }
                return changes;
            }
            EventKind::Modify(_) => ChangeKind::Write,
            EventKind::Access(AccessKind::Close(AccessMode::Write)) => ChangeKind::Write,
            EventKind::Access(_) => return Vec::new(),
            EventKind::Any | EventKind::Other => ChangeKind::Write,
        };

        event
            .paths
            .iter()
            .map(|path| Change::new(kind, path.clone()))
            .collect()
    }
}

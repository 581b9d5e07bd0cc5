//! Worker-side decoding: inspect the disk and decide what an event means.

use dirwm_common::Scope;
use notify::Event;
use std::borrow::Cow;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

use super::{Change, ChangeKind, FieldUpdate, Update};
use crate::context::WindowContext;
use crate::window::{read_content, read_tag, Window, CONTENT_FILE, TAG_FILE};

/// What a path currently is on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stat {
    Missing,
    File,
    Dir,
}

/// Symlinks are not followed, matching the startup scan.
fn stat(path: &Path) -> Stat {
    match std::fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => Stat::Dir,
        Ok(_) => Stat::File,
        Err(e) if e.kind() == io::ErrorKind::NotFound => Stat::Missing,
        Err(e) => {
            // Unreadable counts as gone.
            warn!("stat {} failed: {e}", path.display());
            Stat::Missing
        }
    }
}

/// Editors write `name~` backups next to the real file; treat them as `name`.
fn strip_backup_suffix(path: &Path) -> Cow<'_, Path> {
    match path.file_name().and_then(|n| n.to_str()) {
        Some(name) if name.len() > 1 && name.ends_with('~') => {
            Cow::Owned(path.with_file_name(&name[..name.len() - 1]))
        }
        _ => Cow::Borrowed(path),
    }
}

/// Decodes changes for either scope into updates.
#[derive(Debug, Clone)]
pub struct Decoder {
    ctx: WindowContext,
}

impl Decoder {
    pub fn new(ctx: WindowContext) -> Self {
        Self { ctx }
    }

    /// Decode a raw `notify` event from `scope`.
    pub fn decode_event(&self, scope: Scope, event: &Event) -> Vec<Update> {
        Change::from_notify(event)
            .iter()
            .filter_map(|change| self.decode(scope, change))
            .collect()
    }

    /// Decode one change, dispatching on the scope it was observed in.
    pub fn decode(&self, scope: Scope, change: &Change) -> Option<Update> {
        let update = match scope {
            Scope::Root => self.decode_root(change.kind, &change.path),
            Scope::Window => self.decode_window(&strip_backup_suffix(&change.path)),
        };
        debug!(
            "{scope} {:?} {} -> {:?}",
            change.kind,
            change.path.display(),
            update.as_ref().map(summary)
        );
        update
    }

    /// Root scope: window directories appearing and disappearing.
    fn decode_root(&self, kind: ChangeKind, path: &Path) -> Option<Update> {
        let id = self.ctx.direct_child_id(path)?;

        match (stat(path), kind) {
            (Stat::Missing, _) | (_, ChangeKind::Remove) => Some(Update::Remove(id)),
            (Stat::Dir, ChangeKind::Create) => Some(Update::Upsert(Window::load(&self.ctx, id))),
            // Files in the root and writes to existing directories are inert.
            (Stat::File, _) | (Stat::Dir, ChangeKind::Write) => None,
        }
    }

    /// Window scope: `content` / `tag` changing inside a window directory.
    /// `path` has already had any backup suffix removed.
    fn decode_window(&self, path: &Path) -> Option<Update> {
        if stat(path) == Stat::Dir {
            return None;
        }

        let dir = path.parent()?;
        let id = self.ctx.window_id(dir)?;
        let field = match path.file_name()?.to_str()? {
            CONTENT_FILE => FieldUpdate::Content(read_content(dir)),
            TAG_FILE => FieldUpdate::Tag(read_tag(dir, self.ctx.working_dir())),
            _ => return None,
        };

        Some(Update::Field { id, field })
    }
}

fn summary(update: &Update) -> String {
    match update {
        Update::Upsert(w) => format!("upsert {}", w.id),
        Update::Remove(id) => format!("remove {id}"),
        Update::Field {
            id,
            field: FieldUpdate::Content(_),
        } => format!("content {id}"),
        Update::Field {
            id,
            field: FieldUpdate::Tag(_),
        } => format!("tag {id}"),
    }
}

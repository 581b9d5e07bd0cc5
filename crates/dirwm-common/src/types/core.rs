use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Cell-based rectangle on the terminal grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CellRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// Identity of a window: its directory path relative to the watched root,
/// components joined with `/` so nested windows get compound ids.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build an id from a path relative to the root. Returns `None` for the
    /// root itself.
    pub fn from_relative(relative: &Path) -> Option<Self> {
        let parts: Vec<String> = relative
            .components()
            .filter_map(|c| match c {
                std::path::Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(Self(parts.join("/")))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if `self` is `ancestor` or lives underneath it.
    pub fn is_within(&self, ancestor: &WindowId) -> bool {
        self.0 == ancestor.0
            || self
                .0
                .strip_prefix(ancestor.0.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which watch produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    /// The watched root; window directories appear and disappear here.
    Root,
    /// A single window's directory; its `content` and `tag` files change here.
    Window,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Root => write!(f, "root"),
            Scope::Window => write!(f, "window"),
        }
    }
}

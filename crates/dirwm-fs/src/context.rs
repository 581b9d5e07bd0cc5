//! Paths shared by every component that reads windows from disk.

use dirwm_common::{FsError, WindowId};
use std::path::{Path, PathBuf};

/// The watched root and the working directory, both absolute.
///
/// Passed explicitly to the scanner and decoders so default tags never
/// depend on process-wide state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowContext {
    root: PathBuf,
    working_dir: PathBuf,
}

impl WindowContext {
    /// Build a context; a relative `root` is resolved against `working_dir`.
    pub fn new(root: impl AsRef<Path>, working_dir: impl Into<PathBuf>) -> Self {
        let working_dir = working_dir.into();
        let root = root.as_ref();
        let root = if root.is_absolute() {
            root.to_path_buf()
        } else {
            working_dir.join(root)
        };
        Self { root, working_dir }
    }

    /// Build a context using the process working directory.
    pub fn from_current_dir(root: impl AsRef<Path>) -> Result<Self, FsError> {
        let working_dir = std::env::current_dir().map_err(FsError::WorkingDir)?;
        Ok(Self::new(root, working_dir))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Directory backing a window.
    pub fn window_dir(&self, id: &WindowId) -> PathBuf {
        id.as_str()
            .split('/')
            .fold(self.root.clone(), |path, part| path.join(part))
    }

    /// Id of the window whose directory is `dir`, or `None` for paths
    /// outside the root and for the root itself.
    pub fn window_id(&self, dir: &Path) -> Option<WindowId> {
        let relative = dir.strip_prefix(&self.root).ok()?;
        WindowId::from_relative(relative)
    }

    /// Id of the window whose directory is `path`, if `path` sits directly
    /// in the root. Deeper paths belong to the window scope.
    pub fn direct_child_id(&self, path: &Path) -> Option<WindowId> {
        if path.parent() != Some(self.root.as_path()) {
            return None;
        }
        self.window_id(path)
    }
}

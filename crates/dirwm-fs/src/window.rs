//! The window entity and best-effort reads of its backing files.

use dirwm_common::WindowId;
use std::path::{Path, PathBuf};

use crate::context::WindowContext;

/// Body text file inside a window directory.
pub const CONTENT_FILE: &str = "content";
/// Title suffix file inside a window directory.
pub const TAG_FILE: &str = "tag";
/// Suffix of the tag a window gets when it has no `tag` file.
pub const DEFAULT_TAG_SUFFIX: &str = "New Del Look";

/// One window, backed by one directory under the watched root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub id: WindowId,
    /// Directory the window was read from.
    pub dir: PathBuf,
    /// Working directory the default tag was computed against.
    pub origin_pwd: PathBuf,
    pub tag: String,
    pub content: String,
}

impl Window {
    /// Read a window's files. Never fails: missing or unreadable files fall
    /// back to empty content and the default tag.
    pub fn load(ctx: &WindowContext, id: WindowId) -> Self {
        let dir = ctx.window_dir(&id);
        Self {
            tag: read_tag(&dir, ctx.working_dir()),
            content: read_content(&dir),
            origin_pwd: ctx.working_dir().to_path_buf(),
            dir,
            id,
        }
    }
}

/// Contents of `<dir>/content`, or empty if it can't be read.
pub fn read_content(dir: &Path) -> String {
    match std::fs::read(dir.join(CONTENT_FILE)) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(_) => String::new(),
    }
}

/// Tag from `<dir>/tag`, or the default tag if it can't be read.
pub fn read_tag(dir: &Path, working_dir: &Path) -> String {
    match std::fs::read(dir.join(TAG_FILE)) {
        Ok(bytes) => parse_tag(&String::from_utf8_lossy(&bytes)),
        Err(_) => default_tag(dir, working_dir),
    }
}

/// First line of a tag file with surrounding spaces removed.
pub fn parse_tag(raw: &str) -> String {
    raw.lines().next().unwrap_or("").trim_matches(' ').to_string()
}

/// `"New Del Look"` for the working directory itself, otherwise the working
/// directory followed by `"New Del Look"`.
pub fn default_tag(dir: &Path, working_dir: &Path) -> String {
    if dir == working_dir {
        DEFAULT_TAG_SUFFIX.to_string()
    } else {
        format!("{}{}", working_dir.display(), DEFAULT_TAG_SUFFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_reads_content_and_tag() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = WindowContext::new(tmp.path().join("fs"), tmp.path());
        let dir = ctx.root().join("a");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("content"), "x\ny").unwrap();
        std::fs::write(dir.join("tag"), "  T  \n").unwrap();

        let window = Window::load(&ctx, WindowId::new("a"));
        assert_eq!(window.content, "x\ny");
        assert_eq!(window.tag, "T");
        assert_eq!(window.dir, dir);
        assert_eq!(window.origin_pwd, tmp.path());
    }

    #[test]
    fn missing_files_fall_back() {
        let ctx = WindowContext::new("/nonexistent_dirwm_root", "/work");
        let window = Window::load(&ctx, WindowId::new("gone"));
        assert_eq!(window.content, "");
        assert_eq!(window.tag, "/workNew Del Look");
    }

    #[test]
    fn default_tag_in_working_dir() {
        let dir = Path::new("/work");
        assert_eq!(default_tag(dir, Path::new("/work")), "New Del Look");
    }

    #[test]
    fn default_tag_elsewhere_is_prefixed() {
        let dir = Path::new("/work/fs/a");
        assert_eq!(default_tag(dir, Path::new("/work")), "/workNew Del Look");
    }

    #[test]
    fn parse_tag_trims_spaces_only() {
        assert_eq!(parse_tag("  Del Snarf  "), "Del Snarf");
        assert_eq!(parse_tag("\tT"), "\tT");
    }

    #[test]
    fn parse_tag_keeps_first_line() {
        assert_eq!(parse_tag("T\nsecond"), "T");
        assert_eq!(parse_tag(""), "");
    }

    #[test]
    fn invalid_utf8_content_is_lossy() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("content"), [b'o', b'k', 0xff]).unwrap();
        assert_eq!(read_content(tmp.path()), "ok\u{fffd}");
    }
}

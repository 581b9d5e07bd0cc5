//! One-shot directory walk that discovers the initial window set.

use dirwm_common::FsError;
use std::io;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::context::WindowContext;
use crate::window::Window;

/// Walk the root recursively and load every directory below it as a window.
///
/// Nested directories become compound ids (`a/b`). Entries that vanish
/// mid-walk are skipped; any other I/O error aborts the scan.
pub fn scan(ctx: &WindowContext) -> Result<Vec<Window>, FsError> {
    let mut windows = Vec::new();

    for entry in WalkDir::new(ctx.root()).min_depth(1).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_not_found(&err) => {
                debug!("skipping vanished entry during scan: {err}");
                continue;
            }
            Err(err) => {
                let path = err.path().unwrap_or(ctx.root()).to_path_buf();
                let source = err
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
                return Err(FsError::Scan { path, source });
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        if let Some(id) = ctx.window_id(entry.path()) {
            windows.push(Window::load(ctx, id));
        }
    }

    info!(
        "scanned {} windows under {}",
        windows.len(),
        ctx.root().display()
    );
    Ok(windows)
}

fn is_not_found(err: &walkdir::Error) -> bool {
    err.io_error()
        .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn setup() -> (tempfile::TempDir, WindowContext) {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("fs");
        fs::create_dir(&root).unwrap();
        let ctx = WindowContext::new(&root, tmp.path());
        (tmp, ctx)
    }

    #[test]
    fn empty_root_has_no_windows() {
        let (_tmp, ctx) = setup();
        assert!(scan(&ctx).unwrap().is_empty());
    }

    #[test]
    fn direct_children_become_windows() {
        let (_tmp, ctx) = setup();
        fs::create_dir(ctx.root().join("a")).unwrap();
        fs::write(ctx.root().join("a/content"), "x\ny").unwrap();
        fs::write(ctx.root().join("a/tag"), "T").unwrap();
        fs::create_dir(ctx.root().join("b")).unwrap();

        let windows = scan(&ctx).unwrap();
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].id.as_str(), "a");
        assert_eq!(windows[0].content, "x\ny");
        assert_eq!(windows[0].tag, "T");
        assert_eq!(windows[1].id.as_str(), "b");
        assert_eq!(windows[1].content, "");
    }

    #[test]
    fn nested_directories_get_compound_ids() {
        let (_tmp, ctx) = setup();
        fs::create_dir_all(ctx.root().join("a/b")).unwrap();

        let ids: Vec<String> = scan(&ctx)
            .unwrap()
            .into_iter()
            .map(|w| w.id.to_string())
            .collect();
        assert_eq!(ids, ["a", "a/b"]);
    }

    #[test]
    fn files_in_root_are_not_windows() {
        let (_tmp, ctx) = setup();
        fs::write(ctx.root().join("README"), "hi").unwrap();
        assert!(scan(&ctx).unwrap().is_empty());
    }

    #[test]
    fn missing_tag_uses_working_dir_default() {
        let (tmp, ctx) = setup();
        fs::create_dir(ctx.root().join("a")).unwrap();
        let windows = scan(&ctx).unwrap();
        assert_eq!(
            windows[0].tag,
            format!("{}New Del Look", tmp.path().display())
        );
    }

    #[test]
    fn missing_root_yields_no_windows() {
        let ctx = WindowContext::new("/nonexistent_dirwm_scan_root", "/");
        assert!(scan(&ctx).unwrap().is_empty());
    }
}

//! Creating windows from the output of a command.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{info, warn};

use crate::window::CONTENT_FILE;

/// Run `program` with `args` and return its stdout.
///
/// Never fails: if the program can't be started or exits unsuccessfully the
/// result is `"<program>error"`. Stdin is closed and stderr is discarded.
pub fn run_captured<I, S>(program: &str, args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output();

    match output {
        Ok(out) if out.status.success() => String::from_utf8_lossy(&out.stdout).into_owned(),
        Ok(out) => {
            warn!("{program} exited with {}", out.status);
            format!("{program}error")
        }
        Err(e) => {
            warn!("failed to run {program}: {e}");
            format!("{program}error")
        }
    }
}

/// Create `<root>/<name>/` and fill its `content` with the output of
/// `program args`. Returns the window directory.
pub fn seed_window<I, S>(root: &Path, name: &str, program: &str, args: I) -> io::Result<PathBuf>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    if name.is_empty() || name.contains('/') || name == "." || name == ".." {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid window name: {name:?}"),
        ));
    }

    let dir = root.join(name);
    std::fs::create_dir_all(&dir)?;
    let content = run_captured(program, args);
    std::fs::write(dir.join(CONTENT_FILE), content)?;
    info!("seeded window {name} from {program}");
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_stdout() {
        assert_eq!(run_captured("echo", ["hello"]), "hello\n");
    }

    #[test]
    fn missing_program_reports_error() {
        assert_eq!(
            run_captured("dirwm-no-such-program", Vec::<&str>::new()),
            "dirwm-no-such-programerror"
        );
    }

    #[test]
    fn failing_program_reports_error() {
        assert_eq!(run_captured("false", Vec::<&str>::new()), "falseerror");
    }

    #[test]
    fn seed_window_writes_content() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = seed_window(tmp.path(), "demo", "echo", ["x"]).unwrap();
        assert_eq!(dir, tmp.path().join("demo"));
        assert_eq!(std::fs::read_to_string(dir.join("content")).unwrap(), "x\n");
    }

    #[test]
    fn seed_window_rejects_nested_names() {
        let tmp = tempfile::tempdir().unwrap();
        let err = seed_window(tmp.path(), "a/b", "echo", ["x"]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}

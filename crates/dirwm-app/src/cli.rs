use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// dirwm: a terminal window manager whose windows are the directories
/// under a watched root.
#[derive(Parser, Debug)]
#[command(name = "dirwm", version, about)]
pub struct Args {
    /// Watched root directory (overrides `[watch].root`).
    #[arg(short = 'r', long)]
    pub root: Option<PathBuf>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error) or a full
    /// filter directive such as `dirwm_fs=trace`.
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Create a window whose content is the output of a command.
    Seed {
        /// Window directory name, created directly under the root.
        name: String,
        /// Program to run.
        program: String,
        /// Arguments passed to the program.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

impl Args {
    /// The `tracing` directive requested on the command line, if any.
    pub fn log_directive(&self) -> Option<String> {
        let level = self.log_level.as_deref()?.trim();
        if level.contains('=') {
            Some(level.to_string())
        } else {
            Some(format!("dirwm={level}"))
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_runs_the_ui() {
        let args = Args::try_parse_from(["dirwm"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.root.is_none());
        assert!(args.log_directive().is_none());
    }

    #[test]
    fn root_override() {
        let args = Args::try_parse_from(["dirwm", "--root", "/srv/fs"]).unwrap();
        assert_eq!(args.root, Some(PathBuf::from("/srv/fs")));
    }

    #[test]
    fn log_level_becomes_directive() {
        let args = Args::try_parse_from(["dirwm", "--log-level", "debug"]).unwrap();
        assert_eq!(args.log_directive().as_deref(), Some("dirwm=debug"));

        let args = Args::try_parse_from(["dirwm", "--log-level", "dirwm_fs=trace"]).unwrap();
        assert_eq!(args.log_directive().as_deref(), Some("dirwm_fs=trace"));
    }

    #[test]
    fn seed_collects_program_arguments() {
        let args =
            Args::try_parse_from(["dirwm", "seed", "files", "ls", "-la", "/tmp"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Seed {
                name: "files".into(),
                program: "ls".into(),
                args: vec!["-la".into(), "/tmp".into()],
            })
        );
    }
}

mod app_state;
mod cli;
mod logging;

use std::process::ExitCode;
use std::time::Duration;

use dirwm_common::{ConfigError, DirwmError};
use dirwm_config::DirwmConfig;
use dirwm_fs::WindowContext;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // Leave raw mode first or the message is unreadable.
        app_state::restore_terminal();
        tracing::error!("panic: {info}");
        default_hook(info);
    }));
}

/// Load the config named on the command line, or the default one.
///
/// An explicit path must load; problems with the default file fall back to
/// defaults and are reported once logging is up.
fn load_config(args: &cli::Args) -> Result<(DirwmConfig, Option<ConfigError>), ConfigError> {
    match &args.config {
        Some(path) => dirwm_config::toml_loader::load_from_path(path).map(|c| (c, None)),
        None => Ok(match dirwm_config::load_config() {
            Ok(config) => (config, None),
            Err(e) => (DirwmConfig::default(), Some(e)),
        }),
    }
}

fn run(args: cli::Args) -> Result<(), DirwmError> {
    let (mut config, config_warning) = load_config(&args)?;
    if let Some(root) = &args.root {
        config.watch.root = root.clone();
    }

    let log_path = logging::init(&config.logging, args.log_directive().as_deref());
    tracing::info!("dirwm v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(path) = log_path {
        tracing::debug!("logging to {}", path.display());
    }
    if let Some(e) = config_warning {
        tracing::warn!("config load failed, using defaults: {e}");
    }

    let ctx = WindowContext::from_current_dir(&config.watch.root)?;

    if let Some(cli::Command::Seed {
        name,
        program,
        args: program_args,
    }) = &args.command
    {
        let dir = dirwm_fs::seed_window(ctx.root(), name, program, program_args)?;
        println!("{}", dir.display());
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("dirwm-worker")
        .build()?;

    tracing::info!("entering event loop");
    let result = runtime.block_on(app_state::run(ctx, config));
    runtime.shutdown_timeout(Duration::from_secs(2));
    tracing::info!("shutdown complete");
    result
}

fn main() -> ExitCode {
    install_panic_hook();

    let args = cli::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e}");
            eprintln!("dirwm: {e}");
            ExitCode::FAILURE
        }
    }
}

//! Top-level application state and the UI event loop.
//!
//! The UI thread owns the window store and the watch set. Watcher workers
//! only decode events; their [`Update`](dirwm_fs::Update)s are applied here,
//! followed by at most one layout + render pass per wakeup.

mod core;
mod event_handler;
mod init;
mod render;
mod shutdown;
mod terminal;

pub use terminal::restore_terminal;

use terminal::{TerminalGuard, TerminalSurface};

use crossterm::event::EventStream;
use futures_util::StreamExt;

use dirwm_common::{Result, UiError};
use dirwm_config::DirwmConfig;
use dirwm_fs::WindowContext;

/// Run the window manager until a quit key is pressed.
///
/// Startup errors are returned before the terminal is touched.
pub async fn run(ctx: WindowContext, config: DirwmConfig) -> Result<()> {
    let init::Started {
        mut app,
        mut updates,
        workers,
    } = init::start(&ctx, &config)?;

    let mut surface = TerminalSurface::new(TerminalGuard::enter()?);
    let mut events = EventStream::new();
    let mut updates_open = true;

    let result = loop {
        if app.take_redraw() {
            if let Err(e) = app.redraw(&mut surface) {
                break Err(e.into());
            }
        }
        if app.should_exit() {
            break Ok(());
        }

        tokio::select! {
            update = updates.recv(), if updates_open => match update {
                Some(update) => {
                    app.apply(update);
                    // Coalesce whatever else is already queued.
                    while let Ok(update) = updates.try_recv() {
                        app.apply(update);
                    }
                }
                None => {
                    tracing::warn!("all watch workers stopped, windows are no longer updated");
                    updates_open = false;
                }
            },
            event = events.next() => match event {
                Some(Ok(event)) => app.handle_input(&event),
                Some(Err(e)) => break Err(UiError::Terminal(e).into()),
                None => {
                    tracing::info!("input stream ended");
                    break Ok(());
                }
            },
        }
    };

    drop(surface);
    shutdown::shutdown(app, workers).await;
    result
}

//! Startup: watches, initial scan, and the per-scope workers.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use dirwm_common::{Result, Scope};
use dirwm_config::DirwmConfig;
use dirwm_fs::{run_scope_worker, scan, Decoder, Update, WatchSet, WindowContext};
use dirwm_layout::LayoutEngine;

use super::core::DirwmApp;

/// Everything the event loop needs once startup succeeded.
pub(super) struct Started {
    pub app: DirwmApp<WatchSet>,
    pub updates: mpsc::UnboundedReceiver<Update>,
    pub workers: Vec<JoinHandle<()>>,
}

/// Watch the root, scan it, and spawn one decoding worker per scope.
///
/// The root watch is in place before the scan, so a directory created in
/// between is reported by both and converges to one window. Must be called
/// inside a tokio runtime.
pub(super) fn start(ctx: &WindowContext, config: &DirwmConfig) -> Result<Started> {
    let quit_bindings = dirwm_config::keybinds::parse_all(&config.keybinds)?;
    let layout = LayoutEngine {
        gap: config.layout.gap as usize,
    };

    let (watches, streams) = WatchSet::new(ctx)?;
    let windows = scan(ctx)?;

    let (update_tx, updates) = mpsc::unbounded_channel();
    let decoder = Decoder::new(ctx.clone());
    let workers = vec![
        tokio::spawn(run_scope_worker(
            Scope::Root,
            decoder.clone(),
            streams.root,
            update_tx.clone(),
        )),
        tokio::spawn(run_scope_worker(
            Scope::Window,
            decoder,
            streams.windows,
            update_tx,
        )),
    ];

    let mut app = DirwmApp::new(watches, layout, quit_bindings);
    app.seed(windows);

    tracing::info!(
        "watching {} with {} windows",
        ctx.root().display(),
        app.store().len()
    );
    Ok(Started {
        app,
        updates,
        workers,
    })
}

//! Graceful shutdown: release watches, then wait for the workers.

use std::time::Duration;

use tokio::task::JoinHandle;

use dirwm_fs::WatchSet;

use super::core::DirwmApp;

/// How long workers get to notice their streams closed.
const WORKER_GRACE: Duration = Duration::from_secs(2);

/// Tear down the watch side of the app.
///
/// Order matters:
/// 1. Drop the watch set (stops the backends, closes both event streams)
/// 2. Wait for each worker to drain and exit, aborting stragglers
pub(super) async fn shutdown(app: DirwmApp<WatchSet>, workers: Vec<JoinHandle<()>>) {
    tracing::info!("initiating graceful shutdown");

    drop(app.into_watches());

    for worker in workers {
        let abort = worker.abort_handle();
        match tokio::time::timeout(WORKER_GRACE, worker).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!("watch worker ended abnormally: {e}"),
            Err(_) => {
                tracing::warn!("watch worker did not stop in time, aborting");
                abort.abort();
            }
        }
    }

    tracing::info!("graceful shutdown complete");
}

//! Per-scope worker task.

use std::sync::Arc;

use dirwm_common::Scope;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use super::{Decoder, Update};
use crate::watcher::RawEvent;

/// Drain one scope's raw events, decode them in arrival order, and forward
/// the resulting updates to the UI.
///
/// Returns when the watcher side closes the stream or the UI stops
/// receiving. Backend errors are logged and skipped. Decoding reads the disk,
/// so it runs on the blocking pool; events are still handled one at a time.
pub async fn run_scope_worker(
    scope: Scope,
    decoder: Decoder,
    mut events: mpsc::UnboundedReceiver<RawEvent>,
    updates: mpsc::UnboundedSender<Update>,
) {
    info!("{scope} worker started");
    let decoder = Arc::new(decoder);

    while let Some(result) = events.recv().await {
        let event = match result {
            Ok(event) => event,
            Err(e) => {
                error!("{scope} watch error: {e}");
                continue;
            }
        };

        let decoder = Arc::clone(&decoder);
        let decoded =
            tokio::task::spawn_blocking(move || decoder.decode_event(scope, &event)).await;
        let decoded = match decoded {
            Ok(decoded) => decoded,
            Err(e) => {
                error!("{scope} decode task failed: {e}");
                continue;
            }
        };

        for update in decoded {
            if updates.send(update).is_err() {
                debug!("{scope} worker: update queue closed");
                return;
            }
        }
    }

    info!("{scope} worker stopped");
}

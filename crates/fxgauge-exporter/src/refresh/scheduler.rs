//! Periodic refresh loop.
//!
//! Single task, strictly sequential: a cycle is never re-entered while the
//! previous one is running. A cycle slower than the interval just delays the
//! next one. Cycle errors are logged and the loop keeps going; only the
//! cancellation token ends it.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::refresh::pipeline::Pipeline;

pub async fn run(pipeline: Arc<Pipeline>, interval: Duration, cancel: CancellationToken) {
    tracing::info!(interval = ?interval, "refresh loop started");

    loop {
        tracing::info!("fetching exchange rates");
        tokio::select! {
            _ = cancel.cancelled() => break,
            res = pipeline.run_cycle() => match res {
                Ok(report) => tracing::info!(
                    published = report.published,
                    skipped = report.skipped,
                    "refresh cycle finished"
                ),
                Err(e) => tracing::error!(
                    code = e.kind().as_str(),
                    error = %e,
                    "refresh cycle aborted"
                ),
            },
        }

        tracing::info!(interval = ?interval, "sleeping until next refresh");
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = tokio::time::sleep(interval) => {}
        }
    }

    tracing::info!("refresh loop stopped");
}

/// Run the loop on its own task.
pub fn spawn(
    pipeline: Arc<Pipeline>,
    interval: Duration,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(run(pipeline, interval, cancel))
}

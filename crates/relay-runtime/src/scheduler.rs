use crate::driver::SyncDriver;
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Runs passes on a fixed wall-clock interval until cancelled.
///
/// Passes never overlap: the next one is only scheduled after the
/// previous pass fully completed, cursor writes included. Cancellation
/// takes effect between passes.
pub async fn run_loop(driver: &SyncDriver, interval: Duration, cancel: CancellationToken) {
    info!("Starting relay loop, polling every {}s", interval.as_secs());

    loop {
        if cancel.is_cancelled() {
            info!("Shutdown requested, stopping relay loop");
            return;
        }

        let summary = driver.run_pass().await;
        debug!("Pass complete: {summary:?}");

        tokio::select! {
            _ = cancel.cancelled() => {
                info!("Shutdown requested, stopping relay loop");
                return;
            }
            _ = sleep(interval) => {}
        }
    }
}

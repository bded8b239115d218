//! Periodic refresh of the dashboard view-model
//!
//! One spawned task drives all aggregation cycles: the first immediately on
//! activation, then one per interval until stopped. Stop prevents any new
//! cycle from starting and drops the pending timer; a cycle already in
//! flight is left to finish and publish once.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::aggregator::Aggregator;

/// Handle to the running refresh loop
pub struct RefreshScheduler {
    stop: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl RefreshScheduler {
    /// Start the refresh loop: one cycle now, then one every `period`.
    pub fn start(aggregator: Arc<Aggregator>, period: Duration) -> Self {
        let (stop, mut stopped) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            info!("Refresh scheduler started, period {:?}", period);
            loop {
                tokio::select! {
                    // The stop signal wins over a simultaneously due tick,
                    // so no cycle starts after stop was requested.
                    biased;
                    _ = stopped.changed() => {
                        debug!("Stop requested, ending refresh loop");
                        break;
                    }
                    _ = ticker.tick() => {
                        aggregator.run_cycle().await;
                    }
                }
            }
            info!("Refresh scheduler stopped");
        });

        Self { stop, handle }
    }

    /// Request the loop to stop. No new cycle starts afterwards; an
    /// in-flight cycle finishes and publishes once.
    pub fn stop(&self) {
        let _ = self.stop.send(true);
    }

    /// Stop and wait for the loop task to finish
    pub async fn shutdown(self) {
        self.stop();
        let _ = self.handle.await;
    }

    /// Whether the loop task has exited
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

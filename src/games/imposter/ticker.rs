//! Cancellable 1 Hz scheduled task feeding the discussion countdown.
//!
//! A [`Ticker`] is a scoped resource: the task is spawned on construction
//! and aborted on drop, so releasing the value is the only cancellation
//! path and cannot be forgotten.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, instrument};

/// Handle to a running tick task.
#[derive(Debug)]
pub struct Ticker {
    handle: JoinHandle<()>,
    ticks: mpsc::UnboundedReceiver<()>,
}

impl Ticker {
    /// Spawns a task that emits one tick per `period`, first tick one full
    /// period from now.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument]
    pub fn spawn(period: Duration) -> Self {
        let (tx, ticks) = mpsc::unbounded_channel();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(()).is_err() {
                    break;
                }
            }
        });
        debug!("Ticker spawned");
        Self { handle, ticks }
    }

    /// Waits for the next tick. Returns `None` if the task has ended.
    pub async fn next(&mut self) -> Option<()> {
        self.ticks.recv().await
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
        debug!("Ticker cancelled");
    }
}

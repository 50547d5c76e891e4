use crate::clients::OrderClient;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Periodic task that counts every order's estimated time down.
///
/// The first tick fires one full `period` after spawning. The task ends when
/// [`Countdown::stop`] is awaited, when the `Countdown` is dropped, or when the order
/// actor can no longer be reached.
pub struct Countdown {
    stop: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Countdown {
    pub fn spawn(client: OrderClient, period: Duration, minutes_per_tick: u32) -> Self {
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            info!(?period, minutes_per_tick, "Countdown started");

            loop {
                tokio::select! {
                    _ = &mut stop_rx => break,
                    _ = ticker.tick() => {
                        match client.tick_estimated_time(minutes_per_tick).await {
                            Ok(orders) => debug!(size = orders.len(), "Countdown tick"),
                            Err(e) => {
                                warn!(error = %e, "Countdown tick failed, stopping");
                                break;
                            }
                        }
                    }
                }
            }

            info!("Countdown stopped");
        });

        Self {
            stop: Some(stop_tx),
            handle: Some(handle),
        }
    }

    /// Stops the task and waits for it to finish.
    pub async fn stop(mut self) -> Result<(), JoinError> {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        match self.handle.take() {
            Some(handle) => handle.await,
            None => Ok(()),
        }
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

//! Cancellable market ticker.
//!
//! The periodic tick is an explicit tokio task with a stop handle, not
//! a fire-and-forget interval: tearing down the trading view must be
//! able to cancel it and await completion.

use crate::session::TradingSession;
use log::debug;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Handle to a running ticker task. Dropping it without calling
/// `stop` detaches the task; callers are expected to stop it.
pub struct TickerHandle {
    stop_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl TickerHandle {
    /// Signals shutdown and waits for the task to finish.
    pub async fn stop(self) {
        let _ = self.stop_tx.send(true);
        let _ = self.task.await;
    }
}

/// Spawns a task that ticks the session's market on a fixed interval
/// until stopped. The session lock is held only for the synchronous
/// tick itself, never across an await point.
pub fn spawn_ticker(session: Arc<Mutex<TradingSession>>, interval: Duration) -> TickerHandle {
    let (stop_tx, mut stop_rx) = watch::channel(false);

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first interval tick fires immediately; swallow it so the
        // seeded prices survive until one full interval has elapsed.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Ok(mut session) = session.lock() {
                        session.tick();
                    }
                }
                changed = stop_rx.changed() => {
                    if changed.is_err() || *stop_rx.borrow() {
                        break;
                    }
                }
            }
        }
        debug!("market ticker stopped");
    });

    TickerHandle { stop_tx, task }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ticker_runs_and_stops() {
        let session = Arc::new(Mutex::new(TradingSession::with_defaults()));
        let handle = spawn_ticker(session.clone(), Duration::from_millis(5));

        tokio::time::sleep(Duration::from_millis(60)).await;
        handle.stop().await;

        let ticks = session.lock().unwrap().market().ticks();
        assert!(ticks >= 1, "Ticker never advanced the market");

        // No further ticks after stop.
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(session.lock().unwrap().market().ticks(), ticks);
    }
}

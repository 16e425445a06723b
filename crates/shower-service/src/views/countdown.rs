//! Live countdown to the event

use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::debug;

use shower_core::TimeLeft;

/// Tick period
pub const TICK: Duration = Duration::from_secs(1);

/// Recomputes the time left once a second until the event starts
///
/// The ticking task stops on its own once the target is reached and is
/// aborted when the view is stopped or dropped.
pub struct CountdownView {
    target: DateTime<Utc>,
    rx: watch::Receiver<TimeLeft>,
    ticker: Option<JoinHandle<()>>,
}

impl CountdownView {
    /// Start ticking towards `target`
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(target: DateTime<Utc>) -> Self {
        let (tx, rx) = watch::channel(TimeLeft::until(target, Utc::now()));

        let ticker = tokio::spawn(async move {
            let mut tick = interval(TICK);
            tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tick.tick().await;

                let left = TimeLeft::until(target, Utc::now());
                if tx.send(left).is_err() || left.is_zero() {
                    break;
                }
            }
            debug!(%target, "Countdown ticker finished");
        });

        Self {
            target,
            rx,
            ticker: Some(ticker),
        }
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    /// Latest value published by the ticker
    pub fn current(&self) -> TimeLeft {
        *self.rx.borrow()
    }

    /// Receiver notified on every tick
    pub fn subscribe(&self) -> watch::Receiver<TimeLeft> {
        self.rx.clone()
    }

    pub fn is_running(&self) -> bool {
        self.ticker.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stop ticking; the last value stays readable
    pub fn stop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

impl Drop for CountdownView {
    fn drop(&mut self) {
        self.stop();
    }
}

// SPDX-License-Identifier: MIT

//!
//! The playback scheduling port
//!

use log::debug;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// The scheduling port the controller drives its playback timer through
///
/// An implementation never holds more than one pending timer:
/// [`start`](TickScheduler::start) replaces whatever was scheduled before.
/// Injecting a fake implementation gives deterministic controller tests with
/// no wall-clock waits.
pub trait TickScheduler: Send {
    /// Schedule a recurring tick every `interval`, replacing any pending
    /// timer
    fn start(&mut self, interval: Duration);

    /// Cancel the pending timer, if any
    fn stop(&mut self);
}

/// A [`TickScheduler`] backed by a [`tokio::time`] interval task
///
/// [`start`](TickScheduler::start) must be called from within a tokio
/// runtime.  The task is aborted on [`stop`](TickScheduler::stop) and when
/// the scheduler is dropped, so a discarded controller never leaks its
/// timer.
pub struct TokioTickScheduler {
    on_tick: Arc<dyn Fn() + Send + Sync>,
    handle: Option<JoinHandle<()>>,
}

impl TokioTickScheduler {
    pub fn new(on_tick: impl Fn() + Send + Sync + 'static) -> TokioTickScheduler {
        TokioTickScheduler {
            on_tick: Arc::new(on_tick),
            handle: None,
        }
    }
}

impl TickScheduler for TokioTickScheduler {
    fn start(&mut self, interval: Duration) {
        self.stop();
        debug!("Scheduling playback ticks every {interval:?}");
        let on_tick = Arc::clone(&self.on_tick);
        self.handle = Some(tokio::spawn(async move {
            // The first tick fires one full period after start, not
            // immediately
            let first = tokio::time::Instant::now() + interval;
            let mut ticker = tokio::time::interval_at(first, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                on_tick();
            }
        }));
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            debug!("Cancelling playback ticks");
            handle.abort();
        }
    }
}

impl Drop for TokioTickScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

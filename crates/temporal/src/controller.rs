// SPDX-License-Identifier: MIT

//!
//! The temporal range controller
//!

use crate::{
    InvalidIntervalError, PlaybackState, SubscriptionId, TemporalConfig, TemporalError,
    TemporalEvent, TemporalSnapshot, TickScheduler, TokioTickScheduler,
};
use chrono::NaiveDate;
use grid_view_core::{DateRange, FrameSequence, InvalidRangeError};
use log::{debug, info};
use std::fmt;
use std::sync::{Arc, Mutex, Weak};

/// A controller shared between the UI and the playback timer
pub type SharedController = Arc<Mutex<TemporalRangeController>>;

type Subscriber = Box<dyn FnMut(&TemporalEvent) + Send>;

/// Maintains a consistent (range, cursor, playback) triple for the viewer
///
/// The cursor always lies inside the range; replacing the range clamps it
/// back in.  Playback advances the cursor one frame per interval, wrapping
/// past the end of the range, and owns its timer exclusively through the
/// injected [`TickScheduler`].
///
/// The controller publishes every state change to subscribers and never
/// fetches data itself: the heatmap store and the slider react to the
/// published events.
pub struct TemporalRangeController {
    /// The configured window ranges are clamped into
    window: DateRange,

    range: DateRange,
    cursor: NaiveDate,
    playback: PlaybackState,
    scheduler: Box<dyn TickScheduler>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl TemporalRangeController {
    /// Create a stopped controller covering the config's full window, with
    /// the cursor on the first day
    pub fn new(
        config: TemporalConfig,
        scheduler: Box<dyn TickScheduler>,
    ) -> Result<TemporalRangeController, TemporalError> {
        let window = DateRange::new(config.min_date, config.max_date)?;
        let playback = PlaybackState::stopped(config.interval_ms)?;
        Ok(TemporalRangeController {
            window,
            range: window,
            cursor: window.start(),
            playback,
            scheduler,
            subscribers: Vec::new(),
            next_subscription: 0,
        })
    }

    /// Build a controller behind a shared handle, driven by a tokio timer
    ///
    /// Must be called from within a tokio runtime.  The timer task holds
    /// only a weak reference, so dropping the returned handle tears the
    /// timer down with the controller.
    pub fn shared(config: TemporalConfig) -> Result<SharedController, TemporalError> {
        config.validate()?;
        Ok(Arc::new_cyclic(
            |weak: &Weak<Mutex<TemporalRangeController>>| {
                let weak = weak.clone();
                let scheduler = TokioTickScheduler::new(move || {
                    if let Some(controller) = weak.upgrade() {
                        if let Ok(mut controller) = controller.lock() {
                            controller.tick();
                        }
                    }
                });
                // `validate` above makes this constructor infallible
                let controller = TemporalRangeController::new(config, Box::new(scheduler))
                    .expect("config already validated");
                Mutex::new(controller)
            },
        ))
    }

    //--------------------------------------------------------------------------
    // Read accessors
    //--------------------------------------------------------------------------

    /// The configured window ranges are clamped into
    pub fn window(&self) -> DateRange {
        self.window
    }

    /// The inclusive date range under analysis
    pub fn range(&self) -> DateRange {
        self.range
    }

    /// The date currently displayed
    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    /// The playback state (running flag and speed)
    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    /// Whether playback is currently running
    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    /// Milliseconds between playback frames
    pub fn interval_ms(&self) -> u64 {
        self.playback.interval_ms()
    }

    /// The daily frames the current range covers
    pub fn frames(&self) -> FrameSequence {
        self.range.frames()
    }

    /// The cursor's position within the frame sequence
    pub fn frame_index(&self) -> usize {
        // The cursor invariant keeps this inside the range
        self.frames().index_of(self.cursor).unwrap_or(0)
    }

    /// An immutable snapshot of the full controller state
    pub fn snapshot(&self) -> TemporalSnapshot {
        TemporalSnapshot {
            range: self.range,
            cursor: self.cursor,
            playing: self.playback.is_playing(),
            interval_ms: self.playback.interval_ms(),
        }
    }

    //--------------------------------------------------------------------------
    // Mutations
    //--------------------------------------------------------------------------

    /// Replace the range
    ///
    /// Rejects `new_start > new_end`, leaving the prior state untouched.  On
    /// success the endpoints are clamped into the configured window the way
    /// the UI's date pickers bound their inputs, the cursor is preserved
    /// when it still falls inside the new range and clamped to the nearest
    /// bound otherwise, and a [`TemporalEvent::RangeChanged`] is published.
    pub fn set_range(
        &mut self,
        new_start: NaiveDate,
        new_end: NaiveDate,
    ) -> Result<(), InvalidRangeError> {
        if new_start > new_end {
            return Err(InvalidRangeError {
                start: new_start,
                end: new_end,
            });
        }

        // Clamping into the window preserves order, so this can't fail
        let range = DateRange::new(self.window.clamp(new_start), self.window.clamp(new_end))?;
        self.range = range;
        self.cursor = range.clamp(self.cursor);

        info!("Range set to {}..={}, cursor at {}", range.start(), range.end(), self.cursor);
        self.publish(TemporalEvent::RangeChanged {
            range,
            cursor: self.cursor,
        });
        Ok(())
    }

    /// Move the cursor, clamping silently into the range
    ///
    /// Slider rounding can hand over out-of-range dates, so this clamps
    /// rather than fails.  Nothing is published when the clamped value
    /// equals the current cursor, to spare consumers a redundant fetch.
    pub fn set_cursor(&mut self, date: NaiveDate) {
        let cursor = self.range.clamp(date);
        if cursor == self.cursor {
            return;
        }
        self.cursor = cursor;
        debug!("Cursor set to {cursor}");
        self.publish(TemporalEvent::CursorMoved { cursor });
    }

    /// Start playback
    ///
    /// Does nothing if already playing: there is never more than one pending
    /// timer.
    pub fn play(&mut self) {
        if self.playback.is_playing() {
            return;
        }
        self.playback.set_playing(true);
        self.scheduler.start(self.playback.interval());
        info!("Playback started at {}ms per frame", self.playback.interval_ms());
        self.publish(TemporalEvent::PlaybackStarted);
    }

    /// Stop playback, keeping the cursor where it is
    ///
    /// Does nothing if already paused.
    pub fn pause(&mut self) {
        if !self.playback.is_playing() {
            return;
        }
        self.playback.set_playing(false);
        self.scheduler.stop();
        info!("Playback paused at {}", self.cursor);
        self.publish(TemporalEvent::PlaybackPaused);
    }

    /// Change the playback speed
    ///
    /// Rejects a zero interval, leaving the prior speed in place.  When
    /// playing, the pending timer is replaced so the next tick fires at the
    /// new period.
    pub fn set_interval_ms(&mut self, interval_ms: u64) -> Result<(), InvalidIntervalError> {
        self.playback.set_interval_ms(interval_ms)?;
        if self.playback.is_playing() {
            self.scheduler.start(self.playback.interval());
        }
        self.publish(TemporalEvent::IntervalChanged { interval_ms });
        Ok(())
    }

    /// Advance the cursor one frame, wrapping past the end of the range
    ///
    /// Called by the scheduler.  A tick that lands after [`pause`] is
    /// ignored, and a single-day range wraps onto itself without publishing.
    ///
    /// [`pause`]: TemporalRangeController::pause
    pub fn tick(&mut self) {
        if !self.playback.is_playing() {
            return;
        }
        let cursor = self.frames().next_wrapping(self.cursor);
        if cursor == self.cursor {
            return;
        }
        self.cursor = cursor;
        debug!("Tick: cursor advanced to {cursor}");
        self.publish(TemporalEvent::CursorMoved { cursor });
    }

    //--------------------------------------------------------------------------
    // Subscriptions
    //--------------------------------------------------------------------------

    /// Register a callback for every published state change
    pub fn subscribe(
        &mut self,
        subscriber: impl FnMut(&TemporalEvent) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscription.  Returns false if the id was never registered
    /// or already removed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers
            .retain(|(subscription_id, _)| *subscription_id != id);
        self.subscribers.len() != before
    }

    fn publish(&mut self, event: TemporalEvent) {
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&event);
        }
    }
}

impl fmt::Debug for TemporalRangeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemporalRangeController")
            .field("window", &self.window)
            .field("range", &self.range)
            .field("cursor", &self.cursor)
            .field("playback", &self.playback)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

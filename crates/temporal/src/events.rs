// SPDX-License-Identifier: MIT

//!
//! Controller events and snapshots
//!

use chrono::NaiveDate;
use grid_view_core::DateRange;
use serde::Serialize;

/// Identifies one subscription so it can be removed later
#[rustfmt::skip]
#[derive(derive_more::Display, Eq, PartialEq, Clone, Copy, Debug, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub(crate) fn new(value: u64) -> SubscriptionId {
        SubscriptionId(value)
    }
}

/// State-change notifications published to subscribers
///
/// The controller publishes these instead of fetching anything itself: the
/// heatmap store reacts to cursor changes, the slider to all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TemporalEvent {
    /// The range was replaced; carries the cursor after clamping
    RangeChanged { range: DateRange, cursor: NaiveDate },

    /// The cursor moved, either via the slider or one playback tick
    CursorMoved { cursor: NaiveDate },

    PlaybackStarted,
    PlaybackPaused,

    /// The playback speed changed
    IntervalChanged { interval_ms: u64 },
}

/// An immutable snapshot of the full controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemporalSnapshot {
    pub range: DateRange,
    pub cursor: NaiveDate,
    pub playing: bool,
    pub interval_ms: u64,
}

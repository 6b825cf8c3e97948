// SPDX-License-Identifier: MIT

//!
//! Playback state
//!

use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Error returned when a playback interval of zero milliseconds is requested
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Interval `{0}`ms is not allowed (must be > 0)")]
pub struct InvalidIntervalError(pub u64);

/// Whether playback is running, and how fast
///
/// Created stopped.  The timer itself lives behind the controller's
/// scheduling port; this only records the requested state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlaybackState {
    playing: bool,
    interval_ms: u64,
}

impl PlaybackState {
    /// A stopped playback advancing one frame per `interval_ms` once started
    pub fn stopped(interval_ms: u64) -> Result<PlaybackState, InvalidIntervalError> {
        if interval_ms == 0 {
            return Err(InvalidIntervalError(interval_ms));
        }
        Ok(PlaybackState {
            playing: false,
            interval_ms,
        })
    }

    /// Whether playback is currently running
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Milliseconds between frames
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// The tick period as a [`Duration`]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub(crate) fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub(crate) fn set_interval_ms(&mut self, interval_ms: u64) -> Result<(), InvalidIntervalError> {
        if interval_ms == 0 {
            return Err(InvalidIntervalError(interval_ms));
        }
        self.interval_ms = interval_ms;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::PlaybackState;
    use std::time::Duration;

    #[test]
    fn stopped() {
        // Zero intervals are rejected
        assert!(PlaybackState::stopped(0).is_err());

        // Anything positive starts out paused
        let playback = PlaybackState::stopped(250).unwrap();
        assert!(!playback.is_playing());
        assert_eq!(playback.interval_ms(), 250);
        assert_eq!(playback.interval(), Duration::from_millis(250));
    }

    #[test]
    fn set_interval_ms() {
        let mut playback = PlaybackState::stopped(250).unwrap();
        assert!(playback.set_interval_ms(0).is_err());
        assert_eq!(playback.interval_ms(), 250);

        playback.set_interval_ms(100).unwrap();
        assert_eq!(playback.interval_ms(), 100);
    }
}

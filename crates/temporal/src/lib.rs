// SPDX-License-Identifier: MIT

//!
//! *Part of the wider GridView project*
//!
//! This library crate owns the temporal state of the GridView viewer: the
//! inclusive date range under analysis, the cursor being displayed, and the
//! playback driver that animates the cursor through the range.  It does the
//! following:
//!
//! - Keeps the (range, cursor, playback) triple consistent: the cursor
//! always lies inside the range, and replacing the range clamps it back in
//! - Drives playback through an injected scheduling port, so at most one
//! timer exists per controller and tests can substitute a fake
//! - Publishes every state change to subscribers (the heatmap store, the
//! slider) rather than fetching any data itself
//!
//! This crate makes use of the basic GridView `core` crate for the range and
//! frame-sequence primitives, and is itself used by the demo binaries.
//!

mod config;
mod controller;
mod events;
mod playback;
mod scheduler;

pub use config::*;
pub use controller::*;
pub use events::*;
pub use playback::*;
pub use scheduler::*;

use grid_view_core::InvalidRangeError;
use thiserror::Error;

/// Errors that can be returned when configuring the temporal core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemporalError {
    /// The requested range's start falls after its end
    #[error(transparent)]
    Range(#[from] InvalidRangeError),

    /// The requested playback interval is zero
    #[error(transparent)]
    Interval(#[from] InvalidIntervalError),
}

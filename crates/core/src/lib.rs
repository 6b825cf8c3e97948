// SPDX-License-Identifier: MIT

//!
//! *Part of the wider GridView project*
//!
//! This crate defines the basic temporal datatypes used across the GridView
//! project (temporal controller, demo binaries, data-fetch consumers).
//!
//! GridView visualizes power-grid components overlaid with weather heatmaps,
//! one calendar day at a time.  The types here describe the day-granular
//! window under analysis:
//!
//! - [`DateRange`]: an inclusive [start, end] calendar window, valid by
//! construction
//! - [`FrameSequence`]: the ordered daily frames a range covers, with
//! wrapping successor arithmetic for playback
//! - [`HeatmapParameter`] and [`FrameKey`]: the identity of one heatmap
//! frame, so consumers can turn a cursor date into a data request
//!
//! This crate aims to provide APIs for each type so that if a type is
//! instantiated, the developer can be sure it's valid.
//!

mod date_range;
mod frame;
mod parameter;

pub use date_range::*;
pub use frame::*;
pub use parameter::*;

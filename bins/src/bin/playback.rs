// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The GridView playback demo
//!
//! Animates the cursor through a date range the way the viewer does and
//! prints the heatmap frame request each cursor change would trigger.
//!

use chrono::NaiveDate;
use clap::Parser;
use grid_view_core::{FrameKey, HeatmapParameter};
use grid_view_temporal::{TemporalConfig, TemporalEvent, TemporalRangeController};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::sync::mpsc;

#[macro_use]
extern crate log;
extern crate simplelog;

/// Entry point for the playback demo
fn main() {
    let args = Cli::parse();

    // Setup logging
    let config_log = ConfigBuilder::new().add_filter_allow_str("grid_view").build();

    CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Info,
        config_log,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .unwrap();

    // The runtime that drives the playback timer
    let rt = tokio::runtime::Runtime::new().expect("Unable to create Runtime");
    let _enter = rt.enter();

    // Build the controller over the requested range
    let config = TemporalConfig {
        min_date: args.start,
        max_date: args.end,
        interval_ms: args.interval_ms,
    };
    let controller = match TemporalRangeController::shared(config) {
        Ok(controller) => controller,
        Err(error) => {
            eprintln!("Error: {error}");
            std::process::exit(1);
        }
    };

    // Forward each cursor move out of the subscriber, the way the heatmap
    // store would turn it into a fetch
    let (sender, receiver) = mpsc::channel();
    let parameter = args.parameter;
    controller.lock().unwrap().subscribe(move |event| {
        if let TemporalEvent::CursorMoved { cursor } = event {
            let _ = sender.send(FrameKey::new(parameter, *cursor));
        }
    });

    let frames = match args.frames {
        Some(frames) => frames,
        None => controller.lock().unwrap().frames().len(),
    };

    // The first frame is the range start, shown before playback begins
    println!("{}", FrameKey::new(parameter, args.start).cache_key());

    info!("Playing {frames} frames at {}ms per frame", args.interval_ms);
    controller.lock().unwrap().play();

    for _ in 0..frames.saturating_sub(1) {
        match receiver.recv() {
            Ok(key) => println!("{}", key.cache_key()),
            Err(_) => break,
        }
    }

    controller.lock().unwrap().pause();
    info!("Done");
}

/// GridView playback demo CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Animate a date range and print the heatmap frames it visits",
    after_help = "This is intended for exercising the temporal controller without the viewer UI"
)]
pub struct Cli {
    /// First day of the range (YYYY-MM-DD)
    #[arg(long, default_value = "2020-07-21")]
    pub start: NaiveDate,

    /// Last day of the range (YYYY-MM-DD)
    #[arg(long, default_value = "2020-07-30")]
    pub end: NaiveDate,

    /// Milliseconds per frame
    #[arg(long, default_value_t = 250)]
    pub interval_ms: u64,

    /// Weather parameter to request frames for
    #[arg(long, default_value = "temperature")]
    pub parameter: HeatmapParameter,

    /// How many frames to play before exiting (defaults to one full loop)
    #[arg(long)]
    pub frames: Option<usize>,
}

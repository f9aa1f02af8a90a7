// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # sensorwatch
//!
//! A terminal dashboard and library for tailing HWiNFO-style sensor CSV logs.
//!
//! This crate follows a sensor log as it grows, retains a sliding time
//! window of readings per sensor, derives summary statistics, and renders
//! everything in an interactive terminal UI with one chart per unit.
//!
//! ## Architecture
//!
//! The crate is organized into four main modules:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │ (stats,  │    │(render) │    │         │ │
//! │  └────┬────┘    │  groups) │    └─────────┘    └─────────┘ │
//! │       │         └──────────┘                                │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │ reader  │◀── CSV log on disk (incremental tail)         │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state, retention control, and user interaction logic
//! - **[`reader`]**: Log access - header parsing, encoding detection, and
//!   incremental tailing with truncation recovery
//! - **[`data`]**: Data model and pure computations - windowed readings, summary
//!   statistics, unit grouping, and deterministic colors
//! - **[`ui`]**: Terminal rendering using ratatui - statistics table, per-unit
//!   charts, and theme support
//!
//! ## Features
//!
//! - **Live tailing**: Follows the log across appends and truncations
//! - **Sliding window**: Readings older than the retention window are dropped
//! - **Per-unit charts**: Sensors sharing a unit share a chart and its y-axis
//! - **Threshold classification**: Per-unit warning/critical levels
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Watch two sensors over a five minute window
//! sensorwatch sensors.csv "CPU Temp" "GPU Temp" --window 5m
//!
//! # Print a JSON snapshot of the current statistics
//! sensorwatch sensors.csv --export
//! ```
//!
//! ### As a library
//!
//! ```no_run
//! use std::time::Duration;
//! use sensorwatch::{LogReader, StatsCalculator, ThresholdConfig};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut reader = LogReader::open("sensors.csv")?;
//! let names = reader.available_sensors();
//! reader.initialize_sensors(&names);
//!
//! let mut cursor = reader.read_initial_data(Duration::from_secs(300));
//! let calculator = StatsCalculator::new(ThresholdConfig::default());
//!
//! loop {
//!     let outcome = reader.poll_new_rows(cursor);
//!     cursor = outcome.cursor;
//!     let stats = calculator.compute_all(reader.sensors());
//!     # break;
//! }
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod data;
pub mod events;
pub mod reader;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use data::{
    Classification, Sensor, SensorGroup, SensorInfo, SensorStats, StatsCalculator,
    ThresholdConfig, Trend,
};
pub use reader::{LogCursor, LogEncoding, LogReader, PollOutcome, ReadError, SkipCounts};
pub use ui::Theme;
